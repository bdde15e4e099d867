//! # NovaCard Form - validation model and file previews
//!
//! Shared by the Leptos frontend (compiled to WebAssembly) and the relay
//! backend CLI. Nothing in this crate performs I/O.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │ RawFormInput │────▶│   validate   │────▶│  FormValues  │────▶│ SubmissionPayload │
//! │ (user input) │     │ (field-local)│     │   (typed)    │     │   (multipart)     │
//! └──────────────┘     └──────┬───────┘     └──────────────┘     └───────────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │ FieldErrors  │
//!                      └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Field names and the typed file-field configuration
//! - [`rules`] - Limits, patterns and per-field rule checks
//! - [`values`] - Raw input, validated values, field errors
//! - [`validate`] - Form validation entry points
//! - [`preview`] - Data-URL previews of selected files
//! - [`state`] - Form state container (inputs, previews, submitting flag)
//! - [`payload`] - Multipart payload description and submission result

pub mod schema;
pub mod rules;
pub mod values;
pub mod validate;
pub mod preview;
pub mod state;
pub mod payload;

// =============================================================================
// Re-exports
// =============================================================================

pub use schema::{FieldName, FileField};

pub use rules::{
    FileConstraints,
    BIRTH_DATE_FORMAT,
    CONTACT_NUMBER_PATTERN,
    MIN_FULL_NAME_CHARS,
    PROFILE_PICTURE_MAX_BYTES,
    SIGNATURE_MAX_BYTES,
};

pub use values::{
    BirthDate, BirthDateError,
    FieldErrors,
    FileUpload,
    FormValues,
    RawFormInput,
    ValidationResult,
};

pub use validate::{validate, validate_on};

pub use preview::{FilePreviewState, Preview, ReadTicket};

pub use state::{FormState, SubmitError};

pub use payload::{SubmissionPayload, SubmissionResult};
