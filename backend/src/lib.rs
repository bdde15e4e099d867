//! # NovaCard - form submission relay
//!
//! Receives the NovaCard details form (name, phone, birth date, profile
//! picture, signature) and forwards it, unchanged, to a webhook.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Frontend   │────▶│ /api/submit │────▶│    Relay    │────▶│   Webhook   │
//! │ (validates) │     │ (multipart) │     │ (1 attempt) │     │ (external)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                       │
//!        └────────── SubmissionResult ◀──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use novacard::{RelayConfig, WebhookRelay};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = RelayConfig::new("https://hooks.example.com/webhook/abc").unwrap();
//!     let relay = WebhookRelay::from_config(&config);
//!     let result = relay.submit(&payload).await;
//!     println!("{}", result.message);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Startup configuration
//! - [`relay`] - Webhook forwarding
//! - [`files`] - Reading uploads from disk (CLI)
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Forwarding
pub mod relay;

// CLI helpers
pub mod files;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, RelayError, ServerError};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{RelayConfig, DEFAULT_PORT, PORT_ENV, WEBHOOK_URL_ENV};

// =============================================================================
// Re-exports - Relay
// =============================================================================

pub use relay::{build_form, WebhookRelay, SUCCESS_MESSAGE};

pub use files::{load_upload, mime_from_extension};

// =============================================================================
// Re-exports - Form model
// =============================================================================

pub use novacard_form::{
    validate, FieldErrors, FormValues, RawFormInput, SubmissionPayload, SubmissionResult,
};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
