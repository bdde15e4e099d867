//! UI Components for the NovaCard application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DataForm`] - The details form and its submission
//! - [`FileUploadField`] - File picker with preview, configured per field
//! - [`ToastHost`] - Success / error notifications

mod hero;
mod data_form;
mod file_upload;
mod toast;
mod footer;

pub use hero::*;
pub use data_form::*;
pub use file_upload::*;
pub use toast::*;
pub use footer::*;
