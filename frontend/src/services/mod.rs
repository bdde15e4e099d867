//! Browser and backend services.
//!
//! # Services
//!
//! - [`file_reader`] - Asynchronous reading of picked files
//! - [`submit`] - Form submission to the relay backend

pub mod file_reader;
pub mod submit;

pub use file_reader::*;
pub use submit::*;
