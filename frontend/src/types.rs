//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notification Types** - Toasts shown after a submission
//! - **Error Types** - Frontend error handling

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Notification Types
// =============================================================================

/// Toast style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    /// Green, submission accepted
    Success,
    /// Red, something went wrong
    Error,
}

impl ToastVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "toast toast-success",
            ToastVariant::Error => "toast toast-error",
        }
    }
}

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique per page session
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(variant: ToastVariant, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            variant,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, "Success", description)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, "Error", description)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Reading a picked file failed.
    File(String),
    /// Building the request failed.
    Request(String),
    /// Network/HTTP error.
    Network(String),
    /// The relay answered with an error status and no result body.
    Server(String),
    /// The relay answered with something that is not a submission result.
    InvalidResponse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::File(msg) => write!(f, "File error: {}", msg),
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Network(msg) => write!(f, "An error occurred: {}", msg),
            AppError::Server(msg) => write!(f, "Server error: {}", msg),
            AppError::InvalidResponse(msg) => write!(f, "Received an invalid response from the server: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
