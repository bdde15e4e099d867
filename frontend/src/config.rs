//! Application configuration.
//!
//! Centralized configuration for the NovaCard frontend. The webhook URL is
//! not known here: submissions go through the relay backend.

/// Relay backend base URL.
///
/// Empty means "same origin", which is the case when the backend serves
/// the compiled frontend with `--static-dir`.
pub const BACKEND_URL: &str = "";

/// Application name, used for the page title.
pub const APP_NAME: &str = "NovaCard";

/// How long a notification stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 5_000;
