//! Validation limits, patterns and per-field rule checks.
//!
//! Each check returns the message of the first rule that fails, so a field
//! never carries more than one error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::values::{BirthDate, BirthDateError, FileUpload};

// =============================================================================
// Limits
// =============================================================================

/// Minimum number of characters in the full name.
pub const MIN_FULL_NAME_CHARS: usize = 2;

/// E.164-like contact number: optional `+`, no leading zero, 2 to 15 ASCII digits.
pub const CONTACT_NUMBER_PATTERN: &str = r"^\+?[1-9][0-9]{1,14}$";

/// chrono format of the birth date as typed and as sent to the webhook.
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Profile picture size limit (inclusive).
pub const PROFILE_PICTURE_MAX_BYTES: u64 = 5_000_000;

/// Signature size limit (inclusive).
pub const SIGNATURE_MAX_BYTES: u64 = 2_000_000;

static CONTACT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CONTACT_NUMBER_PATTERN).expect("Invalid contact number pattern"));

// =============================================================================
// Messages
// =============================================================================

pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 2 characters.";
pub const CONTACT_NUMBER_INVALID: &str = "Please enter a valid contact number.";
pub const BIRTH_DATE_REQUIRED: &str = "A date of birth is required.";
pub const BIRTH_DATE_MALFORMED: &str = "Date of birth must be in DD-MM-YYYY format.";
pub const BIRTH_DATE_IN_FUTURE: &str = "Date of birth cannot be in the future.";
pub const BIRTH_DATE_TOO_EARLY: &str = "Date of birth cannot be before 01-01-1900.";

// =============================================================================
// File constraints
// =============================================================================

/// Limits and messages for one file input.
#[derive(Debug, PartialEq, Eq)]
pub struct FileConstraints {
    /// Largest accepted size in bytes (inclusive).
    pub max_bytes: u64,
    /// Accepted MIME types.
    pub accepted_types: &'static [&'static str],
    pub required_message: &'static str,
    pub too_large_message: &'static str,
    pub unsupported_type_message: &'static str,
    /// Hint shown inside the empty drop zone.
    pub hint: &'static str,
}

pub(crate) static PROFILE_PICTURE: FileConstraints = FileConstraints {
    max_bytes: PROFILE_PICTURE_MAX_BYTES,
    accepted_types: &["image/jpeg", "image/png", "image/gif"],
    required_message: "Profile picture is required.",
    too_large_message: "Max file size is 5MB.",
    unsupported_type_message: "Only .jpg, .png, and .gif formats are supported.",
    hint: "PNG, JPG, GIF up to 5MB",
};

pub(crate) static SIGNATURE: FileConstraints = FileConstraints {
    max_bytes: SIGNATURE_MAX_BYTES,
    accepted_types: &["image/jpeg", "image/png"],
    required_message: "Signature is required.",
    too_large_message: "Max file size is 2MB.",
    unsupported_type_message: "Only .jpg and .png formats are supported.",
    hint: "PNG, JPG up to 2MB",
};

impl FileConstraints {
    /// Value for the `accept` attribute of the file input.
    pub fn accept_attr(&self) -> String {
        self.accepted_types.join(",")
    }

    pub fn accepts_type(&self, mime_type: &str) -> bool {
        self.accepted_types.contains(&mime_type)
    }

    /// Presence of exactly one file, then size, then type.
    pub fn check<'a>(&self, files: &'a [FileUpload]) -> Result<&'a FileUpload, &'static str> {
        let file = match files {
            [file] => file,
            _ => return Err(self.required_message),
        };
        if file.size() > self.max_bytes {
            return Err(self.too_large_message);
        }
        if !self.accepts_type(&file.mime_type) {
            return Err(self.unsupported_type_message);
        }
        Ok(file)
    }
}

// =============================================================================
// Text rules
// =============================================================================

pub fn check_full_name(value: &str) -> Result<&str, &'static str> {
    if value.chars().count() < MIN_FULL_NAME_CHARS {
        return Err(FULL_NAME_TOO_SHORT);
    }
    Ok(value)
}

pub fn check_contact_number(value: &str) -> Result<&str, &'static str> {
    if !CONTACT_NUMBER_RE.is_match(value) {
        return Err(CONTACT_NUMBER_INVALID);
    }
    Ok(value)
}

/// Earliest accepted birth date.
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Birth date must parse and fall within `01-01-1900 ..= today`.
pub fn check_birth_date(value: &str, today: NaiveDate) -> Result<BirthDate, &'static str> {
    let date = BirthDate::parse(value).map_err(|e| match e {
        BirthDateError::Missing => BIRTH_DATE_REQUIRED,
        BirthDateError::Malformed(_) => BIRTH_DATE_MALFORMED,
    })?;
    if date.as_naive() > today {
        return Err(BIRTH_DATE_IN_FUTURE);
    }
    if date.as_naive() < earliest_birth_date() {
        return Err(BIRTH_DATE_TOO_EARLY);
    }
    Ok(date)
}
