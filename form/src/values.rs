//! Raw input, validated values and field errors.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::rules::BIRTH_DATE_FORMAT;
use crate::schema::{FieldName, FileField};

// =============================================================================
// Files
// =============================================================================

/// A file chosen by the user, held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Original file name
    pub file_name: String,
    /// MIME type reported by the picker (or derived from the extension)
    pub mime_type: String,
    /// File content
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size())
            .finish()
    }
}

// =============================================================================
// Birth date
// =============================================================================

static BIRTH_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("Invalid birth date pattern"));

/// Errors parsing a `DD-MM-YYYY` birth date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("Birth date is missing")]
    Missing,

    #[error("Invalid birth date '{0}', expected DD-MM-YYYY")]
    Malformed(String),
}

/// A calendar date entered as `DD-MM-YYYY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a zero-padded `DD-MM-YYYY` string.
    pub fn parse(value: &str) -> Result<Self, BirthDateError> {
        if value.is_empty() {
            return Err(BirthDateError::Missing);
        }
        if !BIRTH_DATE_SHAPE.is_match(value) {
            return Err(BirthDateError::Malformed(value.to_string()));
        }
        NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
            .map(BirthDate)
            .map_err(|_| BirthDateError::Malformed(value.to_string()))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        BirthDate(date)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTH_DATE_FORMAT))
    }
}

// =============================================================================
// Form values
// =============================================================================

/// Unvalidated form input as the user entered it.
///
/// File fields are lists so that "exactly one file" can be checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFormInput {
    pub full_name: String,
    pub contact_number: String,
    /// `DD-MM-YYYY`
    pub birth_date: String,
    pub profile_pic: Vec<FileUpload>,
    pub signature: Vec<FileUpload>,
}

impl RawFormInput {
    /// Files selected for one upload field.
    pub fn files(&self, field: FileField) -> &[FileUpload] {
        match field {
            FileField::ProfilePicture => &self.profile_pic,
            FileField::Signature => &self.signature,
        }
    }
}

/// Form values that passed every rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub contact_number: String,
    pub birth_date: BirthDate,
    pub profile_picture: FileUpload,
    pub signature: FileUpload,
}

// =============================================================================
// Errors
// =============================================================================

/// One message per failing field, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{}: {}", field, msg)).collect();
        f.write_str(&parts.join("; "))
    }
}

/// Either the validated values or the per-field errors.
pub type ValidationResult = Result<FormValues, FieldErrors>;
