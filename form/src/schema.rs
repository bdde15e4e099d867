//! Field names and the typed file-field configuration.
//!
//! Both file inputs share a single upload component; which limits apply is
//! selected by [`FileField`], never by inspecting the value at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::{FileConstraints, PROFILE_PICTURE, SIGNATURE};

/// Names of the five form inputs.
///
/// The serialized form is the multipart part name sent to the webhook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    ContactNumber,
    BirthDate,
    #[serde(rename = "profilePic")]
    ProfilePic,
    Signature,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [FieldName; 5] = [
        FieldName::FullName,
        FieldName::ContactNumber,
        FieldName::BirthDate,
        FieldName::ProfilePic,
        FieldName::Signature,
    ];

    /// Multipart part name / HTML input name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::ContactNumber => "contactNumber",
            FieldName::BirthDate => "birthDate",
            FieldName::ProfilePic => "profilePic",
            FieldName::Signature => "signature",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::ContactNumber => "Contact Number",
            FieldName::BirthDate => "Date of Birth",
            FieldName::ProfilePic => "Profile Picture",
            FieldName::Signature => "Signature",
        }
    }

    /// Parse a part name back into a field.
    pub fn from_part_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two file inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileField {
    ProfilePicture,
    Signature,
}

impl FileField {
    pub const ALL: [FileField; 2] = [FileField::ProfilePicture, FileField::Signature];

    /// The form field this upload fills.
    pub fn field_name(&self) -> FieldName {
        match self {
            FileField::ProfilePicture => FieldName::ProfilePic,
            FileField::Signature => FieldName::Signature,
        }
    }

    /// Size, type and message configuration for this field.
    pub fn constraints(&self) -> &'static FileConstraints {
        match self {
            FileField::ProfilePicture => &PROFILE_PICTURE,
            FileField::Signature => &SIGNATURE,
        }
    }
}
