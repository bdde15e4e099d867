//! What gets sent to the webhook, and what comes back.

use serde::{Deserialize, Serialize};

use crate::schema::FieldName;
use crate::values::{FileUpload, FormValues};

/// The multipart body forwarded to the webhook.
///
/// Built from [`FormValues`] by clients, or read straight from an incoming
/// request by the relay server (which does not re-validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub full_name: String,
    pub contact_number: String,
    /// `DD-MM-YYYY`
    pub birth_date: String,
    pub profile_pic: FileUpload,
    pub signature: FileUpload,
}

impl SubmissionPayload {
    /// Text parts, keyed by part name.
    pub fn text_parts(&self) -> [(&'static str, &str); 3] {
        [
            (FieldName::FullName.as_str(), self.full_name.as_str()),
            (FieldName::ContactNumber.as_str(), self.contact_number.as_str()),
            (FieldName::BirthDate.as_str(), self.birth_date.as_str()),
        ]
    }

    /// Binary parts, keyed by part name.
    pub fn file_parts(&self) -> [(&'static str, &FileUpload); 2] {
        [
            (FieldName::ProfilePic.as_str(), &self.profile_pic),
            (FieldName::Signature.as_str(), &self.signature),
        ]
    }

    /// Total size of both files in bytes.
    pub fn file_bytes(&self) -> u64 {
        self.profile_pic.size() + self.signature.size()
    }
}

impl From<FormValues> for SubmissionPayload {
    fn from(values: FormValues) -> Self {
        SubmissionPayload {
            full_name: values.full_name,
            contact_number: values.contact_number,
            birth_date: values.birth_date.to_string(),
            profile_pic: values.profile_picture,
            signature: values.signature,
        }
    }
}

/// Outcome of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}
