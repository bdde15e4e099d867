//! REST API types for the frontend.
//!
//! The submit endpoint always answers with a [`SubmissionResult`] body, so
//! the frontend has a single shape to parse.

use axum::{http::StatusCode, Json};
use novacard_form::{FieldName, FileUpload, SubmissionPayload, SubmissionResult};

/// Error half of a handler result.
pub type ApiError = (StatusCode, Json<SubmissionResult>);

/// A 400 answer carrying a failed [`SubmissionResult`].
pub fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(SubmissionResult::failure(message)))
}

/// Collects the named multipart parts of an incoming submission.
///
/// Only presence is checked here; the content is forwarded as received.
#[derive(Debug, Default)]
pub struct SubmissionParts {
    full_name: Option<String>,
    contact_number: Option<String>,
    birth_date: Option<String>,
    profile_pic: Option<FileUpload>,
    signature: Option<FileUpload>,
}

impl SubmissionParts {
    /// Store a text part. Returns `false` if the name is not a text field.
    pub fn set_text(&mut self, field: FieldName, value: String) -> bool {
        let slot = match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::ContactNumber => &mut self.contact_number,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::ProfilePic | FieldName::Signature => return false,
        };
        *slot = Some(value);
        true
    }

    /// Store a file part. Returns `false` if the name is not a file field.
    pub fn set_file(&mut self, field: FieldName, upload: FileUpload) -> bool {
        let slot = match field {
            FieldName::ProfilePic => &mut self.profile_pic,
            FieldName::Signature => &mut self.signature,
            FieldName::FullName | FieldName::ContactNumber | FieldName::BirthDate => return false,
        };
        *slot = Some(upload);
        true
    }

    /// Names of the parts still missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let present = [
            (FieldName::FullName, self.full_name.is_some()),
            (FieldName::ContactNumber, self.contact_number.is_some()),
            (FieldName::BirthDate, self.birth_date.is_some()),
            (FieldName::ProfilePic, self.profile_pic.is_some()),
            (FieldName::Signature, self.signature.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, is_present)| !is_present)
            .map(|(field, _)| field.as_str())
            .collect()
    }

    pub fn into_payload(self) -> Result<SubmissionPayload, String> {
        let missing = self.missing();
        match (self.full_name, self.contact_number, self.birth_date, self.profile_pic, self.signature) {
            (Some(full_name), Some(contact_number), Some(birth_date), Some(profile_pic), Some(signature)) => {
                Ok(SubmissionPayload {
                    full_name,
                    contact_number,
                    birth_date,
                    profile_pic,
                    signature,
                })
            }
            _ => Err(format!("Missing multipart part(s): {}", missing.join(", "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_parts_build_payload() {
        let mut parts = SubmissionParts::default();
        assert!(parts.set_text(FieldName::FullName, "Jane".into()));
        assert!(parts.set_text(FieldName::ContactNumber, "+15550100".into()));
        assert!(parts.set_text(FieldName::BirthDate, "01-01-1990".into()));
        assert!(parts.set_file(FieldName::ProfilePic, FileUpload::new("a.png", "image/png", vec![1])));
        assert!(parts.set_file(FieldName::Signature, FileUpload::new("b.png", "image/png", vec![2])));

        let payload = parts.into_payload().unwrap();
        assert_eq!(payload.full_name, "Jane");
        assert_eq!(payload.signature.file_name, "b.png");
    }

    #[test]
    fn test_missing_parts_are_listed() {
        let mut parts = SubmissionParts::default();
        parts.set_text(FieldName::FullName, "Jane".into());

        let err = parts.into_payload().unwrap_err();
        assert_eq!(
            err,
            "Missing multipart part(s): contactNumber, birthDate, profilePic, signature"
        );
    }

    #[test]
    fn test_wrong_kind_of_part_is_refused() {
        let mut parts = SubmissionParts::default();
        assert!(!parts.set_text(FieldName::Signature, "oops".into()));
        assert!(!parts.set_file(FieldName::FullName, FileUpload::new("x", "image/png", vec![])));
        assert_eq!(parts.missing().len(), 5);
    }

    #[test]
    fn test_bad_request_shape() {
        let (status, Json(body)) = bad_request("nope");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
    }
}
