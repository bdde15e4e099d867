//! Form state container.
//!
//! Owns every input, both file previews, the inline errors and the
//! `submitting` flag. Resetting after a successful submission is a direct
//! state update; nothing outside this struct needs to be poked.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::payload::SubmissionResult;
use crate::preview::{FilePreviewState, ReadTicket};
use crate::schema::{FieldName, FileField};
use crate::validate::validate_on;
use crate::values::{FieldErrors, FileUpload, FormValues, RawFormInput, ValidationResult};

/// Why a submission could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Another submission is still in flight.
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// At least one field failed validation.
    #[error("Form has invalid fields: {0}")]
    Invalid(FieldErrors),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    full_name: String,
    contact_number: String,
    birth_date: String,
    profile_pic: FilePreviewState,
    signature: FilePreviewState,
    errors: FieldErrors,
    submitting: bool,
    /// Once a submit was attempted, every edit re-validates.
    attempted: bool,
    today: Option<NaiveDate>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin "today" for the birth date range instead of the local clock.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
        self.revalidate();
    }

    pub fn set_contact_number(&mut self, value: impl Into<String>) {
        self.contact_number = value.into();
        self.revalidate();
    }

    pub fn set_birth_date(&mut self, value: impl Into<String>) {
        self.birth_date = value.into();
        self.revalidate();
    }

    // -------------------------------------------------------------------------
    // Files
    // -------------------------------------------------------------------------

    pub fn file(&self, field: FileField) -> &FilePreviewState {
        match field {
            FileField::ProfilePicture => &self.profile_pic,
            FileField::Signature => &self.signature,
        }
    }

    fn file_mut(&mut self, field: FileField) -> &mut FilePreviewState {
        match field {
            FileField::ProfilePicture => &mut self.profile_pic,
            FileField::Signature => &mut self.signature,
        }
    }

    /// A file was picked and its bytes are being read.
    pub fn begin_read(&mut self, field: FileField) -> ReadTicket {
        self.file_mut(field).begin_read()
    }

    /// The bytes of a picked file are available. Stale reads are dropped.
    pub fn complete_read(&mut self, field: FileField, ticket: ReadTicket, upload: FileUpload) -> bool {
        let applied = self.file_mut(field).complete_read(ticket, upload);
        if applied {
            self.revalidate();
        }
        applied
    }

    /// Replace the file of one field.
    pub fn select_file(&mut self, field: FileField, upload: FileUpload) {
        self.file_mut(field).replace(upload);
        self.revalidate();
    }

    /// Remove the file and preview of one field.
    pub fn remove_file(&mut self, field: FileField) {
        self.file_mut(field).clear();
        self.revalidate();
    }

    // -------------------------------------------------------------------------
    // Validation and submission
    // -------------------------------------------------------------------------

    pub fn raw_input(&self) -> RawFormInput {
        RawFormInput {
            full_name: self.full_name.clone(),
            contact_number: self.contact_number.clone(),
            birth_date: self.birth_date.clone(),
            profile_pic: self.profile_pic.files(),
            signature: self.signature.files(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate_on(&self.raw_input(), self.today())
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline message for one field, if any.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and, if the form is valid, mark a submission as in flight.
    ///
    /// Entered values are kept whatever the outcome.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.attempted = true;
        match self.validate() {
            Ok(values) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Ok(values)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Success resets the form; failure keeps every value.
    pub fn finish_submit(&mut self, result: &SubmissionResult) {
        self.submitting = false;
        if result.success {
            self.reset();
        }
    }

    /// Empty every field and preview.
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.contact_number.clear();
        self.birth_date.clear();
        self.profile_pic.clear();
        self.signature.clear();
        self.errors = FieldErrors::default();
        self.attempted = false;
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = self.validate().err().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::with_today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        state.set_full_name("Jane Doe");
        state.set_contact_number("+919876543210");
        state.set_birth_date("14-02-1994");
        state.select_file(
            FileField::ProfilePicture,
            FileUpload::new("me.png", "image/png", vec![1; 64]),
        );
        state.select_file(
            FileField::Signature,
            FileUpload::new("sig.jpg", "image/jpeg", vec![2; 32]),
        );
        state
    }

    #[test]
    fn test_successful_submission_resets_everything() {
        let mut state = filled();
        let values = state.begin_submit().expect("valid form");
        assert_eq!(values.full_name, "Jane Doe");
        assert!(state.is_submitting());

        state.finish_submit(&SubmissionResult::success("Data submitted successfully!"));

        assert!(!state.is_submitting());
        assert_eq!(state.full_name(), "");
        assert_eq!(state.contact_number(), "");
        assert_eq!(state.birth_date(), "");
        for field in FileField::ALL {
            assert!(state.file(field).is_empty());
            assert!(state.file(field).preview().is_none());
        }
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_failed_submission_keeps_values() {
        let mut state = filled();
        state.begin_submit().unwrap();

        state.finish_submit(&SubmissionResult::failure(
            "Submission failed: 500 Internal Server Error. Details: server error",
        ));

        assert!(!state.is_submitting());
        assert_eq!(state.full_name(), "Jane Doe");
        assert_eq!(state.birth_date(), "14-02-1994");
        assert!(state.file(FileField::ProfilePicture).preview().is_some());
        assert!(state.file(FileField::Signature).upload().is_some());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn test_invalid_submit_keeps_input_and_shows_errors() {
        let mut state = filled();
        state.set_full_name("J");
        state.remove_file(FileField::Signature);

        let err = state.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ref e) if e.len() == 2));
        assert!(!state.is_submitting());
        assert_eq!(state.full_name(), "J");
        assert_eq!(state.error(FieldName::Signature), Some("Signature is required."));

        // Edits after a failed attempt re-validate
        state.set_full_name("Jo");
        assert_eq!(state.error(FieldName::FullName), None);
        assert!(state.error(FieldName::Signature).is_some());
    }

    #[test]
    fn test_edits_before_first_submit_do_not_show_errors() {
        let mut state = FormState::new();
        state.set_full_name("J");
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_async_read_lands_in_state() {
        let mut state = FormState::new();
        let ticket = state.begin_read(FileField::Signature);
        assert!(state.complete_read(
            FileField::Signature,
            ticket,
            FileUpload::new("sig.png", "image/png", vec![0; 8]),
        ));
        assert!(state.file(FileField::Signature).preview().is_some());
        assert!(state.file(FileField::ProfilePicture).is_empty());
    }

    #[test]
    fn test_reset_discards_pending_reads() {
        let mut state = filled();
        let ticket = state.begin_read(FileField::ProfilePicture);
        state.reset();

        assert!(!state.complete_read(
            FileField::ProfilePicture,
            ticket,
            FileUpload::new("late.png", "image/png", vec![0; 8]),
        ));
        assert!(state.file(FileField::ProfilePicture).is_empty());
    }
}
