//! Form validation entry points.
//!
//! Rules are field-local: every field is checked independently and every
//! failing field contributes exactly one message.

use chrono::{Local, NaiveDate};

use crate::rules::{check_birth_date, check_contact_number, check_full_name};
use crate::schema::{FieldName, FileField};
use crate::values::{FieldErrors, FileUpload, FormValues, RawFormInput, ValidationResult};

/// Validate against the local calendar date.
pub fn validate(input: &RawFormInput) -> ValidationResult {
    validate_on(input, Local::now().date_naive())
}

/// Validate with an explicit "today" for the birth date range.
pub fn validate_on(input: &RawFormInput, today: NaiveDate) -> ValidationResult {
    let mut errors = FieldErrors::default();

    let full_name = record(&mut errors, FieldName::FullName, check_full_name(&input.full_name));
    let contact_number = record(
        &mut errors,
        FieldName::ContactNumber,
        check_contact_number(&input.contact_number),
    );
    let birth_date = record(
        &mut errors,
        FieldName::BirthDate,
        check_birth_date(&input.birth_date, today),
    );
    let profile_picture = check_file(&mut errors, input, FileField::ProfilePicture);
    let signature = check_file(&mut errors, input, FileField::Signature);

    match (full_name, contact_number, birth_date, profile_picture, signature) {
        (Some(full_name), Some(contact_number), Some(birth_date), Some(profile_picture), Some(signature)) => {
            Ok(FormValues {
                full_name: full_name.to_string(),
                contact_number: contact_number.to_string(),
                birth_date,
                profile_picture: profile_picture.clone(),
                signature: signature.clone(),
            })
        }
        _ => Err(errors),
    }
}

fn check_file<'a>(
    errors: &mut FieldErrors,
    input: &'a RawFormInput,
    field: FileField,
) -> Option<&'a FileUpload> {
    let result = field.constraints().check(input.files(field));
    record(errors, field.field_name(), result)
}

fn record<T>(errors: &mut FieldErrors, field: FieldName, result: Result<T, &'static str>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_input() -> RawFormInput {
        RawFormInput {
            full_name: "Jane Doe".into(),
            contact_number: "+919876543210".into(),
            birth_date: "14-02-1994".into(),
            profile_pic: vec![FileUpload::new("me.gif", "image/gif", vec![7; 1024])],
            signature: vec![FileUpload::new("sig.png", "image/png", vec![9; 512])],
        }
    }

    #[test]
    fn test_valid_input_produces_values() {
        let values = validate_on(&valid_input(), today()).expect("valid form");
        assert_eq!(values.full_name, "Jane Doe");
        assert_eq!(values.birth_date.to_string(), "14-02-1994");
        assert_eq!(values.profile_picture.file_name, "me.gif");
        assert_eq!(values.signature.size(), 512);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate_on(&RawFormInput::default(), today()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FieldName::BirthDate), Some("A date of birth is required."));
        assert_eq!(errors.get(FieldName::ProfilePic), Some("Profile picture is required."));
        assert_eq!(errors.get(FieldName::Signature), Some("Signature is required."));
    }

    #[test]
    fn test_errors_are_field_local() {
        let mut input = valid_input();
        input.contact_number = "0000".into();

        let errors = validate_on(&input, today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::ContactNumber), Some("Please enter a valid contact number."));
    }

    #[test]
    fn test_profile_picture_boundary() {
        let mut input = valid_input();
        input.profile_pic = vec![FileUpload::new("big.jpg", "image/jpeg", vec![0; 5_000_000])];
        assert!(validate_on(&input, today()).is_ok());

        input.profile_pic = vec![FileUpload::new("big.jpg", "image/jpeg", vec![0; 5_000_001])];
        let errors = validate_on(&input, today()).unwrap_err();
        assert_eq!(errors.get(FieldName::ProfilePic), Some("Max file size is 5MB."));
    }

    #[test]
    fn test_gif_signature_rejected() {
        let mut input = valid_input();
        input.signature = vec![FileUpload::new("sig.gif", "image/gif", vec![0; 10])];

        let errors = validate_on(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(FieldName::Signature),
            Some("Only .jpg and .png formats are supported.")
        );
        assert!(!errors.contains(FieldName::ProfilePic));
    }

    #[test]
    fn test_validation_does_not_consume_input() {
        let mut input = valid_input();
        input.full_name = "J".into();
        let before = input.clone();

        assert!(validate_on(&input, today()).is_err());
        assert_eq!(input, before);
    }
}
