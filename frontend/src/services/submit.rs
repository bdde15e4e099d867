//! HTTP service posting the form to the relay backend.

use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use novacard_form::{FileUpload, SubmissionPayload, SubmissionResult};
use web_sys::{File, FilePropertyBag, FormData};

use crate::{AppError, AppResult};

/// Post the payload once and describe the outcome.
///
/// Never fails: every error becomes a failed [`SubmissionResult`].
pub async fn submit_form(payload: &SubmissionPayload, backend_url: &str) -> SubmissionResult {
    match post_form(payload, backend_url).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("❌ Submission failed: {}", e);
            SubmissionResult::failure(e.to_string())
        }
    }
}

async fn post_form(payload: &SubmissionPayload, backend_url: &str) -> AppResult<SubmissionResult> {
    let form_data = to_form_data(payload)?;

    let url = format!("{}/api/submit", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    parse_response(status, ok, &text)
}

/// The relay answers with a `SubmissionResult` for success and for errors
/// it handled itself; anything else is reported as is.
pub fn parse_response(status: u16, ok: bool, body: &str) -> AppResult<SubmissionResult> {
    match serde_json::from_str::<SubmissionResult>(body) {
        Ok(result) => Ok(result),
        Err(_) if !ok => Err(AppError::Server(format!("{} {}", status, body))),
        Err(e) => Err(AppError::InvalidResponse(e.to_string())),
    }
}

fn to_form_data(payload: &SubmissionPayload) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    for (name, value) in payload.text_parts() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| AppError::Request(format!("Failed to append {}: {:?}", name, e)))?;
    }

    for (name, upload) in payload.file_parts() {
        let file = to_js_file(upload)?;
        form_data
            .append_with_blob_and_filename(name, &file, &upload.file_name)
            .map_err(|e| AppError::Request(format!("Failed to append {}: {:?}", name, e)))?;
    }

    Ok(form_data)
}

fn to_js_file(upload: &FileUpload) -> AppResult<File> {
    let bits = Array::of1(&Uint8Array::from(upload.bytes.as_slice()));
    let options = FilePropertyBag::new();
    options.set_type(&upload.mime_type);

    File::new_with_u8_array_sequence_and_options(&bits, &upload.file_name, &options)
        .map_err(|e| AppError::Request(format!("Failed to wrap {}: {:?}", upload.file_name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_result() {
        let result = parse_response(200, true, r#"{"success":true,"message":"Data submitted successfully!"}"#)
            .unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_parse_relay_failure_result() {
        // The relay reports webhook failures with a 200 and a failed result
        let body = r#"{"success":false,"message":"Submission failed: 500 Internal Server Error. Details: server error"}"#;
        let result = parse_response(200, true, body).unwrap();
        assert!(!result.success);
        assert!(result.message.contains("500"));
    }

    #[test]
    fn test_parse_bad_request_result() {
        let body = r#"{"success":false,"message":"Missing multipart part(s): signature"}"#;
        let result = parse_response(400, false, body).unwrap();
        assert!(result.message.contains("signature"));
    }

    #[test]
    fn test_parse_non_json_error() {
        let err = parse_response(502, false, "Bad Gateway").unwrap_err();
        assert_eq!(err, AppError::Server("502 Bad Gateway".into()));
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }

    #[test]
    fn test_parse_non_json_success() {
        let err = parse_response(200, true, "<html>").unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }
}
