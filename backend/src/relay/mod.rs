//! Submission relay: one multipart POST to the configured webhook.
//!
//! ## Outcomes
//!
//! | Webhook answer                 | Result                                                        |
//! |--------------------------------|---------------------------------------------------------------|
//! | no answer (network error)      | failure, `An error occurred: ...`                             |
//! | non-2xx                        | failure, `Submission failed: <code> <reason>. Details: <body>` |
//! | 2xx, body is not JSON          | failure, `Received an invalid response from the server.`      |
//! | 2xx, JSON body                 | success, `Data submitted successfully!`                       |
//!
//! There are no retries and no timeout beyond what the transport applies.

use novacard_form::{FileUpload, SubmissionPayload, SubmissionResult};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use uuid::Uuid;

use crate::api::logs::{log_submission, LogLevel};
use crate::config::RelayConfig;
use crate::error::{RelayError, RelayResult};

/// Message returned when the webhook accepted the submission.
pub const SUCCESS_MESSAGE: &str = "Data submitted successfully!";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Forwards submissions to a single webhook.
///
/// Cheap to clone; the HTTP connection pool is shared.
#[derive(Clone, Debug)]
pub struct WebhookRelay {
    client: reqwest::Client,
    url: Url,
}

impl WebhookRelay {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.webhook_url.clone())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Forward one submission and describe the outcome for the user.
    pub async fn submit(&self, payload: &SubmissionPayload) -> SubmissionResult {
        let id = Uuid::new_v4().to_string();
        log_submission(
            LogLevel::Info,
            &id,
            format!(
                "Forwarding submission for '{}' ({} bytes of images)",
                payload.full_name,
                payload.file_bytes()
            ),
        );

        match self.forward(payload).await {
            Ok(()) => {
                log_submission(LogLevel::Success, &id, "Webhook accepted the submission");
                SubmissionResult::success(SUCCESS_MESSAGE)
            }
            Err(e) => {
                log_submission(LogLevel::Error, &id, e.to_string());
                e.into()
            }
        }
    }

    /// Single POST attempt.
    pub async fn forward(&self, payload: &SubmissionPayload) -> RelayResult<()> {
        let form = build_form(payload)?;

        let response = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            return Err(RelayError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        serde_json::from_slice::<serde_json::Value>(&body).map_err(|_| RelayError::InvalidResponse)?;

        Ok(())
    }
}

/// Build the multipart body: three text parts, two file parts.
pub fn build_form(payload: &SubmissionPayload) -> RelayResult<Form> {
    let mut form = Form::new();

    for (name, value) in payload.text_parts() {
        form = form.text(name, value.to_string());
    }

    for (name, file) in payload.file_parts() {
        form = form.part(name, file_part(file)?);
    }

    Ok(form)
}

fn file_part(file: &FileUpload) -> RelayResult<Part> {
    let mime = if file.mime_type.is_empty() {
        FALLBACK_MIME
    } else {
        file.mime_type.as_str()
    };

    Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(mime)
        .map_err(|e| RelayError::Payload(format!("invalid content type '{}': {}", mime, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            full_name: "Jane Doe".into(),
            contact_number: "+919876543210".into(),
            birth_date: "14-02-1994".into(),
            profile_pic: FileUpload::new("me.png", "image/png", b"PNGDATA".to_vec()),
            signature: FileUpload::new("sig.jpg", "image/jpeg", b"JPEGDATA".to_vec()),
        }
    }

    async fn relay_for(server: &MockServer) -> WebhookRelay {
        let url = Url::parse(&format!("{}/webhook/test", server.uri())).unwrap();
        WebhookRelay::new(url)
    }

    #[tokio::test]
    async fn test_json_response_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook/test"))
            .and(header_regex("content-type", "^multipart/form-data; boundary="))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let result = relay_for(&server).await.submit(&payload()).await;

        assert!(result.success);
        assert_eq!(result.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_multipart_body_carries_all_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        relay_for(&server).await.forward(&payload()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body = String::from_utf8_lossy(&requests[0].body);
        for needle in [
            "name=\"fullName\"",
            "Jane Doe",
            "name=\"contactNumber\"",
            "+919876543210",
            "name=\"birthDate\"",
            "14-02-1994",
            "name=\"profilePic\"; filename=\"me.png\"",
            "PNGDATA",
            "name=\"signature\"; filename=\"sig.jpg\"",
            "Content-Type: image/jpeg",
        ] {
            assert!(body.contains(needle), "missing {needle} in body");
        }
    }

    #[tokio::test]
    async fn test_error_status_reports_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .expect(1)
            .mount(&server)
            .await;

        let result = relay_for(&server).await.submit(&payload()).await;

        assert!(!result.success);
        assert!(result.message.contains("500"));
        assert!(result.message.contains("server error"));
    }

    #[tokio::test]
    async fn test_non_json_success_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Workflow was started"))
            .mount(&server)
            .await;

        let err = relay_for(&server).await.forward(&payload()).await.unwrap_err();
        assert!(matches!(err, RelayError::InvalidResponse));

        let result = SubmissionResult::from(err);
        assert_eq!(result.message, "Received an invalid response from the server.");
    }

    #[tokio::test]
    async fn test_truncated_error_body_is_transport_failure() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request.ends_with(b"--\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 64\r\n\r\nshort")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let url = Url::parse(&format!("http://{}/webhook/test", addr)).unwrap();
        let result = WebhookRelay::new(url).submit(&payload()).await;

        assert!(!result.success);
        assert!(result.message.starts_with("An error occurred:"), "{}", result.message);
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_transport_failure() {
        // Nothing listens on port 9 of localhost
        let relay = WebhookRelay::new(Url::parse("http://127.0.0.1:9/webhook").unwrap());

        let result = relay.submit(&payload()).await;

        assert!(!result.success);
        assert!(result.message.starts_with("An error occurred: "));
    }

    #[test]
    fn test_bad_mime_is_payload_error() {
        let mut bad = payload();
        bad.signature.mime_type = "not a mime".into();
        assert!(matches!(build_form(&bad), Err(RelayError::Payload(_))));

        let mut empty = payload();
        empty.signature.mime_type.clear();
        assert!(build_form(&empty).is_ok());
    }
}
