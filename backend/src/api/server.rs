//! HTTP server for the NovaCard relay.
//!
//! The frontend posts the form here; the server forwards it to the
//! configured webhook and answers with the outcome.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                              |
//! |--------|-------------------|------------------------------------------|
//! | GET    | `/health`         | Health check                             |
//! | POST   | `/api/submit`     | Multipart form in, `SubmissionResult` out |
//! | GET    | `/api/logs`       | SSE stream of relay activity             |

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use novacard_form::{FieldName, FileUpload, SubmissionResult};
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, path::Path, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::logs::{log_error, log_info, log_success, log_warning, LOG_BROADCASTER};
use super::types::{bad_request, ApiError, SubmissionParts};
use crate::config::{RelayConfig, MAX_BODY_BYTES};
use crate::error::ServerResult;
use crate::relay::WebhookRelay;

#[derive(Clone)]
struct AppState {
    relay: Arc<WebhookRelay>,
}

/// Build the application router.
///
/// With a `static_dir`, every unmatched path is served from it (the
/// compiled frontend).
pub fn router(relay: WebhookRelay, static_dir: Option<&Path>) -> Router {
    // The frontend may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let state = AppState {
        relay: Arc::new(relay),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/submit", post(submit))
        .route("/api/logs", get(sse_logs))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state);

    match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app.route("/", get(health)),
    }
}

/// Start the HTTP server
pub async fn start_server(config: RelayConfig) -> ServerResult<()> {
    let relay = WebhookRelay::from_config(&config);
    let app = router(relay, config.static_dir.as_deref());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    println!("🚀 NovaCard relay running on http://localhost:{}", config.port);
    println!("   POST /api/submit - Forward form submission");
    println!("   GET  /api/logs   - SSE log stream");
    println!("   GET  /health     - Health check");
    if let Some(ref dir) = config.static_dir {
        println!("   GET  /*          - Frontend from {}", dir.display());
    }
    println!();
    log_success(format!("Listening on port {}", config.port));
    log_info(format!("Forwarding to {}", redact(config.webhook_url.as_str())));

    axum::serve(listener, app).await?;

    Ok(())
}

/// Keep scheme and host of the webhook URL, hide the secret path.
fn redact(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(u) => format!("{}://{}/…", u.scheme(), u.host_str().unwrap_or("")),
        Err(_) => "<invalid url>".to_string(),
    }
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "novacard",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "submit": "POST /api/submit",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Log a rejected request and turn it into a 400.
fn rejected(message: String) -> ApiError {
    log_error(format!("Rejected submission: {}", message));
    bad_request(message)
}

/// Submit endpoint: read the five parts, forward them once.
async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SubmissionResult>, ApiError> {
    let mut parts = SubmissionParts::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        let Some(field_name) = FieldName::from_part_name(&name) else {
            log_warning(format!("Ignoring unknown part '{}'", name));
            continue;
        };

        match field_name {
            FieldName::ProfilePic | FieldName::Signature => {
                let file_name = field.file_name().unwrap_or(name.as_str()).to_string();
                let mime_type = field.content_type().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| rejected(format!("Read error: {}", e)))?;
                parts.set_file(field_name, FileUpload::new(file_name, mime_type, bytes.to_vec()));
            }
            FieldName::FullName | FieldName::ContactNumber | FieldName::BirthDate => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| rejected(format!("Read error: {}", e)))?;
                parts.set_text(field_name, text);
            }
        }
    }

    let payload = parts.into_payload().map_err(rejected)?;

    Ok(Json(state.relay.submit(&payload).await))
}
