//! Asynchronous reading of picked files.
//!
//! The bytes are pulled through `Blob.arrayBuffer()`, so the UI thread is
//! never blocked while a large image loads.

use js_sys::Uint8Array;
use novacard_form::FileUpload;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::{AppError, AppResult};

/// Read a browser `File` into memory.
pub async fn read_file(file: &File) -> AppResult<FileUpload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::File(format!("Failed to read {}: {:?}", file.name(), e)))?;

    let bytes = Uint8Array::new(&buffer).to_vec();

    Ok(FileUpload::new(file.name(), file.type_(), bytes))
}
