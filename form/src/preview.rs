//! Renderable previews of selected files.
//!
//! A preview is a `data:` URL built from the file bytes, suitable for an
//! `<img src=..>`. Reading the bytes happens asynchronously in the browser;
//! [`ReadTicket`] makes sure a slow read of a file that was since replaced
//! or removed can never overwrite the current selection.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::values::FileUpload;

/// A `data:<mime>;base64,<payload>` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    data_url: String,
}

impl Preview {
    pub fn from_upload(upload: &FileUpload) -> Self {
        let mime = if upload.mime_type.is_empty() {
            "application/octet-stream"
        } else {
            upload.mime_type.as_str()
        };
        Self {
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(&upload.bytes)),
        }
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// Handle for one pending asynchronous file read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// The selected file of one upload field and its preview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilePreviewState {
    upload: Option<FileUpload>,
    preview: Option<Preview>,
    generation: u64,
}

impl FilePreviewState {
    /// Start reading a newly picked file.
    ///
    /// Any read started earlier becomes stale.
    pub fn begin_read(&mut self) -> ReadTicket {
        self.generation += 1;
        ReadTicket(self.generation)
    }

    /// Store the result of a read. Returns `false` (and changes nothing) when
    /// the ticket is stale.
    pub fn complete_read(&mut self, ticket: ReadTicket, upload: FileUpload) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.set(upload);
        true
    }

    /// Replace the current file, discarding the old preview.
    pub fn replace(&mut self, upload: FileUpload) {
        self.generation += 1;
        self.set(upload);
    }

    /// Remove the file and its preview.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.upload = None;
        self.preview = None;
    }

    pub fn upload(&self) -> Option<&FileUpload> {
        self.upload.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.upload.is_none()
    }

    /// The selection as a file list, for validation.
    pub fn files(&self) -> Vec<FileUpload> {
        self.upload.iter().cloned().collect()
    }

    fn set(&mut self, upload: FileUpload) {
        self.preview = Some(Preview::from_upload(&upload));
        self.upload = Some(upload);
    }
}
