//! Loading form files from disk for the CLI.

use novacard_form::FileUpload;
use std::fs;
use std::io;
use std::path::Path;

/// MIME type guessed from the file extension.
pub fn mime_from_extension(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().to_string()
}

/// Read a file into an upload.
pub fn load_upload(path: &Path) -> io::Result<FileUpload> {
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok(FileUpload::new(file_name, mime_from_extension(path), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension(Path::new("me.JPG")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("me.jpeg")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("sig.png")), "image/png");
        assert_eq!(mime_from_extension(Path::new("anim.gif")), "image/gif");
        assert_eq!(mime_from_extension(Path::new("scan.webp")), "image/webp");
        assert_eq!(mime_from_extension(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_load_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signature.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let upload = load_upload(&path).unwrap();
        assert_eq!(upload.file_name, "signature.png");
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.size(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_upload(&PathBuf::from("/definitely/not/here.png")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
