//! Image attachments as data URIs

use crate::error::{CliError, Result};
use base64::Engine;
use std::path::Path;

/// Read an image file and encode it as `data:<mime>;base64,<payload>`
///
/// The media type is guessed from the file extension. Non-image files are
/// rejected.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(CliError::InvalidInput(format!(
            "{} is not an image ({})",
            path.display(),
            mime
        )));
    }

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(CliError::InvalidInput(format!("{} is empty", path.display())));
    }

    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_png_data_uri() {
        let file = temp_file(".png", b"\x89PNG fake");
        let uri = load_image(file.path()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.ends_with("iVBORyBmYWtl"));
    }

    #[test]
    fn test_jpeg_data_uri() {
        let file = temp_file(".jpg", b"jpeg");
        assert!(load_image(file.path()).unwrap().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_rejects_non_image() {
        let file = temp_file(".txt", b"hello");
        assert!(matches!(load_image(file.path()), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_empty_image() {
        let file = temp_file(".png", b"");
        assert!(matches!(load_image(file.path()), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_image("/definitely/not/here.png"),
            Err(CliError::Io(_))
        ));
    }
}
