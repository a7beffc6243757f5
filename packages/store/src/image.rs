//! Employee photo thumbnails.
//!
//! Uploaded files are kept inline in the record as `data:` URLs. The file type is
//! sniffed from its leading bytes, not taken from the browser's name or MIME guess.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::error::ImageError;

/// Encode an uploaded image as a `data:<mime>;base64,...` URL.
pub fn thumbnail_data_url(bytes: &[u8], max_bytes: usize) -> Result<String, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Unreadable);
    }
    if bytes.len() > max_bytes {
        return Err(ImageError::TooLarge {
            max_kb: max_bytes / 1024,
        });
    }
    let kind = infer::get(bytes)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .ok_or(ImageError::NotAnImage)?;
    Ok(format!("data:{};base64,{}", kind.mime_type(), B64.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_becomes_data_url() {
        let url = thumbnail_data_url(&PNG_HEADER, 1024).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(url, format!("data:image/png;base64,{}", B64.encode(PNG_HEADER)));
    }

    #[test]
    fn test_rejects_non_images() {
        assert_eq!(thumbnail_data_url(b"%PDF-1.7 hello", 1024), Err(ImageError::NotAnImage));
        assert_eq!(thumbnail_data_url(b"just some text", 1024), Err(ImageError::NotAnImage));
        assert_eq!(thumbnail_data_url(&[], 1024), Err(ImageError::Unreadable));
    }

    #[test]
    fn test_rejects_oversized() {
        let mut big = PNG_HEADER.to_vec();
        big.resize(4096, 0);
        assert_eq!(
            thumbnail_data_url(&big, 2048),
            Err(ImageError::TooLarge { max_kb: 2 })
        );
    }
}
