//! Inlining local images as data URIs.

use crate::error::{Result, SeedanceError};
use crate::video::types::ImageSource;
use base64::Engine;
use std::path::Path;

/// Image formats recognized from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG.
    Png,
    /// JPEG.
    Jpeg,
    /// WebP.
    WebP,
    /// GIF.
    Gif,
    /// BMP.
    Bmp,
    /// TIFF.
    Tiff,
}

impl ImageFormat {
    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    /// Attempts to detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" | "jpe" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }
}

/// MIME type used when the file name does not identify an image.
pub const FALLBACK_MIME: &str = "image/jpeg";

/// Guesses an image MIME type from a file name, defaulting to JPEG.
pub fn guess_mime(file_name: &str) -> &'static str {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageFormat::from_extension)
        .map(|f| f.mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Wraps raw bytes as `data:{mime};base64,{payload}`.
pub fn to_data_uri(data: &[u8], mime: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{mime};base64,{payload}")
}

/// Produces the URL the API should see for an image: remote URLs unchanged,
/// local files and bytes as data URIs.
pub async fn resolve_image_url(source: &ImageSource) -> Result<String> {
    match source {
        ImageSource::Url(url) => Ok(url.clone()),
        ImageSource::Path(path) => {
            let data = tokio::fs::read(path)
                .await
                .map_err(|source| SeedanceError::Image {
                    path: path.clone(),
                    source,
                })?;
            let mime = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(guess_mime)
                .unwrap_or(FALLBACK_MIME);
            tracing::debug!(path = %path.display(), mime, bytes = data.len(), "inlining local image");
            Ok(to_data_uri(&data, mime))
        }
        ImageSource::Bytes { data, file_name } => {
            if data.is_empty() {
                return Err(SeedanceError::Validation("image data is empty".into()));
            }
            let mime = file_name.as_deref().map(guess_mime).unwrap_or(FALLBACK_MIME);
            Ok(to_data_uri(data, mime))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("photo.png"), "image/png");
        assert_eq!(guess_mime("PHOTO.JPG"), "image/jpeg");
        assert_eq!(guess_mime("frame.webp"), "image/webp");
        assert_eq!(guess_mime("anim.gif"), "image/gif");
    }

    #[test]
    fn test_guess_mime_fallback() {
        assert_eq!(guess_mime("no_extension"), FALLBACK_MIME);
        assert_eq!(guess_mime("notes.txt"), FALLBACK_MIME);
        assert_eq!(guess_mime("clip.mp4"), FALLBACK_MIME);
    }

    #[test]
    fn test_to_data_uri() {
        assert_eq!(to_data_uri(b"hello", "image/png"), "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_resolve_url_passthrough() {
        let url = "https://example.com/cat.jpg?sig=abc";
        let resolved = resolve_image_url(&ImageSource::url(url)).await.unwrap();
        assert_eq!(resolved, url);
    }

    #[tokio::test]
    async fn test_resolve_bytes() {
        let source = ImageSource::bytes(vec![1, 2, 3], Some("frame.png".into()));
        let resolved = resolve_image_url(&source).await.unwrap();
        assert_eq!(resolved, "data:image/png;base64,AQID");

        let source = ImageSource::bytes(vec![1, 2, 3], None);
        let resolved = resolve_image_url(&source).await.unwrap();
        assert!(resolved.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_resolve_empty_bytes_rejected() {
        let err = resolve_image_url(&ImageSource::bytes(Vec::new(), None))
            .await
            .unwrap_err();
        assert!(matches!(err, SeedanceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let err = resolve_image_url(&ImageSource::path("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, SeedanceError::Image { .. }));
        assert!(err.to_string().contains("here.png"));
    }
}
