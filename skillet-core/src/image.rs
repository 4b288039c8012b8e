//! Image validation for recipe and profile pictures.
//!
//! A picked image is validated locally (size, format) before it is attached
//! to a multipart submission. No transcoding happens client-side.

use std::io::Cursor;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageFormat, ImageReader};

use crate::error::ApiError;

/// Allowed image formats for recipe photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum file size for images (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// A validated image ready for multipart submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// The raw image bytes.
    pub data: Vec<u8>,
    /// The detected content type (e.g., "image/jpeg").
    pub content_type: String,
    /// File name sent in the multipart part.
    pub file_name: String,
}

impl ImageUpload {
    /// Validate raw bytes and build an upload descriptor.
    ///
    /// When `file_name` is absent a timestamped default is used, matching the
    /// server's expectations for unnamed uploads.
    pub fn from_bytes(data: Vec<u8>, file_name: Option<String>) -> Result<Self, ApiError> {
        if data.len() > MAX_FILE_SIZE {
            return Err(ApiError::InvalidImage(format!(
                "Image too large: {} bytes (max {})",
                data.len(),
                MAX_FILE_SIZE
            )));
        }

        let content_type = detect_content_type(&data).map_err(ApiError::InvalidImage)?;
        let file_name = file_name.unwrap_or_else(default_file_name);

        Ok(Self {
            data,
            content_type,
            file_name,
        })
    }
}

/// Detect the content type of image data, rejecting disallowed formats.
pub fn detect_content_type(data: &[u8]) -> Result<String, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Could not detect image format".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG, GIF, WebP",
            format
        ));
    }

    Ok(format.to_mime_type().to_string())
}

fn default_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("recipe_{}.jpg", millis)
}
