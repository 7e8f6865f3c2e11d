// Base64-encoded attachments riding on a test case result

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

/// Content types Xray renders inline or offers for download.
pub mod content_type {
    pub const JPEG: &str = "image/jpeg";
    pub const PNG: &str = "image/png";
    pub const TEXT: &str = "plain/text";
    pub const CSV: &str = "plain/csv";
    pub const JSON: &str = "plain/json";
    pub const XML: &str = "application/xml";
    pub const ZIP: &str = "application/zip";
    pub const GZIP: &str = "application/gzip";
}

/// One attachment on a test case result (screenshot, log, archive).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    /// Base64-encoded file content.
    pub data: String,
    pub filename: String,
    pub content_type: String,
}

impl Evidence {
    /// Attach raw bytes under an explicit content type.
    pub fn new(
        data: impl AsRef<[u8]>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            data: STANDARD.encode(data.as_ref()),
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }

    pub fn jpeg(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::JPEG)
    }

    pub fn png(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::PNG)
    }

    pub fn text(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::TEXT)
    }

    pub fn csv(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::CSV)
    }

    pub fn json(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::JSON)
    }

    pub fn xml(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::XML)
    }

    pub fn zip(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::ZIP)
    }

    pub fn gzip(data: impl AsRef<[u8]>, filename: impl Into<String>) -> Self {
        Self::new(data, filename, content_type::GZIP)
    }
}
