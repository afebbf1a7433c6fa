//! Catalog document client
//!
//! Fetches the remote VOD catalog document and parses it into a typed tree.
//! The document is a JSON object with a `categories` array; each category
//! carries per-format URL prefixes and a `videos` array. The body is decoded
//! as ISO-8859-1, which is the encoding the catalog host serves.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::models::StreamFormat;

/// Catalog fetch/parse error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog server returned HTTP {0}")]
    Http(u16),

    #[error("Invalid catalog document: {0}")]
    InvalidDocument(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

// =============================================================================
// Document Structure (as served)
// =============================================================================

/// Parsed catalog document
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
}

/// One category with its per-format URL prefixes and videos
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub hls: String,
    pub dash: String,
    pub mp4: String,
    pub images: String,
    pub videos: Vec<Video>,
}

impl Category {
    /// URL prefix for a streaming format within this category
    pub fn prefix(&self, format: StreamFormat) -> &str {
        match format {
            StreamFormat::Hls => &self.hls,
            StreamFormat::Dash => &self.dash,
            StreamFormat::Mp4 => &self.mp4,
        }
    }
}

/// One video entry of a category
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub title: String,
    pub subtitle: String,
    pub studio: String,
    /// Duration in seconds
    pub duration: u64,
    #[serde(rename = "image-480x270")]
    pub card_image: String,
    #[serde(rename = "image-780x1200")]
    pub background_image: String,
    pub sources: Vec<Source>,
}

/// One rendition of a video: format tag, relative path, mime type
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub format: String,
    pub url: String,
    pub mime: String,
}

// =============================================================================
// Client
// =============================================================================

/// Catalog document client
///
/// One blocking-style fetch per call, no retry. The caller decides what a
/// failed fetch means (the store treats it as "no catalog").
pub struct CatalogClient {
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// No request timeout is configured; the catalog host either answers or
    /// the caller's surrounding task is cancelled.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch and parse the catalog document at `url`
    pub async fn fetch(&self, url: &str) -> Result<CatalogDocument, CatalogError> {
        debug!("fetching catalog from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http(status.as_u16()));
        }

        let body = response.bytes().await?;
        let text = decode_latin1(&body);

        let doc: CatalogDocument = serde_json::from_str(&text)
            .map_err(|e| CatalogError::InvalidDocument(e.to_string()))?;

        debug!("catalog document has {} categories", doc.categories.len());
        Ok(doc)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a byte body as ISO-8859-1
///
/// Every ISO-8859-1 byte denotes the Unicode scalar with the same value, so
/// the decode is a direct widening of each byte. Bodies that are actually
/// UTF-8 come through mojibake'd, exactly as they would from a fixed
/// Latin-1 reader.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
