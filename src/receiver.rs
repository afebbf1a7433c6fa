//! Inbound load requests
//!
//! A remote sender asks the receiver to begin playing a piece of content by
//! transmitting a load request: a content locator plus descriptive metadata.
//! This module parses the request wire shape and maps it onto a playable
//! catalog entry; the caller builds the queue and starts the player. The
//! session/transport protocol around these requests lives in the sender-side
//! SDK and is not modeled here.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Movie;

/// Load request failure classification
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request carries neither a content URL nor a content ID
    #[error("invalid request: no content URL or content ID")]
    InvalidRequest,

    /// The request body is not a well-formed load request
    #[error("malformed load request: {0}")]
    Malformed(String),
}

// =============================================================================
// Request Wire Shape
// =============================================================================

/// Inbound load request, as transmitted by a sender
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRequest {
    #[serde(default)]
    pub request_id: Option<Uuid>,
    pub media: MediaInfo,
    /// Start position in seconds
    #[serde(default)]
    pub current_time: Option<u64>,
}

/// Content locator plus descriptive metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub metadata: Option<MediaMetadata>,
}

/// Descriptive metadata shown in the player surface
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// One artwork reference
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

impl LoadRequest {
    /// Parse a load request from its JSON wire form
    pub fn parse(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Malformed(e.to_string()))
    }

    /// Map the request onto a playable entry
    ///
    /// The content URL wins over the content ID; metadata fields are copied
    /// through untransformed, artwork is the first image. A request with
    /// neither locator cannot be played and is classified as invalid.
    pub fn to_movie(&self) -> Result<Movie, LoadError> {
        let video_url = self
            .media
            .content_url
            .clone()
            .or_else(|| self.media.content_id.clone())
            .ok_or(LoadError::InvalidRequest)?;

        let mut movie = Movie {
            video_url,
            ..Default::default()
        };

        if let Some(meta) = &self.media.metadata {
            movie.title = meta.title.clone().unwrap_or_default();
            movie.description = meta.subtitle.clone().unwrap_or_default();
            if let Some(image) = meta.images.first() {
                movie.card_image_url = image.url.clone();
            }
        }
        if let Some(mime) = &self.media.content_type {
            movie.mime_type = mime.clone();
        }

        Ok(movie)
    }

    /// Start offset for playback, defaulting to the beginning
    pub fn start_secs(&self) -> u64 {
        self.current_time.unwrap_or(0)
    }
}

// =============================================================================
// Status Broadcast
// =============================================================================

/// Media status broadcast after a successful load
///
/// Stands in for the receiver SDK's status broadcast: one JSON blob
/// describing what is now playing and how deep the queue is.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub player_state: &'static str,
    pub title: String,
    pub content_url: String,
    pub queue_len: usize,
}

impl MediaStatus {
    /// Status for a load that reached the player
    pub fn playing(request: &LoadRequest, movie: &Movie, queue_len: usize) -> Self {
        Self {
            request_id: request.request_id,
            player_state: "PLAYING",
            title: movie.title.clone(),
            content_url: movie.video_url.clone(),
            queue_len,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
