//! Data structures and types for vodcast
//!
//! Contains all shared models used across the application organized by domain:
//! - **Catalog**: playable entries built from the remote catalog document
//! - **Playback**: queue items handed to the local player

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Catalog Models
// =============================================================================

/// Streaming format of a catalog source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    Hls,
    Dash,
    Mp4,
}

impl StreamFormat {
    /// The tag used for this format in the catalog document
    pub fn tag(&self) -> &'static str {
        match self {
            StreamFormat::Hls => "hls",
            StreamFormat::Dash => "dash",
            StreamFormat::Mp4 => "mp4",
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamFormat::Hls => write!(f, "HLS"),
            StreamFormat::Dash => write!(f, "DASH"),
            StreamFormat::Mp4 => write!(f, "MP4"),
        }
    }
}

/// A playable catalog entry
///
/// Built once from the catalog document and owned by the catalog store
/// afterwards. The `id` is a sequence number assigned at build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    /// The document calls this field `subtitle`; it is a one-line description
    pub description: String,
    pub studio: String,
    /// Name of the category this entry came from
    pub category: String,
    pub duration_ms: u64,
    pub card_image_url: String,
    pub background_image_url: String,
    pub video_url: String,
    pub mime_type: String,
}

impl Movie {
    /// Format the duration as HH:MM:SS or MM:SS
    pub fn format_duration(&self) -> String {
        let total_secs = self.duration_ms / 1000;
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        let secs = total_secs % 60;

        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, mins, secs)
        } else {
            format!("{:02}:{:02}", mins, secs)
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.title)?;
        if !self.studio.is_empty() {
            write!(f, " ({})", self.studio)?;
        }
        if self.duration_ms > 0 {
            write!(f, " - {}", self.format_duration())?;
        }
        Ok(())
    }
}

// =============================================================================
// Playback Models
// =============================================================================

/// One item of a playback queue
///
/// Carries exactly what the player needs per item: the stream URL plus the
/// metadata shown in the player's now-playing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub artwork_url: String,
}

impl From<&Movie> for QueueItem {
    fn from(movie: &Movie) -> Self {
        Self {
            url: movie.video_url.clone(),
            title: movie.title.clone(),
            subtitle: movie.description.clone(),
            artwork_url: movie.card_image_url.clone(),
        }
    }
}

impl fmt::Display for QueueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subtitle.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} - {}", self.title, self.subtitle)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // StreamFormat Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_stream_format_tag() {
        assert_eq!(StreamFormat::Hls.tag(), "hls");
        assert_eq!(StreamFormat::Dash.tag(), "dash");
        assert_eq!(StreamFormat::Mp4.tag(), "mp4");
    }

    #[test]
    fn test_stream_format_display() {
        assert_eq!(StreamFormat::Hls.to_string(), "HLS");
        assert_eq!(StreamFormat::Dash.to_string(), "DASH");
        assert_eq!(StreamFormat::Mp4.to_string(), "MP4");
    }

    #[test]
    fn test_stream_format_serde() {
        let json = serde_json::to_string(&StreamFormat::Hls).unwrap();
        assert_eq!(json, "\"hls\"");

        let parsed: StreamFormat = serde_json::from_str("\"dash\"").unwrap();
        assert_eq!(parsed, StreamFormat::Dash);
    }

    // -------------------------------------------------------------------------
    // Movie Tests
    // -------------------------------------------------------------------------

    fn sample_movie() -> Movie {
        Movie {
            id: 3,
            title: "Big Buck Bunny".to_string(),
            description: "By Blender Foundation".to_string(),
            studio: "Blender Foundation".to_string(),
            category: "Movies".to_string(),
            duration_ms: 596_000,
            card_image_url: "https://cdn.example.com/images/bbb.jpg".to_string(),
            background_image_url: "https://cdn.example.com/images/bbb-bg.jpg".to_string(),
            video_url: "https://cdn.example.com/hls/bbb.m3u8".to_string(),
            mime_type: "application/x-mpegurl".to_string(),
        }
    }

    #[test]
    fn test_movie_display() {
        let movie = sample_movie();
        assert_eq!(
            movie.to_string(),
            "#3 Big Buck Bunny (Blender Foundation) - 09:56"
        );
    }

    #[test]
    fn test_movie_display_minimal() {
        let movie = Movie {
            id: 0,
            title: "Untitled".to_string(),
            ..Default::default()
        };
        assert_eq!(movie.to_string(), "#0 Untitled");
    }

    #[test]
    fn test_format_duration_hhmmss() {
        let movie = Movie {
            duration_ms: 3_661_000,
            ..Default::default()
        };
        assert_eq!(movie.format_duration(), "01:01:01");
    }

    #[test]
    fn test_format_duration_mmss() {
        let movie = Movie {
            duration_ms: 125_000,
            ..Default::default()
        };
        assert_eq!(movie.format_duration(), "02:05");
    }

    // -------------------------------------------------------------------------
    // QueueItem Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_queue_item_from_movie() {
        let movie = sample_movie();
        let item = QueueItem::from(&movie);
        assert_eq!(item.url, movie.video_url);
        assert_eq!(item.title, movie.title);
        assert_eq!(item.subtitle, movie.description);
        assert_eq!(item.artwork_url, movie.card_image_url);
    }

    #[test]
    fn test_queue_item_display() {
        let item = QueueItem {
            url: "https://cdn.example.com/hls/bbb.m3u8".to_string(),
            title: "Big Buck Bunny".to_string(),
            subtitle: "By Blender Foundation".to_string(),
            artwork_url: String::new(),
        };
        assert_eq!(item.to_string(), "Big Buck Bunny - By Blender Foundation");

        let bare = QueueItem {
            subtitle: String::new(),
            ..item
        };
        assert_eq!(bare.to_string(), "Big Buck Bunny");
    }
}
