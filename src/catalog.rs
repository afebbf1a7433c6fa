//! Catalog building and the process-wide catalog store
//!
//! The builder flattens a fetched document into the ordered list of playable
//! entries. The store memoizes exactly one build for the process lifetime;
//! there is no refresh short of a restart.

use log::{debug, warn};
use tokio::sync::OnceCell;

use crate::api::catalog::{CatalogClient, CatalogDocument};
use crate::models::{Movie, StreamFormat};

/// The one source format selected for playback
const TARGET_FORMAT: StreamFormat = StreamFormat::Hls;

// =============================================================================
// Builder
// =============================================================================

/// Flatten a catalog document into playable entries
///
/// Each video's sources are scanned for the target format; a video without a
/// matching source is dropped entirely, there is no fallback to another
/// format. URLs are assembled from the owning category's prefixes, and ids
/// are a running counter starting at 0 for this build.
pub fn build(doc: &CatalogDocument) -> Vec<Movie> {
    let mut movies = Vec::new();
    let mut count: u32 = 0;

    for category in &doc.categories {
        for video in &category.videos {
            let Some(source) = video
                .sources
                .iter()
                .find(|s| s.format == TARGET_FORMAT.tag())
            else {
                debug!("skipping '{}': no {} source", video.title, TARGET_FORMAT);
                continue;
            };

            movies.push(Movie {
                id: count,
                title: video.title.clone(),
                description: video.subtitle.clone(),
                studio: video.studio.clone(),
                category: category.name.clone(),
                duration_ms: video.duration * 1000,
                card_image_url: format!("{}{}", category.images, video.card_image),
                background_image_url: format!("{}{}", category.images, video.background_image),
                video_url: format!("{}{}", category.prefix(TARGET_FORMAT), source.url),
                mime_type: source.mime.clone(),
            });
            count += 1;
        }
    }

    movies
}

// =============================================================================
// Store
// =============================================================================

/// Single-slot memoized catalog
///
/// The first `get_or_load` fetches and builds; every later call returns the
/// same slot contents, even when invoked with a different URL. A failed load
/// is just as sticky as a successful one: the process keeps answering
/// "no catalog" until restart.
pub struct CatalogStore {
    slot: OnceCell<Option<Vec<Movie>>>,
}

impl CatalogStore {
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::const_new(),
        }
    }

    /// Get the catalog, populating the slot on first access
    ///
    /// Concurrent first callers all await a single fetch; exactly one request
    /// goes out per process.
    pub async fn get_or_load(&self, client: &CatalogClient, url: &str) -> Option<&[Movie]> {
        let slot = self
            .slot
            .get_or_init(|| async {
                match client.fetch(url).await {
                    Ok(doc) => {
                        let movies = build(&doc);
                        debug!("catalog built: {} entries", movies.len());
                        Some(movies)
                    }
                    Err(e) => {
                        warn!("failed to load catalog from {}: {}", url, e);
                        None
                    }
                }
            })
            .await;
        slot.as_deref()
    }

    /// Catalog contents, if the slot has been successfully populated
    pub fn get(&self) -> Option<&[Movie]> {
        self.slot.get().and_then(|slot| slot.as_deref())
    }

    /// Look up an entry by its build-time id
    pub fn movie(&self, id: u32) -> Option<&Movie> {
        self.get().and_then(|movies| movies.iter().find(|m| m.id == id))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide store used by the binary
static SHARED: CatalogStore = CatalogStore::new();

/// The shared store every command goes through
pub fn shared() -> &'static CatalogStore {
    &SHARED
}

// =============================================================================
// Unit Tests
// =============================================================================
