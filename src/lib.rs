//! vodcast - browse a remote VOD catalog and queue it to a local player
//!
//! Fetches the catalog document once per process, builds the playable entry
//! list, and starts playback of a selected entry (or of an inbound load
//! request) through VLC or mpv, with the rest of the catalog queued behind
//! the selection.
//!
//! # Modules
//!
//! - `models` - Catalog entries and queue items
//! - `api` - Catalog document client
//! - `catalog` - Builder and the process-wide single-slot store
//! - `playback` - Queue construction and the local player launcher
//! - `receiver` - Inbound load request parsing and mapping
//! - `cli` / `commands` - Command-line surface
//! - `config` - TOML configuration and URL resolution

pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod playback;
pub mod receiver;

// Re-export commonly used types
pub use api::{CatalogClient, CatalogError};
pub use catalog::CatalogStore;
pub use config::Config;
pub use models::{Movie, QueueItem, StreamFormat};
pub use playback::{LocalPlayer, PlaybackQueue, PlayerError, PlayerType};
pub use receiver::{LoadError, LoadRequest, MediaStatus};
