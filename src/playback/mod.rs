//! Playback plumbing
//!
//! - Queue: selected entry first, whole catalog behind it
//! - Player: VLC/mpv launcher taking the queue as a player playlist

pub mod player;
pub mod queue;

pub use player::{LocalPlayer, PlayerError, PlayerType};
pub use queue::PlaybackQueue;
