//! Local Player - VLC/mpv playback support
//!
//! Hands a playback queue to VLC or mpv as a player playlist. The player
//! owns the actual playback state machine (buffering/playing/paused/ended);
//! our involvement ends once the process is up.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command};

use crate::playback::queue::PlaybackQueue;

/// Supported local players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerType {
    /// VLC media player (default)
    #[default]
    Vlc,
    /// mpv media player
    Mpv,
}

impl PlayerType {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerType::Vlc => {
                // On macOS, VLC is an app bundle - check for it
                #[cfg(target_os = "macos")]
                if std::path::Path::new("/Applications/VLC.app").exists() {
                    return "/Applications/VLC.app/Contents/MacOS/VLC";
                }
                "vlc"
            }
            PlayerType::Mpv => "mpv",
        }
    }

    /// Get a display name for this player
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerType::Vlc => "VLC",
            PlayerType::Mpv => "mpv",
        }
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors from local player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
}

/// Local player for queued catalog playback
pub struct LocalPlayer {
    player_type: PlayerType,
}

impl LocalPlayer {
    /// Create a new local player with the specified type
    pub fn new(player_type: PlayerType) -> Self {
        Self { player_type }
    }

    /// Create a VLC player
    pub fn vlc() -> Self {
        Self::new(PlayerType::Vlc)
    }

    /// Create an mpv player
    pub fn mpv() -> Self {
        Self::new(PlayerType::Mpv)
    }

    /// Get the player type
    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    /// Check if the player is available on the system
    pub async fn is_available(&self) -> bool {
        let cmd = self.player_type.command();

        // If it's a full path (macOS app bundle), check if it exists
        if cmd.starts_with('/') {
            return std::path::Path::new(cmd).exists();
        }

        // Otherwise use 'which' to find in PATH
        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Start playback of a queue at a start offset
    ///
    /// # Arguments
    /// * `queue` - Queue of stream URLs; the whole queue becomes the player
    ///   playlist in order
    /// * `start_secs` - Start offset in seconds for the first item
    ///
    /// # Returns
    /// The spawned child process
    pub fn play(&self, queue: &PlaybackQueue, start_secs: u64) -> Result<Child, PlayerError> {
        let mut cmd = Command::new(self.player_type.command());

        match self.player_type {
            PlayerType::Vlc => {
                if start_secs > 0 {
                    cmd.arg(format!("--start-time={}", start_secs));
                }
                for item in queue.items() {
                    cmd.arg(&item.url);
                }
                cmd.arg("--no-video-title-show"); // Don't show filename overlay
            }
            PlayerType::Mpv => {
                if start_secs > 0 {
                    cmd.arg(format!("--start={}", start_secs));
                }
                for item in queue.items() {
                    cmd.arg(&item.url);
                }
                cmd.arg("--force-window=immediate"); // Show window immediately
            }
        }

        // Don't capture output - let it display normally
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::NotFound(self.player_type.command().to_string())
            } else {
                PlayerError::StartFailed(e)
            }
        })
    }

    /// Start playback and wait for the player to close
    pub async fn play_and_wait(
        &self,
        queue: &PlaybackQueue,
        start_secs: u64,
    ) -> Result<(), PlayerError> {
        let mut child = self.play(queue, start_secs)?;
        let _ = child.wait().await;
        Ok(())
    }
}
