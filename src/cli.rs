//! CLI - Command Line Interface for vodcast
//!
//! Designed for scripting as much as for hands-on use: every action is a
//! subcommand and all output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! # Browse the catalog
//! vodcast list --json
//!
//! # Play entry 3, queueing the rest of the catalog behind it
//! vodcast play 3
//!
//! # Feed a sender's load request through the receiver path
//! vodcast load request.json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::playback::PlayerType;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Catalog could not be loaded
    NoCatalog = 3,
    /// Entry not found in the catalog
    NotFound = 4,
    /// Inbound load request could not be mapped to playable content
    InvalidRequest = 5,
    /// Player failed to start
    PlayerFailed = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// vodcast - browse a remote VOD catalog and queue it to a local player
#[derive(Parser, Debug)]
#[command(
    name = "vodcast",
    version,
    author = "Gorka & Hermes",
    about = "Browse a remote VOD catalog and queue it to a local player",
    long_about = "Fetches a remote VOD catalog document once per run, builds the \
                  playable entry list, and starts playback of a selected entry \
                  (or of an inbound load request) through VLC or mpv.",
    arg_required_else_help = true,
    after_help = "EXAMPLES:\n\
                  vodcast list                        Browse the catalog\n\
                  vodcast show 3                      Entry details\n\
                  vodcast play 3 --start 60           Play from 1 minute in\n\
                  vodcast load request.json           Handle a sender load request"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Catalog document URL (overrides config and the bundled default)
    #[arg(long, short = 'u', global = true)]
    pub catalog_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the catalog entries
    #[command(visible_alias = "ls")]
    List(ListCmd),

    /// Show one entry's full fields
    #[command(visible_alias = "i")]
    Show(ShowCmd),

    /// Start playback of an entry, queueing the rest of the catalog behind it
    #[command(visible_alias = "p")]
    Play(PlayCmd),

    /// Print the queue that `play` would hand to the player
    Queue(QueueCmd),

    /// Handle an inbound load request (JSON file, or '-' for stdin)
    Load(LoadCmd),
}

/// List the catalog entries
#[derive(Args, Debug)]
pub struct ListCmd {
    /// Only entries from this category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "50")]
    pub limit: usize,
}

/// Show one catalog entry
#[derive(Args, Debug)]
pub struct ShowCmd {
    /// Entry id from `list` output
    #[arg(required = true)]
    pub id: u32,
}

/// Start playback of a catalog entry
#[derive(Args, Debug)]
pub struct PlayCmd {
    /// Entry id from `list` output
    #[arg(required = true)]
    pub id: u32,

    /// Start position in seconds
    #[arg(long, short = 's', default_value = "0")]
    pub start: u64,

    /// Player to use (vlc or mpv)
    #[arg(long, short = 'p', value_enum)]
    pub player: Option<PlayerChoice>,

    /// Wait for the player to exit before returning
    #[arg(long, short = 'w')]
    pub wait: bool,
}

/// Print the playback queue for an entry
#[derive(Args, Debug)]
pub struct QueueCmd {
    /// Entry id from `list` output
    #[arg(required = true)]
    pub id: u32,
}

/// Handle an inbound load request
#[derive(Args, Debug)]
pub struct LoadCmd {
    /// Path to the request JSON, or '-' to read stdin
    #[arg(required = true)]
    pub request: PathBuf,

    /// Player to use (vlc or mpv)
    #[arg(long, short = 'p', value_enum)]
    pub player: Option<PlayerChoice>,

    /// Wait for the player to exit before returning
    #[arg(long, short = 'w')]
    pub wait: bool,
}

/// Local player selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerChoice {
    /// VLC media player (default)
    #[default]
    Vlc,
    /// mpv media player
    Mpv,
}

impl From<PlayerChoice> for PlayerType {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::Vlc => PlayerType::Vlc,
            PlayerChoice::Mpv => PlayerType::Mpv,
        }
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            // For non-JSON, caller should handle formatting
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a preformatted plain line (plain mode only)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from(["vodcast", "list", "-c", "Movies", "-l", "10"]);
        match cli.command {
            Command::List(cmd) => {
                assert_eq!(cmd.category.as_deref(), Some("Movies"));
                assert_eq!(cmd.limit, 10);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_play_command() {
        let cli = Cli::parse_from(["vodcast", "play", "3", "--start", "60", "-p", "mpv"]);
        match cli.command {
            Command::Play(cmd) => {
                assert_eq!(cmd.id, 3);
                assert_eq!(cmd.start, 60);
                assert_eq!(cmd.player, Some(PlayerChoice::Mpv));
                assert!(!cmd.wait);
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_play_start_defaults_to_zero() {
        let cli = Cli::parse_from(["vodcast", "play", "0"]);
        match cli.command {
            Command::Play(cmd) => assert_eq!(cmd.start, 0),
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_load_command_stdin_marker() {
        let cli = Cli::parse_from(["vodcast", "load", "-"]);
        match cli.command {
            Command::Load(cmd) => assert_eq!(cmd.request, PathBuf::from("-")),
            _ => panic!("Expected Load command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "vodcast",
            "--json",
            "--quiet",
            "--catalog-url",
            "https://host.example.com/f.json",
            "list",
        ]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(
            cli.catalog_url.as_deref(),
            Some("https://host.example.com/f.json")
        );
    }

    #[test]
    fn test_player_choice_conversion() {
        assert_eq!(PlayerType::from(PlayerChoice::Vlc), PlayerType::Vlc);
        assert_eq!(PlayerType::from(PlayerChoice::Mpv), PlayerType::Mpv);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NoCatalog), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
        assert_eq!(i32::from(ExitCode::InvalidRequest), 5);
        assert_eq!(i32::from(ExitCode::PlayerFailed), 6);
    }
}
