//! vodcast - browse a remote VOD catalog and queue it to a local player
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! vodcast list
//!
//! # Start playback of entry 3, rest of the catalog queued behind it
//! vodcast play 3
//!
//! # Handle an inbound load request the way a receiver would
//! vodcast load request.json
//! ```

use clap::Parser;

use vodcast::cli::{Cli, Command, ExitCode, Output};
use vodcast::commands;

#[tokio::main]
async fn main() {
    colog::init();

    let cli = Cli::parse();
    let output = Output::new(&cli);
    let catalog_url = cli.catalog_url.clone();
    let url = catalog_url.as_deref();

    let code: ExitCode = match cli.command {
        Command::List(cmd) => commands::list_cmd(cmd, url, &output).await,
        Command::Show(cmd) => commands::show_cmd(cmd, url, &output).await,
        Command::Play(cmd) => commands::play_cmd(cmd, url, &output).await,
        Command::Queue(cmd) => commands::queue_cmd(cmd, url, &output).await,
        Command::Load(cmd) => commands::load_cmd(cmd, url, &output).await,
    };

    std::process::exit(code.into());
}
