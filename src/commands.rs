//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the appropriate backend services.
//! Each handler takes CLI args and Output, returns ExitCode.

use std::io::Read;
use std::path::Path;

use crate::api::CatalogClient;
use crate::catalog;
use crate::cli::{ExitCode, ListCmd, LoadCmd, Output, PlayCmd, PlayerChoice, QueueCmd, ShowCmd};
use crate::config::Config;
use crate::models::Movie;
use crate::playback::{LocalPlayer, PlaybackQueue, PlayerType};
use crate::receiver::{LoadRequest, MediaStatus};

/// Resolve the catalog URL: CLI flag, then config chain
fn resolve_url(cli_url: Option<&str>, config: &Config) -> String {
    cli_url
        .map(str::to_string)
        .unwrap_or_else(|| config.catalog_url())
}

/// Resolve the player: CLI flag, then config, then VLC
fn resolve_player(choice: Option<PlayerChoice>, config: &Config) -> PlayerType {
    choice.map(Into::into).unwrap_or_else(|| config.player_type())
}

/// Load the shared catalog, or `None` when no catalog is available
async fn load_catalog(url: &str, output: &Output) -> Option<&'static [Movie]> {
    output.info(format!("Loading catalog from {}", url));
    let client = CatalogClient::new();
    catalog::shared().get_or_load(&client, url).await
}

// =============================================================================
// List Command
// =============================================================================

pub async fn list_cmd(cmd: ListCmd, cli_url: Option<&str>, output: &Output) -> ExitCode {
    let config = Config::load();
    let url = resolve_url(cli_url, &config);

    let Some(movies) = load_catalog(&url, output).await else {
        return output.error("No catalog available", ExitCode::NoCatalog);
    };

    let mut entries: Vec<&Movie> = movies.iter().collect();
    if let Some(ref category) = cmd.category {
        entries.retain(|m| m.category.eq_ignore_ascii_case(category));
    }
    entries.truncate(cmd.limit);

    if output.json {
        if let Err(e) = output.print(&entries) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        // Group under category headers, document order
        let mut last_category = "";
        for movie in &entries {
            if movie.category != last_category {
                output.line(format!("[{}]", movie.category));
                last_category = &movie.category;
            }
            output.line(format!("  {}", movie));
        }
        if entries.is_empty() {
            output.info("Catalog is empty");
        }
    }
    ExitCode::Success
}

// =============================================================================
// Show Command
// =============================================================================

pub async fn show_cmd(cmd: ShowCmd, cli_url: Option<&str>, output: &Output) -> ExitCode {
    let config = Config::load();
    let url = resolve_url(cli_url, &config);

    let Some(_movies) = load_catalog(&url, output).await else {
        return output.error("No catalog available", ExitCode::NoCatalog);
    };

    let Some(movie) = catalog::shared().movie(cmd.id) else {
        return output.error(format!("No entry with id {}", cmd.id), ExitCode::NotFound);
    };

    if output.json {
        if let Err(e) = output.print(movie) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        output.line(movie);
        output.line(format!("  category:   {}", movie.category));
        output.line(format!("  studio:     {}", movie.studio));
        output.line(format!("  about:      {}", movie.description));
        output.line(format!("  stream:     {} ({})", movie.video_url, movie.mime_type));
        output.line(format!("  card:       {}", movie.card_image_url));
        output.line(format!("  background: {}", movie.background_image_url));
    }
    ExitCode::Success
}

// =============================================================================
// Play Command
// =============================================================================

/// Playback started response
#[derive(Debug, serde::Serialize)]
pub struct PlayResponse {
    pub status: &'static str,
    pub title: String,
    pub stream_url: String,
    pub queue_len: usize,
    pub player: String,
}

pub async fn play_cmd(cmd: PlayCmd, cli_url: Option<&str>, output: &Output) -> ExitCode {
    let config = Config::load();
    let url = resolve_url(cli_url, &config);

    let Some(movies) = load_catalog(&url, output).await else {
        return output.error("No catalog available", ExitCode::NoCatalog);
    };

    let Some(movie) = movies.iter().find(|m| m.id == cmd.id) else {
        return output.error(format!("No entry with id {}", cmd.id), ExitCode::NotFound);
    };

    let queue = PlaybackQueue::for_entry(movie, movies);
    let player = LocalPlayer::new(resolve_player(cmd.player, &config));

    output.info(format!(
        "Starting {} with {} queued items",
        player.player_type(),
        queue.len()
    ));

    let started = if cmd.wait {
        player.play_and_wait(&queue, cmd.start).await
    } else {
        player.play(&queue, cmd.start).map(|_| ())
    };

    if let Err(e) = started {
        return output.error(format!("Playback failed: {}", e), ExitCode::PlayerFailed);
    }

    let response = PlayResponse {
        status: "playing",
        title: movie.title.clone(),
        stream_url: movie.video_url.clone(),
        queue_len: queue.len(),
        player: player.player_type().to_string(),
    };
    if let Err(e) = output.print(&response) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Queue Command
// =============================================================================

pub async fn queue_cmd(cmd: QueueCmd, cli_url: Option<&str>, output: &Output) -> ExitCode {
    let config = Config::load();
    let url = resolve_url(cli_url, &config);

    let Some(movies) = load_catalog(&url, output).await else {
        return output.error("No catalog available", ExitCode::NoCatalog);
    };

    let Some(movie) = movies.iter().find(|m| m.id == cmd.id) else {
        return output.error(format!("No entry with id {}", cmd.id), ExitCode::NotFound);
    };

    let queue = PlaybackQueue::for_entry(movie, movies);

    if output.json {
        if let Err(e) = output.print(queue.items()) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for (i, item) in queue.items().iter().enumerate() {
            output.line(format!("{:3}. {}", i + 1, item));
        }
    }
    ExitCode::Success
}

// =============================================================================
// Load Command
// =============================================================================

pub async fn load_cmd(cmd: LoadCmd, cli_url: Option<&str>, output: &Output) -> ExitCode {
    let body = match read_request_body(&cmd.request) {
        Ok(body) => body,
        Err(e) => return output.error(format!("Failed to read request: {}", e), ExitCode::Error),
    };

    let request = match LoadRequest::parse(&body) {
        Ok(request) => request,
        Err(e) => return output.error(e.to_string(), ExitCode::InvalidRequest),
    };

    let movie = match request.to_movie() {
        Ok(movie) => movie,
        Err(e) => return output.error(e.to_string(), ExitCode::InvalidRequest),
    };

    // The rest of the catalog queues behind the requested content. A failed
    // catalog load degrades to a single-item queue rather than refusing the
    // request.
    let config = Config::load();
    let url = resolve_url(cli_url, &config);
    let catalog = load_catalog(&url, output).await.unwrap_or(&[]);

    let queue = PlaybackQueue::for_entry(&movie, catalog);
    let player = LocalPlayer::new(resolve_player(cmd.player, &config));

    output.info(format!(
        "Loading '{}' on {} ({} queued items)",
        movie.title,
        player.player_type(),
        queue.len()
    ));

    let started = if cmd.wait {
        player.play_and_wait(&queue, request.start_secs()).await
    } else {
        player.play(&queue, request.start_secs()).map(|_| ())
    };

    if let Err(e) = started {
        return output.error(format!("Playback failed: {}", e), ExitCode::PlayerFailed);
    }

    // Status broadcast back towards the sender
    let status = MediaStatus::playing(&request, &movie, queue.len());
    if let Err(e) = output.print(&status) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

/// Read the request body from a file, or stdin for '-'
fn read_request_body(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        std::fs::read_to_string(path)
    }
}
