//! Playback bridge tests
//!
//! Covers both entry points into playback: a browse selection and an inbound
//! load request, each producing a queue of the selection followed by the
//! whole catalog.

use mockito::Server;
use vodcast::api::CatalogClient;
use vodcast::catalog::{self, CatalogStore};
use vodcast::playback::PlaybackQueue;
use vodcast::receiver::{LoadError, LoadRequest};

fn three_entry_document() -> &'static str {
    r#"{
        "categories": [{
            "name": "Movies",
            "hls": "https://a.example.com/hls/",
            "dash": "https://a.example.com/dash/",
            "mp4": "https://a.example.com/mp4/",
            "images": "https://a.example.com/images/",
            "videos": [
                {
                    "title": "First",
                    "subtitle": "First sub",
                    "studio": "S",
                    "duration": 10,
                    "image-480x270": "first.jpg",
                    "image-780x1200": "first-780.jpg",
                    "sources": [{"type": "hls", "url": "first.m3u8", "mime": "application/x-mpegurl"}]
                },
                {
                    "title": "Second",
                    "subtitle": "Second sub",
                    "studio": "S",
                    "duration": 20,
                    "image-480x270": "second.jpg",
                    "image-780x1200": "second-780.jpg",
                    "sources": [{"type": "hls", "url": "second.m3u8", "mime": "application/x-mpegurl"}]
                },
                {
                    "title": "Third",
                    "subtitle": "Third sub",
                    "studio": "S",
                    "duration": 30,
                    "image-480x270": "third.jpg",
                    "image-780x1200": "third-780.jpg",
                    "sources": [{"type": "hls", "url": "third.m3u8", "mime": "application/x-mpegurl"}]
                }
            ]
        }]
    }"#
}

// =============================================================================
// Browse Selection Path
// =============================================================================

#[tokio::test]
async fn test_selection_queues_catalog_behind_it() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/f.json")
        .with_status(200)
        .with_body(three_entry_document())
        .create_async()
        .await;

    let store = CatalogStore::new();
    let client = CatalogClient::new();
    let url = format!("{}/f.json", server.url());
    let movies = store.get_or_load(&client, &url).await.unwrap();

    let queue = PlaybackQueue::for_entry(&movies[1], movies);

    let titles: Vec<&str> = queue.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First", "Second", "Third"]);

    // Queue items carry the player-facing metadata
    let first = queue.first().unwrap();
    assert_eq!(first.url, "https://a.example.com/hls/second.m3u8");
    assert_eq!(first.subtitle, "Second sub");
    assert_eq!(
        first.artwork_url,
        "https://a.example.com/images/second.jpg"
    );
}

// =============================================================================
// Load Request Path
// =============================================================================

#[tokio::test]
async fn test_load_request_maps_fields_untransformed() {
    let request = LoadRequest::parse(
        r#"{
            "media": {
                "contentUrl": "https://sender.example.com/movie.m3u8",
                "metadata": {
                    "title": "Sender Movie",
                    "subtitle": "Pushed from a phone",
                    "images": [{"url": "https://sender.example.com/art.jpg"}]
                }
            }
        }"#,
    )
    .unwrap();

    let movie = request.to_movie().unwrap();
    assert_eq!(movie.video_url, "https://sender.example.com/movie.m3u8");
    assert_eq!(movie.title, "Sender Movie");
    assert_eq!(movie.description, "Pushed from a phone");
    assert_eq!(movie.card_image_url, "https://sender.example.com/art.jpg");
}

#[tokio::test]
async fn test_load_request_queue_roams_into_catalog() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/f.json")
        .with_status(200)
        .with_body(three_entry_document())
        .create_async()
        .await;

    let client = CatalogClient::new();
    let doc = client.fetch(&format!("{}/f.json", server.url())).await.unwrap();
    let movies = catalog::build(&doc);

    let request = LoadRequest::parse(
        r#"{"media": {"contentUrl": "https://sender.example.com/movie.m3u8",
                      "metadata": {"title": "Sender Movie"}}}"#,
    )
    .unwrap();
    let movie = request.to_movie().unwrap();

    let queue = PlaybackQueue::for_entry(&movie, &movies);
    let titles: Vec<&str> = queue.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Sender Movie", "First", "Second", "Third"]);
}

#[test]
fn test_load_request_without_locator_fails() {
    let request = LoadRequest::parse(r#"{"media": {"metadata": {"title": "Ghost"}}}"#).unwrap();
    assert!(matches!(request.to_movie(), Err(LoadError::InvalidRequest)));
}

#[test]
fn test_load_request_start_offset_passthrough() {
    let request = LoadRequest::parse(
        r#"{"media": {"contentUrl": "https://u.example.com/v.m3u8"}, "currentTime": 90}"#,
    )
    .unwrap();
    assert_eq!(request.start_secs(), 90);
}
