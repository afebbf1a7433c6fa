//! Playback queue construction
//!
//! The bridge between a selected catalog entry and the player. The queue
//! starts with the selected entry and continues with the full catalog in its
//! stored order, so playback roams through everything else afterwards; it is
//! not a filtered playlist.

use serde::Serialize;

use crate::models::{Movie, QueueItem};

/// Ordered queue handed to the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackQueue {
    items: Vec<QueueItem>,
}

impl PlaybackQueue {
    /// Build the queue for a selected entry
    ///
    /// The selected entry plays first; the rest of the catalog follows in
    /// stored order. A selected entry that is itself part of the catalog
    /// shows up again in its catalog slot.
    pub fn for_entry(selected: &Movie, catalog: &[Movie]) -> Self {
        let mut items = Vec::with_capacity(catalog.len() + 1);
        items.push(QueueItem::from(selected));
        items.extend(catalog.iter().map(QueueItem::from));
        Self { items }
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub fn first(&self) -> Option<&QueueItem> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            video_url: format!("https://cdn.example.com/hls/{}.m3u8", title),
            card_image_url: format!("https://cdn.example.com/images/{}.jpg", title),
            ..Default::default()
        }
    }

    #[test]
    fn test_selected_entry_plays_first() {
        let catalog = vec![movie(0, "a"), movie(1, "b"), movie(2, "c")];
        let queue = PlaybackQueue::for_entry(&catalog[1], &catalog);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.first().unwrap().title, "b");
    }

    #[test]
    fn test_catalog_follows_in_stored_order() {
        let catalog = vec![movie(0, "a"), movie(1, "b"), movie(2, "c")];
        let queue = PlaybackQueue::for_entry(&catalog[2], &catalog);

        let titles: Vec<&str> = queue.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b", "c"]);
    }

    #[test]
    fn test_entry_outside_catalog_is_not_duplicated() {
        let catalog = vec![movie(0, "a"), movie(1, "b")];
        let remote = movie(0, "remote");
        let queue = PlaybackQueue::for_entry(&remote, &catalog);

        let titles: Vec<&str> = queue.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["remote", "a", "b"]);
    }

    #[test]
    fn test_empty_catalog_queues_only_selection() {
        let selected = movie(0, "solo");
        let queue = PlaybackQueue::for_entry(&selected, &[]);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.first().unwrap().title, "solo");
    }
}
