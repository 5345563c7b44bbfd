//! Client-side name filter over cached playlists and tracks.

use serde::Serialize;
use vault_api_models::{Playlist, Track};

/// Items whose names matched a query, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    /// Matching playlists.
    pub playlists: Vec<Playlist>,
    /// Matching tracks.
    pub tracks: Vec<Track>,
}

impl SearchResults {
    /// `true` when neither list has a match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty() && self.tracks.is_empty()
    }
}

/// `true` when `query` is blank and should produce no results.
#[must_use]
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match of `query` against `name`.
///
/// The needle is lowercased as typed, so surrounding spaces are significant.
#[must_use]
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Filter cached playlists and tracks by name.
///
/// A blank query yields empty result sets rather than everything.
#[must_use]
pub fn search(query: &str, playlists: &[Playlist], tracks: &[Track]) -> SearchResults {
    if is_blank_query(query) {
        return SearchResults::default();
    }
    SearchResults {
        playlists: playlists
            .iter()
            .filter(|playlist| name_matches(&playlist.name, query))
            .cloned()
            .collect(),
        tracks: tracks
            .iter()
            .filter(|track| name_matches(&track.name, query))
            .cloned()
            .collect(),
    }
}
