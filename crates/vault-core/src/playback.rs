//! Playback seam for playlist detail views.
//!
//! Audio output lives outside this crate. Callers hand tracks to a
//! [`Player`], and [`PlaybackQueue`] remembers which one is current so
//! listings can mark it.

use vault_api_models::Track;

/// Sink that starts playing a track.
pub trait Player {
    /// Begin playback of `track`, replacing whatever was playing.
    fn play(&mut self, track: &Track);
}

/// Ordered tracks of one playlist plus the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackQueue {
    tracks: Vec<Track>,
    current: Option<i64>,
}

impl PlaybackQueue {
    /// Queue the tracks in the order the backend returned them.
    #[must_use]
    pub const fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: None,
        }
    }

    /// Tracks in playlist order.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track currently selected for playback.
    #[must_use]
    pub fn current(&self) -> Option<&Track> {
        let id = self.current?;
        self.tracks.iter().find(|track| track.id == id)
    }

    /// `true` when `track` is the one now playing.
    #[must_use]
    pub fn is_current(&self, track: &Track) -> bool {
        self.current == Some(track.id)
    }

    /// Start at the first track; does nothing for an empty playlist.
    pub fn play_all<P: Player + ?Sized>(&mut self, player: &mut P) -> Option<&Track> {
        let Some(first) = self.tracks.first() else {
            tracing::debug!("play all requested on empty playlist");
            return None;
        };
        player.play(first);
        self.current = Some(first.id);
        self.tracks.first()
    }

    /// Play the track with `track_id` if it belongs to this queue.
    pub fn play_track<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
        track_id: i64,
    ) -> Option<&Track> {
        let track = self.tracks.iter().find(|track| track.id == track_id)?;
        player.play(track);
        self.current = Some(track.id);
        self.current()
    }
}
