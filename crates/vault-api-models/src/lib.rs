#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the audio vault API.
//!
//! These types mirror the JSON documents exchanged with the vault backend.
//! Field names are camelCase on the wire. Entities are owned by the backend;
//! the client only keeps transient copies that can always be fetched again.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position sent when attaching a track to a playlist; the backend treats it
/// as "append to the end" and tolerates non-contiguous positions.
pub const APPEND_POSITION: i64 = 9999;

/// Avatar color used when a user has not picked one.
pub const DEFAULT_AVATAR_COLOR: &str = "#1DB954";

/// Best-effort error document. The backend has no formal error contract, so
/// every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure description when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The authenticated account as returned by `GET /api/users/me`.
///
/// The stored password is write-only and never deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Login name; always present.
    pub username: String,
    /// Optional display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Optional contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional avatar background color code.
    #[serde(default)]
    pub avatar_color: Option<String>,
}

impl User {
    /// Name to show in headers: the full name, or the username when unset.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Avatar color, falling back to [`DEFAULT_AVATAR_COLOR`].
    #[must_use]
    pub fn avatar_color_or_default(&self) -> &str {
        self.avatar_color
            .as_deref()
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_AVATAR_COLOR)
    }
}

/// Payload for `PATCH /api/users/me`.
///
/// `password` is omitted from the JSON document entirely when `None`, so a
/// blank form field never overwrites the stored credential.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// Display name; an empty string clears it.
    pub full_name: String,
    /// Login name.
    pub username: String,
    /// Contact email; an empty string clears it.
    pub email: String,
    /// Contact phone; an empty string clears it.
    pub phone: String,
    /// New password, only present when the user typed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A named, colored, icon-tagged grouping of tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Display color code, e.g. `#1DB954`.
    pub color: String,
    /// Symbolic icon identifier, e.g. `ri-music-fill`.
    pub icon: String,
}

/// Response of `GET /api/playlists/:id`: the playlist plus its tracks in
/// backend order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    /// Playlist fields, flattened into the same document.
    #[serde(flatten)]
    pub playlist: Playlist,
    /// Member tracks, already ordered by position.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Payload for `POST /api/playlists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaylist {
    /// Playlist name, sent exactly as typed.
    pub name: String,
    /// Display color code.
    pub color: String,
    /// Icon identifier.
    pub icon: String,
}

impl NewPlaylist {
    /// Build a playlist request using the default color and icon.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: ColorPreset::Green.code().to_string(),
            icon: IconPreset::Music.code().to_string(),
        }
    }
}

/// Legacy grouping with the same shape as [`Playlist`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Display color code.
    pub color: String,
    /// Icon identifier.
    pub icon: String,
}

/// Payload for `POST /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Category name, sent exactly as typed.
    pub name: String,
    /// Display color code.
    pub color: String,
    /// Icon identifier.
    pub icon: String,
}

impl NewCategory {
    /// Build a category request using the default color and microphone icon.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: ColorPreset::Green.code().to_string(),
            icon: IconPreset::Microphone.code().to_string(),
        }
    }
}

/// An audio recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Length in seconds; may be fractional.
    #[serde(default)]
    pub duration: f64,
    /// Creation timestamp when the backend reports one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Legacy category association.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Payload for `POST /api/playlists/:id/tracks`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackPlacement {
    /// Track being attached.
    pub track_id: i64,
    /// Ordering slot inside the playlist.
    pub position: i64,
}

impl TrackPlacement {
    /// Placement that appends the track at the end of the playlist.
    #[must_use]
    pub const fn append(track_id: i64) -> Self {
        Self {
            track_id,
            position: APPEND_POSITION,
        }
    }
}

/// Color choices offered when creating playlists or categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorPreset {
    /// `#1DB954`
    Green,
    /// `#2D46B9`
    Blue,
    /// `#F230AA`
    Pink,
    /// `#FFC107`
    Yellow,
    /// `#FF5722`
    Orange,
    /// `#9C27B0`
    Purple,
}

impl ColorPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Green,
        Self::Blue,
        Self::Pink,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Color code sent to the backend.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Green => "#1DB954",
            Self::Blue => "#2D46B9",
            Self::Pink => "#F230AA",
            Self::Yellow => "#FFC107",
            Self::Orange => "#FF5722",
            Self::Purple => "#9C27B0",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Pink => "Pink",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
        }
    }
}

impl fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| {
                preset.label().eq_ignore_ascii_case(needle)
                    || preset.code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                format!(
                    "unknown color '{needle}'. Valid: green, blue, pink, yellow, orange, purple"
                )
            })
    }
}

/// Icon choices offered when creating playlists or categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconPreset {
    /// `ri-music-fill`
    Music,
    /// `ri-mic-fill`
    Microphone,
    /// `ri-album-fill`
    Album,
    /// `ri-file-music-fill`
    MusicFile,
    /// `ri-sound-module-fill`
    SoundModule,
    /// `ri-vidicon-fill`
    Video,
    /// `ri-folder-music-fill`
    MusicFolder,
}

impl IconPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Music,
        Self::Microphone,
        Self::Album,
        Self::MusicFile,
        Self::SoundModule,
        Self::Video,
        Self::MusicFolder,
    ];

    /// Icon identifier sent to the backend.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Music => "ri-music-fill",
            Self::Microphone => "ri-mic-fill",
            Self::Album => "ri-album-fill",
            Self::MusicFile => "ri-file-music-fill",
            Self::SoundModule => "ri-sound-module-fill",
            Self::Video => "ri-vidicon-fill",
            Self::MusicFolder => "ri-folder-music-fill",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Microphone => "Microphone",
            Self::Album => "Album",
            Self::MusicFile => "Music File",
            Self::SoundModule => "Sound Module",
            Self::Video => "Video",
            Self::MusicFolder => "Music Folder",
        }
    }
}

impl fmt::Display for IconPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IconPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let compact = needle.replace(['-', '_', ' '], "");
        Self::ALL
            .into_iter()
            .find(|preset| {
                preset.code().eq_ignore_ascii_case(needle)
                    || preset.label().replace(' ', "").eq_ignore_ascii_case(&compact)
            })
            .ok_or_else(|| {
                format!(
                    "unknown icon '{needle}'. Valid: music, microphone, album, music-file, \
                     sound-module, video, music-folder"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_update_omits_missing_password() {
        let update = UserUpdate {
            full_name: String::new(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            password: None,
        };
        let value = serde_json::to_value(&update).expect("serialize");
        assert_eq!(
            value,
            json!({
                "fullName": "",
                "username": "ada",
                "email": "ada@example.com",
                "phone": ""
            })
        );
        assert!(value.get("password").is_none());
    }

    #[test]
    fn user_ignores_password_and_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "username": "ada",
            "password": "hash",
            "createdAt": "2024-03-04T10:00:00Z"
        }))
        .expect("deserialize");
        assert_eq!(user.username, "ada");
        assert_eq!(user.full_name, None);
        assert_eq!(user.display_name(), "ada");
        assert_eq!(user.avatar_color_or_default(), DEFAULT_AVATAR_COLOR);
    }

    #[test]
    fn playlist_detail_flattens_playlist_and_defaults_tracks() {
        let detail: PlaylistDetail = serde_json::from_value(json!({
            "id": 3,
            "name": "Demos",
            "color": "#2D46B9",
            "icon": "ri-mic-fill"
        }))
        .expect("deserialize");
        assert_eq!(detail.playlist.name, "Demos");
        assert!(detail.tracks.is_empty());
    }

    #[test]
    fn track_accepts_integer_duration_and_missing_timestamp() {
        let track: Track = serde_json::from_value(json!({
            "id": 1,
            "name": "Take 1",
            "duration": 95
        }))
        .expect("deserialize");
        assert!((track.duration - 95.0).abs() < f64::EPSILON);
        assert!(track.created_at.is_none());
    }

    #[test]
    fn track_placement_appends_with_sentinel_position() {
        let value = serde_json::to_value(TrackPlacement::append(42)).expect("serialize");
        assert_eq!(value, json!({"trackId": 42, "position": 9999}));
    }

    #[test]
    fn presets_parse_labels_and_codes() {
        assert_eq!("purple".parse::<ColorPreset>(), Ok(ColorPreset::Purple));
        assert_eq!("#f230aa".parse::<ColorPreset>(), Ok(ColorPreset::Pink));
        assert_eq!("music-file".parse::<IconPreset>(), Ok(IconPreset::MusicFile));
        assert_eq!("Sound Module".parse::<IconPreset>(), Ok(IconPreset::SoundModule));
        assert_eq!("ri-vidicon-fill".parse::<IconPreset>(), Ok(IconPreset::Video));
        assert!("teal".parse::<ColorPreset>().is_err());
    }

    #[test]
    fn new_playlist_and_category_use_distinct_default_icons() {
        assert_eq!(NewPlaylist::named("A").icon, "ri-music-fill");
        assert_eq!(NewCategory::named("B").icon, "ri-mic-fill");
        assert_eq!(NewCategory::named("B").color, "#1DB954");
    }
}
