//! Sample entities mirroring what the backend returns.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use vault_api_models::{Category, Playlist, PlaylistDetail, Track, User};

/// Fixed creation timestamp (`Mar 4, 2024`) used by the sample tracks.
#[must_use]
pub fn sample_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 10, 30, 0)
        .single()
        .unwrap_or_default()
}

/// A fully populated account.
#[must_use]
pub fn sample_user() -> User {
    User {
        id: 1,
        username: "ada".to_string(),
        full_name: Some("Ada Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        phone: Some("+44 20 7946 0000".to_string()),
        avatar_color: Some("#9C27B0".to_string()),
    }
}

/// An account with only the mandatory fields set.
#[must_use]
pub fn bare_user() -> User {
    User {
        id: 2,
        username: "grace".to_string(),
        full_name: None,
        email: None,
        phone: None,
        avatar_color: None,
    }
}

/// Build a playlist with the default music styling.
#[must_use]
pub fn playlist(id: i64, name: &str) -> Playlist {
    Playlist {
        id,
        name: name.to_string(),
        color: "#1DB954".to_string(),
        icon: "ri-music-fill".to_string(),
    }
}

/// Build a category with the default microphone styling.
#[must_use]
pub fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        color: "#1DB954".to_string(),
        icon: "ri-mic-fill".to_string(),
    }
}

/// Build a track stamped with [`sample_timestamp`].
#[must_use]
pub fn track(id: i64, name: &str, duration: f64) -> Track {
    Track {
        id,
        name: name.to_string(),
        duration,
        created_at: Some(sample_timestamp()),
        category_id: None,
    }
}

/// Two playlists: "Morning Ideas" and "Band Rehearsal".
#[must_use]
pub fn sample_playlists() -> Vec<Playlist> {
    vec![playlist(1, "Morning Ideas"), playlist(2, "Band Rehearsal")]
}

/// Three tracks whose names exercise case-insensitive matching.
#[must_use]
pub fn sample_tracks() -> Vec<Track> {
    vec![
        track(10, "Recording 1", 65.4),
        track(11, "Song", 184.0),
        track(12, "REC Demo", 9.9),
    ]
}

/// Detail document for `playlist` holding `tracks`.
#[must_use]
pub fn detail(playlist: Playlist, tracks: Vec<Track>) -> PlaylistDetail {
    PlaylistDetail { playlist, tracks }
}

/// Serialize any fixture into the JSON the backend would send.
///
/// Falls back to `null` for values serde cannot represent, which none of the
/// fixtures produce.
#[must_use]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// JSON for the account returned by `GET /api/users/me`.
#[must_use]
pub fn sample_user_json() -> Value {
    json!({
        "id": 1,
        "username": "ada",
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "avatarColor": "#9C27B0"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_user_json_matches_typed_fixture() {
        let parsed: User = serde_json::from_value(sample_user_json()).expect("parse user");
        assert_eq!(parsed, sample_user());
    }

    #[test]
    fn detail_round_trips_through_backend_shape() {
        let doc = to_json(&detail(playlist(5, "Loops"), sample_tracks()));
        assert_eq!(doc["name"], "Loops");
        assert_eq!(doc["tracks"].as_array().map(Vec::len), Some(3));
        assert_eq!(doc["tracks"][0]["createdAt"], "2024-03-04T10:30:00Z");
    }
}
