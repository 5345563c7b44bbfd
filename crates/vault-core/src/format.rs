//! Display formatting for tracks, playlists and accounts.

use chrono::{DateTime, Utc};
use vault_api_models::{Track, User};

/// Placeholder shown when a track carries no creation timestamp.
pub const NO_DATE: &str = "No date";
/// Placeholder for an unset optional profile field.
pub const NOT_SET: &str = "Not set";
/// Placeholder for a missing email in the profile header.
pub const NO_EMAIL: &str = "No email set";

/// Render seconds as `m:ss`, flooring both parts.
///
/// Negative and non-finite inputs render as `0:00`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Render a timestamp as `Mon D, YYYY`.
#[must_use]
pub fn format_date(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || NO_DATE.to_string(),
        |ts| ts.format("%b %-d, %Y").to_string(),
    )
}

/// Secondary line of a track row: `date · duration`.
#[must_use]
pub fn track_meta(track: &Track) -> String {
    format!(
        "{} · {}",
        format_date(track.created_at.as_ref()),
        format_duration(track.duration)
    )
}

/// Track count line shown on a playlist card.
#[must_use]
pub fn recordings_label(count: usize) -> String {
    format!("{count} recordings")
}

/// Up to two uppercase initials for the avatar.
///
/// Uses the first letter of each word of the full name, falling back to the
/// first two characters of the username.
#[must_use]
pub fn initials(user: &User) -> String {
    let from_name: String = user
        .full_name
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    let source = if from_name.is_empty() {
        user.username.chars().take(2).collect()
    } else {
        from_name
    };
    source.to_uppercase()
}

/// Value of an optional profile field, or [`NOT_SET`].
#[must_use]
pub fn or_not_set(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_SET)
}

/// Email for the profile header, or [`NO_EMAIL`].
#[must_use]
pub fn header_email(user: &User) -> &str {
    user.email
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(NO_EMAIL)
}
