//! Output renderers and formatting helpers for CLI commands.
//!
//! Renderers return the text to print so handlers stay thin and the layout
//! can be checked directly.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::json;
use vault_api_models::{Category, Playlist, PlaylistDetail, Track, User};
use vault_client::{PlaylistSummary, ProfileStats};
use vault_core::format::{
    header_email, initials, or_not_set, recordings_label, track_meta,
};
use vault_core::playback::PlaybackQueue;
use vault_core::search::SearchResults;
use vault_core::{Notice, Severity};

use crate::cli::OutputFormat;
use crate::client::{CliResult, json_failure};

pub(crate) const NO_RESULTS: &str = "No results found";
const NOW_PLAYING_MARKER: &str = "▶";

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| json_failure(&err))
}

pub(crate) fn render_playlist_cards(
    summaries: &[PlaylistSummary],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(summaries),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{:<6} {:<28} {:<8} {:<22} TRACKS",
                "ID", "NAME", "COLOR", "ICON"
            );
            for summary in summaries {
                let playlist = &summary.playlist;
                let _ = writeln!(
                    out,
                    "{:<6} {:<28} {:<8} {:<22} {}",
                    playlist.id,
                    playlist.name,
                    playlist.color,
                    playlist.icon,
                    recordings_label(summary.track_count)
                );
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_playlist(playlist: &Playlist, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(playlist),
        OutputFormat::Table => Ok(format!(
            "id: {}\nname: {}\ncolor: {}\nicon: {}\n",
            playlist.id, playlist.name, playlist.color, playlist.icon
        )),
    }
}

/// Tracks of a playlist, marking the one now playing.
pub(crate) fn render_playlist_detail(
    detail: &PlaylistDetail,
    queue: &PlaybackQueue,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let document = json!({
                "playlist": detail,
                "nowPlaying": queue.current().map(|track| track.id),
            });
            to_json(&document)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{} ({})",
                detail.playlist.name,
                recordings_label(detail.tracks.len())
            );
            if detail.tracks.is_empty() {
                let _ = writeln!(out, "No recordings in this playlist yet");
                return Ok(out);
            }
            for (index, track) in queue.tracks().iter().enumerate() {
                let _ = writeln!(out, "{}", track_row(index, track, queue.is_current(track)));
            }
            Ok(out)
        }
    }
}

fn track_row(index: usize, track: &Track, current: bool) -> String {
    let marker = if current {
        NOW_PLAYING_MARKER.to_string()
    } else {
        (index + 1).to_string()
    };
    format!("{marker:>3}  {:<32} {}", track.name, track_meta(track))
}

pub(crate) fn render_tracks(tracks: &[Track], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(tracks),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(out, "{:<6} {:<32} DETAILS", "ID", "NAME");
            for track in tracks {
                let _ = writeln!(out, "{:<6} {:<32} {}", track.id, track.name, track_meta(track));
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_categories(
    categories: &[Category],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(categories),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(out, "{:<6} {:<28} {:<8} ICON", "ID", "NAME", "COLOR");
            for category in categories {
                let _ = writeln!(
                    out,
                    "{:<6} {:<28} {:<8} {}",
                    category.id, category.name, category.color, category.icon
                );
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_search(results: &SearchResults, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(results),
        OutputFormat::Table => {
            if results.is_empty() {
                return Ok(format!("{NO_RESULTS}\n"));
            }
            let mut out = String::new();
            if !results.playlists.is_empty() {
                let _ = writeln!(out, "Playlists");
                for playlist in &results.playlists {
                    let _ = writeln!(out, "  {:<6} {}", playlist.id, playlist.name);
                }
            }
            if !results.tracks.is_empty() {
                let _ = writeln!(out, "Recordings");
                for track in &results.tracks {
                    let _ = writeln!(
                        out,
                        "  {:<6} {:<32} {}",
                        track.id,
                        track.name,
                        track_meta(track)
                    );
                }
            }
            Ok(out)
        }
    }
}

pub(crate) fn render_profile(
    user: &User,
    stats: &ProfileStats,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "user": user,
            "displayName": user.display_name(),
            "initials": initials(user),
            "avatarColor": user.avatar_color_or_default(),
            "stats": stats,
        })),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "[{}] {}  ({})",
                initials(user),
                user.display_name(),
                user.avatar_color_or_default()
            );
            let _ = writeln!(out, "{}", header_email(user));
            let _ = writeln!(out);
            let _ = writeln!(out, "username: {}", user.username);
            let _ = writeln!(out, "full name: {}", or_not_set(user.full_name.as_deref()));
            let _ = writeln!(out, "email: {}", or_not_set(user.email.as_deref()));
            let _ = writeln!(out, "phone: {}", or_not_set(user.phone.as_deref()));
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "recordings: {}  playlists: {}  categories: {}",
                stats.recordings, stats.playlists, stats.categories
            );
            Ok(out)
        }
    }
}

/// Print a notice: successes to stdout, warnings and errors to stderr.
///
/// Success notices are suppressed in JSON mode so stdout stays parseable.
pub(crate) fn emit_notice(notice: &Notice, format: OutputFormat) {
    match notice.severity {
        Severity::Success => {
            if format == OutputFormat::Table {
                println!("{}", notice.description);
            }
        }
        Severity::Warning => eprintln!("warning: {}", notice.description),
        Severity::Error => eprintln!("error: {}", notice.description),
    }
}
