use vault_api_models::Track;
use vault_core::create::new_playlist;
use vault_core::format::format_duration;
use vault_core::playback::{PlaybackQueue, Player};
use vault_core::Notice;

use crate::cli::{AddTrackArgs, CreateArgs, OutputFormat, PlaylistPlayArgs, PlaylistShowArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{emit_notice, render_playlist, render_playlist_cards, render_playlist_detail};

const LOAD_TRACKS_FAILED: &str = "Failed to load playlist tracks";
const LOAD_PLAYLISTS_FAILED: &str = "Failed to load playlists";
const CREATE_FAILED: &str = "Failed to create playlist";
const CREATED: &str = "Playlist created successfully";
const ADD_TRACK_FAILED: &str = "Failed to add track to playlist";

/// Player for a terminal: audio output happens elsewhere, so it records and
/// announces the track now playing.
#[derive(Debug, Default)]
pub(crate) struct TerminalPlayer {
    pub(crate) announcements: Vec<String>,
}

impl Player for TerminalPlayer {
    fn play(&mut self, track: &Track) {
        tracing::debug!(track_id = track.id, "playback started");
        self.announcements.push(format!(
            "Now playing: {} ({})",
            track.name,
            format_duration(track.duration)
        ));
    }
}

pub(crate) async fn handle_playlists_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let summaries = ctx
        .client
        .playlist_summaries()
        .await
        .map_err(|err| CliError::from_client(err, LOAD_PLAYLISTS_FAILED))?;
    print!("{}", render_playlist_cards(&summaries, format)?);
    Ok(())
}

pub(crate) async fn handle_playlists_show(
    ctx: &AppContext,
    args: PlaylistShowArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let detail = ctx
        .client
        .playlist_detail(args.id)
        .await
        .map_err(|err| CliError::from_client(err, LOAD_TRACKS_FAILED))?;
    let queue = PlaybackQueue::new(detail.tracks.clone());
    print!("{}", render_playlist_detail(&detail, &queue, format)?);
    Ok(())
}

pub(crate) async fn handle_playlists_play(
    ctx: &AppContext,
    args: PlaylistPlayArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let detail = ctx
        .client
        .playlist_detail(args.id)
        .await
        .map_err(|err| CliError::from_client(err, LOAD_TRACKS_FAILED))?;
    let mut queue = PlaybackQueue::new(detail.tracks.clone());
    let mut player = TerminalPlayer::default();

    let started = match args.track {
        Some(track_id) => {
            if queue.play_track(&mut player, track_id).is_none() {
                return Err(CliError::validation(format!(
                    "track {track_id} is not in playlist {}",
                    args.id
                )));
            }
            true
        }
        None => queue.play_all(&mut player).is_some(),
    };

    if !started {
        emit_notice(
            &Notice::warning("This playlist has no recordings to play"),
            format,
        );
        return Ok(());
    }
    if format == OutputFormat::Table {
        for line in &player.announcements {
            println!("{line}");
        }
    }
    print!("{}", render_playlist_detail(&detail, &queue, format)?);
    Ok(())
}

pub(crate) async fn handle_playlists_create(
    ctx: &AppContext,
    args: CreateArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let request = new_playlist(&args.name, args.color, args.icon)
        .map_err(|err| CliError::validation(err.to_string()))?;
    let created = ctx
        .client
        .create_playlist(&request)
        .await
        .map_err(|err| CliError::from_client(err, CREATE_FAILED))?;
    emit_notice(&created.notice(CREATED), format);
    print!("{}", render_playlist(&created.value, format)?);
    Ok(())
}

pub(crate) async fn handle_playlists_add_track(
    ctx: &AppContext,
    args: AddTrackArgs,
) -> CliResult<()> {
    ctx.client
        .add_track_to_playlist(args.playlist, args.track)
        .await
        .map_err(|err| CliError::from_client(err, ADD_TRACK_FAILED))?;
    println!("Track {} added to playlist {}", args.track, args.playlist);
    Ok(())
}
