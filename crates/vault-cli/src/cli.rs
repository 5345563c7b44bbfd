//! Argument parsing and command dispatch.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;
use vault_api_models::{ColorPreset, IconPreset};
use vault_client::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use vault_client::{ApiClient, ClientConfig};
use vault_core::Notice;
use vault_telemetry::{LogFormat, LoggingConfig, init_logging};

use crate::client::{AppContext, CliError, CliResult, parse_url};
use crate::commands::categories::{handle_categories_create, handle_categories_list};
use crate::commands::playlists::{
    handle_playlists_add_track, handle_playlists_create, handle_playlists_list,
    handle_playlists_play, handle_playlists_show,
};
use crate::commands::profile::{handle_profile_edit, handle_profile_show};
use crate::commands::search::handle_search;
use crate::commands::tracks::handle_tracks_list;
use crate::commands::upload::handle_upload;
use crate::output::emit_notice;

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&logging_config(&cli)) {
        emit_notice(&Notice::warning(err.to_string()), cli.output);
    }

    let ctx = match build_context(&cli) {
        Ok(ctx) => ctx,
        Err(err) => return report(&err, cli.output),
    };

    match dispatch(cli.command, &ctx, cli.output).await {
        Ok(()) => 0,
        Err(err) => report(&err, cli.output),
    }
}

fn report(err: &CliError, output: OutputFormat) -> i32 {
    emit_notice(&err.to_notice(), output);
    err.exit_code()
}

fn logging_config(cli: &Cli) -> LoggingConfig<'_> {
    let mut config = LoggingConfig::default();
    if let Some(format) = cli.log_format {
        config.format = format;
    }
    config
}

fn build_context(cli: &Cli) -> CliResult<AppContext> {
    if cli.timeout == 0 {
        return Err(CliError::validation("timeout must be at least one second"));
    }
    let config = ClientConfig::new(cli.api_url.clone())
        .with_session(cli.session.clone())
        .with_timeout(Duration::from_secs(cli.timeout));
    let client = ApiClient::new(&config)
        .map_err(|err| CliError::validation(format!("invalid configuration: {err}")))?;
    Ok(AppContext { client })
}

pub(crate) async fn dispatch(
    command: Command,
    ctx: &AppContext,
    output: OutputFormat,
) -> CliResult<()> {
    match command {
        Command::Playlists(playlists) => match playlists {
            PlaylistCommand::List => handle_playlists_list(ctx, output).await,
            PlaylistCommand::Show(args) => handle_playlists_show(ctx, args, output).await,
            PlaylistCommand::Play(args) => handle_playlists_play(ctx, args, output).await,
            PlaylistCommand::Create(args) => handle_playlists_create(ctx, args, output).await,
            PlaylistCommand::AddTrack(args) => handle_playlists_add_track(ctx, args).await,
        },
        Command::Categories(categories) => match categories {
            CategoryCommand::List => handle_categories_list(ctx, output).await,
            CategoryCommand::Create(args) => handle_categories_create(ctx, args, output).await,
        },
        Command::Tracks(tracks) => match tracks {
            TrackCommand::List => handle_tracks_list(ctx, output).await,
        },
        Command::Search(args) => handle_search(ctx, args, output).await,
        Command::Upload(args) => handle_upload(ctx, args, output).await,
        Command::Profile(profile) => match profile {
            ProfileCommand::Show => handle_profile_show(ctx, output).await,
            ProfileCommand::Edit(args) => handle_profile_edit(ctx, args, output).await,
        },
    }
}

#[derive(Parser)]
#[command(name = "vault", about = "Organise and play back your audio recordings")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "VAULT_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "VAULT_SESSION",
        hide_env_values = true,
        help = "Session cookie pair, e.g. connect.sid=..."
    )]
    pub(crate) session: Option<String>,
    #[arg(
        long,
        global = true,
        env = "VAULT_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "VAULT_LOG_FORMAT",
        help = "Diagnostic log format on stderr: json, pretty or compact"
    )]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Browse, play and organise playlists.
    #[command(subcommand)]
    Playlists(PlaylistCommand),
    /// Legacy categories.
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Uploaded recordings.
    #[command(subcommand)]
    Tracks(TrackCommand),
    /// Find playlists and recordings by name.
    Search(SearchArgs),
    /// Upload an audio file into a playlist.
    Upload(UploadArgs),
    /// Show or edit your account.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Subcommand)]
pub(crate) enum PlaylistCommand {
    List,
    Show(PlaylistShowArgs),
    Play(PlaylistPlayArgs),
    Create(CreateArgs),
    AddTrack(AddTrackArgs),
}

#[derive(Subcommand)]
pub(crate) enum CategoryCommand {
    List,
    Create(CreateArgs),
}

#[derive(Subcommand)]
pub(crate) enum TrackCommand {
    List,
}

#[derive(Subcommand)]
pub(crate) enum ProfileCommand {
    Show,
    Edit(ProfileEditArgs),
}

#[derive(Args)]
pub(crate) struct PlaylistShowArgs {
    #[arg(help = "Playlist identifier")]
    pub(crate) id: i64,
}

#[derive(Args)]
pub(crate) struct PlaylistPlayArgs {
    #[arg(help = "Playlist identifier")]
    pub(crate) id: i64,
    #[arg(long, help = "Play this track instead of starting from the top")]
    pub(crate) track: Option<i64>,
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    #[arg(help = "Display name")]
    pub(crate) name: String,
    #[arg(long, help = "green, blue, pink, yellow, orange, purple or a color code")]
    pub(crate) color: Option<ColorPreset>,
    #[arg(long, help = "music, microphone, album, music-file, sound-module, video, music-folder")]
    pub(crate) icon: Option<IconPreset>,
}

#[derive(Args)]
pub(crate) struct AddTrackArgs {
    #[arg(help = "Playlist identifier")]
    pub(crate) playlist: i64,
    #[arg(help = "Track identifier")]
    pub(crate) track: i64,
}

#[derive(Args)]
pub(crate) struct SearchArgs {
    #[arg(help = "Case-insensitive text to look for in names")]
    pub(crate) query: String,
}

#[derive(Args)]
pub(crate) struct UploadArgs {
    #[arg(help = "Audio file to upload")]
    pub(crate) file: PathBuf,
    #[arg(long, help = "Destination playlist identifier")]
    pub(crate) playlist: Option<i64>,
    #[arg(long, help = "Track name (defaults to the file name)")]
    pub(crate) name: Option<String>,
    #[arg(long, help = "Length in seconds (defaults to the probed length)")]
    pub(crate) duration: Option<f64>,
    #[arg(long, help = "Legacy category identifier")]
    pub(crate) category: Option<i64>,
}

#[derive(Args, Default)]
pub(crate) struct ProfileEditArgs {
    #[arg(long)]
    pub(crate) full_name: Option<String>,
    #[arg(long)]
    pub(crate) username: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    #[arg(long)]
    pub(crate) phone: Option<String>,
    #[arg(long, help = "New password; leave out to keep the current one")]
    pub(crate) password: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_nested_commands() {
        let cli = Cli::try_parse_from([
            "vault",
            "--api-url",
            "http://vault.local:8080",
            "--session",
            "connect.sid=abc",
            "playlists",
            "play",
            "4",
            "--track",
            "9",
            "--output",
            "json",
        ])
        .expect("valid arguments");
        assert_eq!(cli.api_url.as_str(), "http://vault.local:8080/");
        assert_eq!(cli.session.as_deref(), Some("connect.sid=abc"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Command::Playlists(PlaylistCommand::Play(PlaylistPlayArgs {
                id: 4,
                track: Some(9)
            }))
        ));
    }

    #[test]
    fn create_accepts_preset_names() {
        let cli = Cli::try_parse_from([
            "vault", "categories", "create", "Voice", "--color", "pink", "--icon", "album",
        ])
        .expect("valid arguments");
        let Command::Categories(CategoryCommand::Create(args)) = cli.command else {
            panic!("expected categories create");
        };
        assert_eq!(args.color, Some(ColorPreset::Pink));
        assert_eq!(args.icon, Some(IconPreset::Album));
    }

    #[test]
    fn rejects_unknown_presets_and_bad_urls() {
        assert!(
            Cli::try_parse_from(["vault", "playlists", "create", "x", "--color", "teal"]).is_err()
        );
        assert!(Cli::try_parse_from(["vault", "--api-url", "::nope", "tracks", "list"]).is_err());
    }

    #[test]
    fn zero_timeout_is_a_validation_error() {
        let cli = Cli::try_parse_from(["vault", "--timeout", "0", "tracks", "list"])
            .expect("valid arguments");
        let err = build_context(&cli).err().expect("zero timeout rejected");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn log_format_flag_overrides_the_build_default() {
        let cli = Cli::try_parse_from(["vault", "tracks", "list", "--log-format", "Compact"])
            .expect("valid arguments");
        assert_eq!(cli.log_format, Some(LogFormat::Compact));
        assert_eq!(logging_config(&cli).format, LogFormat::Compact);

        assert!(Cli::try_parse_from(["vault", "--log-format", "xml", "tracks", "list"]).is_err());
    }

    #[test]
    fn upload_playlist_flag_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["vault", "upload", "take.mp3"]).expect("valid arguments");
        let Command::Upload(args) = cli.command else {
            panic!("expected upload");
        };
        assert_eq!(args.playlist, None);
        assert_eq!(args.file, PathBuf::from("take.mp3"));
    }
}
