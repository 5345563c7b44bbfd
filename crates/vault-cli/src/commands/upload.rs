use vault_client::UploadRequest;
use vault_client::upload::UPLOAD_FAILED_MESSAGE;

use crate::cli::{OutputFormat, UploadArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{emit_notice, render_tracks};

pub(crate) async fn handle_upload(
    ctx: &AppContext,
    args: UploadArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let request = UploadRequest {
        file: args.file,
        playlist_id: args.playlist,
        name: args.name,
        duration: args.duration,
        category_id: args.category,
    };
    let outcome = ctx
        .client
        .upload_track(&request)
        .await
        .map_err(|err| CliError::from_client(err, UPLOAD_FAILED_MESSAGE))?;

    emit_notice(&outcome.notice(), format);
    print!(
        "{}",
        render_tracks(std::slice::from_ref(&outcome.track), format)?
    );
    Ok(())
}
