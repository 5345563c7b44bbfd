use vault_core::Notice;
use vault_core::profile::{ProfileEdits, ProfileForm};

use crate::cli::{OutputFormat, ProfileEditArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{emit_notice, render_profile};

const LOAD_FAILED: &str = "Failed to load profile";
const UPDATE_FAILED: &str = "Failed to update profile";
const UPDATED: &str = "Profile updated successfully";
const NOTHING_TO_UPDATE: &str = "nothing to update; pass at least one of \
    --full-name, --username, --email, --phone, --password";

pub(crate) async fn handle_profile_show(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let user = ctx
        .client
        .current_user()
        .await
        .map_err(|err| CliError::from_client(err, LOAD_FAILED))?;
    let stats = ctx
        .client
        .profile_stats()
        .await
        .map_err(|err| CliError::from_client(err, LOAD_FAILED))?;
    print!("{}", render_profile(&user, &stats, format)?);
    Ok(())
}

pub(crate) async fn handle_profile_edit(
    ctx: &AppContext,
    args: ProfileEditArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let edits = ProfileEdits {
        full_name: args.full_name,
        username: args.username,
        email: args.email,
        phone: args.phone,
        password: args.password,
    };
    if edits.is_empty() {
        return Err(CliError::validation(NOTHING_TO_UPDATE));
    }

    let current = ctx
        .client
        .current_user()
        .await
        .map_err(|err| CliError::from_client(err, LOAD_FAILED))?;
    let update = ProfileForm::from_user(&current).with_edits(edits).into_update();
    let outcome = ctx
        .client
        .update_current_user(&update)
        .await
        .map_err(|err| CliError::from_client(err, UPDATE_FAILED))?;
    emit_notice(&outcome.notice(UPDATED), format);
    let Some(refreshed) = outcome.value else {
        return Ok(());
    };

    // The update already landed; a stats failure only costs the summary.
    match ctx.client.profile_stats().await {
        Ok(stats) => print!("{}", render_profile(&refreshed, &stats, format)?),
        Err(err) => emit_notice(
            &Notice::warning(CliError::from_client(err, LOAD_FAILED).display_message()),
            format,
        ),
    }
    Ok(())
}
