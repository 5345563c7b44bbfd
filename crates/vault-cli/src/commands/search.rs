use futures_util::try_join;
use vault_core::search::{is_blank_query, search};

use crate::cli::{OutputFormat, SearchArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_search;

const SEARCH_FAILED: &str = "Failed to search recordings";

pub(crate) async fn handle_search(
    ctx: &AppContext,
    args: SearchArgs,
    format: OutputFormat,
) -> CliResult<()> {
    if is_blank_query(&args.query) {
        print!("{}", render_search(&Default::default(), format)?);
        return Ok(());
    }
    let (playlists, tracks) = try_join!(ctx.client.playlists(), ctx.client.tracks())
        .map_err(|err| CliError::from_client(err, SEARCH_FAILED))?;
    let results = search(&args.query, &playlists, &tracks);
    tracing::debug!(
        query = %args.query,
        playlists = results.playlists.len(),
        tracks = results.tracks.len(),
        "search complete"
    );
    print!("{}", render_search(&results, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use vault_test_support::fixtures::{sample_playlists, sample_tracks, to_json};

    use crate::commands::test_support::context_for;

    #[tokio::test]
    async fn search_reads_both_lists() {
        let server = MockServer::start_async().await;
        let playlists = server.mock(|when, then| {
            when.method(GET).path("/api/playlists");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(to_json(&sample_playlists()));
        });
        let tracks = server.mock(|when, then| {
            when.method(GET).path("/api/tracks");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(to_json(&sample_tracks()));
        });

        handle_search(
            &context_for(&server),
            SearchArgs {
                query: "rec".into(),
            },
            OutputFormat::Table,
        )
        .await
        .expect("search succeeds");
        playlists.assert();
        tracks.assert();
    }

    #[tokio::test]
    async fn blank_query_skips_the_backend() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/tracks");
            then.status(500);
        });

        handle_search(
            &context_for(&server),
            SearchArgs {
                query: "   ".into(),
            },
            OutputFormat::Table,
        )
        .await
        .expect("blank query yields empty results");
    }
}
