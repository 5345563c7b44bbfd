use crate::cli::OutputFormat;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_tracks;

const LOAD_FAILED: &str = "Failed to load recordings";

pub(crate) async fn handle_tracks_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let tracks = ctx
        .client
        .tracks()
        .await
        .map_err(|err| CliError::from_client(err, LOAD_FAILED))?;
    print!("{}", render_tracks(&tracks, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use vault_test_support::fixtures::{sample_tracks, to_json};

    use crate::commands::test_support::context_for;

    #[tokio::test]
    async fn list_renders_backend_tracks() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/tracks");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(to_json(&sample_tracks()));
        });

        handle_tracks_list(&context_for(&server), OutputFormat::Json)
            .await
            .expect("list succeeds");
        mock.assert();
    }

    #[tokio::test]
    async fn malformed_payload_is_a_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/tracks");
            then.status(200)
                .header("content-type", "application/json")
                .body("{\"tracks\": 3}");
        });

        let err = handle_tracks_list(&context_for(&server), OutputFormat::Table)
            .await
            .expect_err("decode failure");
        assert_eq!(err.exit_code(), 3);
    }
}
