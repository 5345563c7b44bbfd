use vault_core::create::new_category;

use crate::cli::{CreateArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::{emit_notice, render_categories};

const LOAD_FAILED: &str = "Failed to load categories";
const CREATE_FAILED: &str = "Failed to create category";
const CREATED: &str = "Category created successfully";

pub(crate) async fn handle_categories_list(
    ctx: &AppContext,
    format: OutputFormat,
) -> CliResult<()> {
    let categories = ctx
        .client
        .categories()
        .await
        .map_err(|err| CliError::from_client(err, LOAD_FAILED))?;
    print!("{}", render_categories(&categories, format)?);
    Ok(())
}

pub(crate) async fn handle_categories_create(
    ctx: &AppContext,
    args: CreateArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let request = new_category(&args.name, args.color, args.icon)
        .map_err(|err| CliError::validation(err.to_string()))?;
    let created = ctx
        .client
        .create_category(&request)
        .await
        .map_err(|err| CliError::from_client(err, CREATE_FAILED))?;
    emit_notice(&created.notice(CREATED), format);
    print!("{}", render_categories(std::slice::from_ref(&created.value), format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::commands::test_support::context_for;

    #[tokio::test]
    async fn create_uses_microphone_default_and_refreshes() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/categories").json_body(json!({
                "name": "Voice Memos",
                "color": "#1DB954",
                "icon": "ri-mic-fill"
            }));
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({
                    "id": 1,
                    "name": "Voice Memos",
                    "color": "#1DB954",
                    "icon": "ri-mic-fill"
                }));
        });
        let refresh = server.mock(|when, then| {
            when.method(GET).path("/api/categories");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{
                    "id": 1,
                    "name": "Voice Memos",
                    "color": "#1DB954",
                    "icon": "ri-mic-fill"
                }]));
        });

        handle_categories_create(
            &context_for(&server),
            CreateArgs {
                name: "Voice Memos".into(),
                color: None,
                icon: None,
            },
            OutputFormat::Table,
        )
        .await
        .expect("create succeeds");
        create.assert();
        refresh.assert();
    }

    #[tokio::test]
    async fn blank_category_name_is_rejected() {
        let server = MockServer::start_async().await;
        let err = handle_categories_create(
            &context_for(&server),
            CreateArgs {
                name: String::new(),
                color: None,
                icon: None,
            },
            OutputFormat::Table,
        )
        .await
        .expect_err("blank name");
        assert!(matches!(
            err,
            CliError::Validation(message) if message == "Please enter a category name"
        ));
    }

    #[tokio::test]
    async fn list_maps_bad_request_to_validation() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/categories");
            then.status(422)
                .header("content-type", "application/json")
                .json_body(json!({"message": "not allowed"}));
        });

        let err = handle_categories_list(&context_for(&server), OutputFormat::Table)
            .await
            .expect_err("rejected");
        assert!(matches!(err, CliError::Validation(message) if message == "not allowed"));
    }
}
