//! Command handlers grouped by page.

pub(crate) mod categories;
pub(crate) mod playlists;
pub(crate) mod profile;
pub(crate) mod search;
pub(crate) mod tracks;
pub(crate) mod upload;

#[cfg(test)]
pub(crate) mod test_support {
    use httpmock::MockServer;
    use vault_client::{ApiClient, ClientConfig};

    use crate::client::AppContext;

    pub(crate) fn context_for(server: &MockServer) -> AppContext {
        let base_url = server.base_url().parse().expect("valid URL");
        AppContext {
            client: ApiClient::new(&ClientConfig::new(base_url)).expect("client builds"),
        }
    }
}
