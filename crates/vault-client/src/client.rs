//! Typed endpoints over a shared `reqwest` client.

use std::sync::Arc;

use futures_util::future::{try_join_all, try_join3};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use vault_api_models::{
    Category, ErrorBody, NewCategory, NewPlaylist, Playlist, PlaylistDetail, Track,
    TrackPlacement, User, UserUpdate,
};
use vault_core::Notice;

use crate::cache::QueryCache;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const PATH_ME: &str = "/api/users/me";
pub(crate) const PATH_PLAYLISTS: &str = "/api/playlists";
pub(crate) const PATH_CATEGORIES: &str = "/api/categories";
pub(crate) const PATH_TRACKS: &str = "/api/tracks";
pub(crate) const PATH_UPLOAD: &str = "/api/tracks/upload";

pub(crate) fn playlist_path(id: i64) -> String {
    format!("{PATH_PLAYLISTS}/{id}")
}

pub(crate) fn playlist_tracks_path(id: i64) -> String {
    format!("{PATH_PLAYLISTS}/{id}/tracks")
}

/// A playlist with the number of tracks its detail document lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    /// The playlist itself.
    #[serde(flatten)]
    pub playlist: Playlist,
    /// Tracks currently attached.
    pub track_count: usize,
}

/// A write the backend accepted, plus any failure refreshing its cache entry
/// afterwards.
///
/// Once the write succeeds it is never reported as failed: a retry would
/// repeat it, and nothing deduplicates writes.
#[derive(Debug)]
pub struct Mutation<T> {
    /// Entity returned by, or refetched after, the write.
    pub value: T,
    /// Why the follow-up refetch failed, if it did.
    pub refresh_error: Option<ClientError>,
}

impl<T> Mutation<T> {
    /// `true` when the follow-up refetch also succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.refresh_error.is_none()
    }

    /// `success` as a success notice, or a warning when the refetch failed.
    #[must_use]
    pub fn notice(&self, success: &str) -> Notice {
        match &self.refresh_error {
            None => Notice::success(success),
            Some(err) => Notice::warning(format!(
                "{success}, but the refreshed data could not be loaded: {err}"
            )),
        }
    }
}

/// Counts shown on the profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    /// Uploaded tracks.
    pub recordings: usize,
    /// Playlists owned.
    pub playlists: usize,
    /// Legacy categories owned.
    pub categories: usize,
}

/// Client for the vault API. Cheap to clone; clones share the HTTP
/// connection pool, the session cookie and the [`QueryCache`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    cache: QueryCache,
}

impl ApiClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the trace id cannot be used as a
    /// header or the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(vault_telemetry::trace_id()).map_err(|_| {
            ClientError::Config("trace identifier contains invalid characters".to_string())
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let jar = Arc::new(Jar::default());
        if let Some(session) = &config.session {
            jar.add_cookie_str(session, &config.base_url);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .cookie_provider(jar)
            .build()
            .map_err(|err| ClientError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            cache: QueryCache::new(),
        })
    }

    /// Backend origin requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Response cache shared by this client and its clones.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Config(format!("invalid base URL: {err}")))
    }

    pub(crate) async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        tracing::debug!(path, "sending request");
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(classify_failure(response, path).await)
        }
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
        path: &str,
    ) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    pub(crate) fn post(&self, path: &str) -> Result<RequestBuilder> {
        Ok(self.http.post(self.url(path)?))
    }

    async fn fetch_value(&self, path: &str) -> Result<Value> {
        let request = self.http.get(self.url(path)?);
        let response = self.send(request, path).await?;
        self.read_json(response, path).await
    }

    /// GET `path` through the cache and decode it.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn query<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = if let Some(cached) = self.cache.get(path) {
            tracing::debug!(path, "cache hit");
            cached
        } else {
            tracing::debug!(path, "cache miss");
            let fetched = self.fetch_value(path).await?;
            self.cache.insert(path, fetched.clone());
            fetched
        };
        serde_json::from_value(value).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Drop `path` from the cache and fetch it again.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn refetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.cache.invalidate(path);
        self.query(path).await
    }

    async fn refresh_after_write<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let refreshed = self.refetch(path).await;
        if let Err(err) = &refreshed {
            tracing::warn!(path, error = %err, "refresh after write failed");
        }
        refreshed
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let request = self.post(path)?.json(body);
        self.send(request, path).await
    }

    /// `GET /api/users/me`.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn current_user(&self) -> Result<User> {
        self.query(PATH_ME).await
    }

    /// `PATCH /api/users/me`, then refetch the account.
    ///
    /// The refreshed account is `None` when the refetch failed.
    ///
    /// # Errors
    ///
    /// Returns transport or status failures of the PATCH itself.
    pub async fn update_current_user(&self, update: &UserUpdate) -> Result<Mutation<Option<User>>> {
        let request = self.http.patch(self.url(PATH_ME)?).json(update);
        self.send(request, PATH_ME).await?;
        Ok(match self.refresh_after_write::<User>(PATH_ME).await {
            Ok(user) => Mutation {
                value: Some(user),
                refresh_error: None,
            },
            Err(err) => Mutation {
                value: None,
                refresh_error: Some(err),
            },
        })
    }

    /// `GET /api/playlists`.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn playlists(&self) -> Result<Vec<Playlist>> {
        self.query(PATH_PLAYLISTS).await
    }

    /// `POST /api/playlists`, then refetch the list.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures of the POST itself.
    pub async fn create_playlist(&self, request: &NewPlaylist) -> Result<Mutation<Playlist>> {
        let response = self.post_json(PATH_PLAYLISTS, request).await?;
        let created: Playlist = self.read_json(response, PATH_PLAYLISTS).await?;
        let refresh_error = self
            .refresh_after_write::<Vec<Playlist>>(PATH_PLAYLISTS)
            .await
            .err();
        Ok(Mutation {
            value: created,
            refresh_error,
        })
    }

    /// `GET /api/playlists/:id` with tracks in backend order.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn playlist_detail(&self, id: i64) -> Result<PlaylistDetail> {
        self.query(&playlist_path(id)).await
    }

    /// `POST /api/playlists/:id/tracks`, appending `track_id`.
    ///
    /// # Errors
    ///
    /// Returns transport or status failures from the backend.
    pub async fn add_track_to_playlist(&self, playlist_id: i64, track_id: i64) -> Result<()> {
        let path = playlist_tracks_path(playlist_id);
        let placement = TrackPlacement::append(track_id);
        self.post_json(&path, &placement).await?;
        self.cache.invalidate(&playlist_path(playlist_id));
        Ok(())
    }

    /// Every playlist paired with its real track count.
    ///
    /// Detail documents are fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first failure among the list or detail requests.
    pub async fn playlist_summaries(&self) -> Result<Vec<PlaylistSummary>> {
        let playlists = self.playlists().await?;
        let details = try_join_all(
            playlists
                .iter()
                .map(|playlist| self.playlist_detail(playlist.id)),
        )
        .await?;
        Ok(playlists
            .into_iter()
            .zip(details)
            .map(|(playlist, detail)| PlaylistSummary {
                playlist,
                track_count: detail.tracks.len(),
            })
            .collect())
    }

    /// `GET /api/categories`.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.query(PATH_CATEGORIES).await
    }

    /// `POST /api/categories`, then refetch the list.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures of the POST itself.
    pub async fn create_category(&self, request: &NewCategory) -> Result<Mutation<Category>> {
        let response = self.post_json(PATH_CATEGORIES, request).await?;
        let created: Category = self.read_json(response, PATH_CATEGORIES).await?;
        let refresh_error = self
            .refresh_after_write::<Vec<Category>>(PATH_CATEGORIES)
            .await
            .err();
        Ok(Mutation {
            value: created,
            refresh_error,
        })
    }

    /// `GET /api/tracks`.
    ///
    /// # Errors
    ///
    /// Returns transport, status or decode failures from the backend.
    pub async fn tracks(&self) -> Result<Vec<Track>> {
        self.query(PATH_TRACKS).await
    }

    /// Recording, playlist and category counts for the profile page.
    ///
    /// # Errors
    ///
    /// Returns the first failure among the three list requests.
    pub async fn profile_stats(&self) -> Result<ProfileStats> {
        let (tracks, playlists, categories) =
            try_join3(self.tracks(), self.playlists(), self.categories()).await?;
        Ok(ProfileStats {
            recordings: tracks.len(),
            playlists: playlists.len(),
            categories: categories.len(),
        })
    }
}

/// Turn a non-success response into [`ClientError::Status`].
///
/// Uses the JSON `message` field when present, otherwise the trimmed body.
pub(crate) async fn classify_failure(response: Response, path: &str) -> ClientError {
    let status = response.status();
    let bytes = response.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&bytes)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| String::from_utf8_lossy(&bytes).trim().to_string());
    tracing::debug!(path, status = status.as_u16(), "request rejected");
    ClientError::Status {
        status: status.as_u16(),
        path: path.to_string(),
        message,
    }
}
