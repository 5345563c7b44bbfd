//! Upload an audio file and attach it to a playlist.
//!
//! The flow is: validate locally, send the multipart upload, then append the
//! new track to the chosen playlist. A failed append does not undo the
//! upload; it is reported as a warning on [`UploadOutcome`].

use std::path::{Path, PathBuf};

use lofty::prelude::*;
use lofty::probe::Probe;
use reqwest::multipart::{Form, Part};
use vault_api_models::Track;
use vault_core::Notice;

use crate::client::{ApiClient, PATH_PLAYLISTS, PATH_TRACKS, PATH_UPLOAD, playlist_path};
use crate::error::{ClientError, Result};

/// Shown when the file is not recognised as audio.
pub const NOT_AUDIO_MESSAGE: &str = "Please select an audio file";
/// Shown when no destination playlist was chosen.
pub const NO_PLAYLIST_MESSAGE: &str = "Please select a playlist";
/// Success description.
pub const UPLOADED_MESSAGE: &str = "Your audio file has been uploaded successfully";
/// Fallback failure description.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload audio file";

/// What the caller wants uploaded and where.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadRequest {
    /// Local audio file.
    pub file: PathBuf,
    /// Destination playlist.
    pub playlist_id: Option<i64>,
    /// Track name; defaults to the file name without its extension.
    pub name: Option<String>,
    /// Length in seconds; defaults to the probed length, or `0`.
    pub duration: Option<f64>,
    /// Legacy category tag.
    pub category_id: Option<i64>,
}

/// Upload request that passed local checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUpload {
    /// Local audio file.
    pub file: PathBuf,
    /// File name sent with the `audio` part.
    pub file_name: String,
    /// MIME type sent with the `audio` part.
    pub mime: String,
    /// Destination playlist.
    pub playlist_id: i64,
    /// Track name.
    pub name: String,
    /// Length in seconds.
    pub duration: f64,
    /// Legacy category tag.
    pub category_id: Option<i64>,
}

/// Result of an upload whose first step succeeded.
#[derive(Debug)]
pub struct UploadOutcome {
    /// Track created by the backend.
    pub track: Track,
    /// Playlist the track was meant to join.
    pub playlist_id: i64,
    /// Why the playlist append failed, if it did.
    pub association_error: Option<ClientError>,
}

impl UploadOutcome {
    /// `true` when the track was uploaded and attached.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.association_error.is_none()
    }

    /// Success notice, or a warning when the append failed.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match &self.association_error {
            None => Notice::success(UPLOADED_MESSAGE),
            Some(err) => Notice::warning(format!(
                "\"{}\" was uploaded but could not be added to the playlist: {err}",
                self.track.name
            )),
        }
    }
}

/// File name with its last extension removed.
///
/// Names that would become empty (such as `.wav`) are kept whole.
#[must_use]
pub fn default_track_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// MIME type guessed from the file name, if it is `audio/*`.
#[must_use]
pub fn audio_mime(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .iter()
        .find(|mime| mime.type_() == mime_guess::mime::AUDIO)
        .map(|mime| mime.essence_str().to_string())
}

/// Length of the audio in seconds, when the container can be read.
#[must_use]
pub fn probe_duration(path: &Path) -> Option<f64> {
    let tagged = match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => tagged,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "duration probe failed");
            return None;
        }
    };
    let seconds = tagged.properties().duration().as_secs_f64();
    (seconds > 0.0).then_some(seconds)
}

/// Check an upload request without touching the network.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the file is missing or unreadable, and
/// [`ClientError::Validation`] when it is not audio or no playlist was chosen.
pub fn validate_upload(request: &UploadRequest) -> Result<ValidatedUpload> {
    let metadata = std::fs::metadata(&request.file).map_err(|source| ClientError::Io {
        path: request.file.clone(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ClientError::validation(NOT_AUDIO_MESSAGE));
    }
    let mime =
        audio_mime(&request.file).ok_or_else(|| ClientError::validation(NOT_AUDIO_MESSAGE))?;
    let playlist_id = request
        .playlist_id
        .ok_or_else(|| ClientError::validation(NO_PLAYLIST_MESSAGE))?;

    let name = request
        .name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| default_track_name(&request.file));
    let duration = request
        .duration
        .or_else(|| probe_duration(&request.file))
        .unwrap_or(0.0);
    let file_name = request
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.clone());

    Ok(ValidatedUpload {
        file: request.file.clone(),
        file_name,
        mime,
        playlist_id,
        name,
        duration,
        category_id: request.category_id,
    })
}

impl ApiClient {
    /// Upload `request.file` and append the new track to its playlist.
    ///
    /// After the upload step the track, playlist and detail caches are
    /// invalidated whether or not the append succeeded.
    ///
    /// # Errors
    ///
    /// Fails when local validation fails, the file cannot be read, or the
    /// upload request itself is rejected. Append failures are returned on
    /// the [`UploadOutcome`] instead.
    pub async fn upload_track(&self, request: &UploadRequest) -> Result<UploadOutcome> {
        let upload = validate_upload(request)?;
        let bytes = tokio::fs::read(&upload.file)
            .await
            .map_err(|source| ClientError::Io {
                path: upload.file.clone(),
                source,
            })?;

        let audio = Part::bytes(bytes)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)
            .map_err(|err| ClientError::validation(format!("invalid audio type: {err}")))?;
        let mut form = Form::new()
            .part("audio", audio)
            .text("name", upload.name.clone())
            .text("duration", upload.duration.to_string());
        if let Some(category_id) = upload.category_id {
            form = form.text("categoryId", category_id.to_string());
        }

        tracing::debug!(name = %upload.name, playlist_id = upload.playlist_id, "uploading track");
        let response = self
            .send(self.post(PATH_UPLOAD)?.multipart(form), PATH_UPLOAD)
            .await?;
        let track: Track = self.read_json(response, PATH_UPLOAD).await?;

        let appended = self.add_track_to_playlist(upload.playlist_id, track.id).await;
        let association_error = match appended {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(
                    track_id = track.id,
                    playlist_id = upload.playlist_id,
                    error = %err,
                    "uploaded track could not be added to playlist"
                );
                Some(err)
            }
        };

        self.cache().invalidate(PATH_TRACKS);
        self.cache().invalidate(PATH_PLAYLISTS);
        self.cache().invalidate(&playlist_path(upload.playlist_id));

        Ok(UploadOutcome {
            track,
            playlist_id: upload.playlist_id,
            association_error,
        })
    }
}
