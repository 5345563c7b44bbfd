//! Name checks for creating playlists and categories.

use std::fmt;

use vault_api_models::{ColorPreset, IconPreset, NewCategory, NewPlaylist};

/// Client-side rejection of a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    /// Playlist name was blank.
    MissingPlaylistName,
    /// Category name was blank.
    MissingCategoryName,
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingPlaylistName => "Please enter a playlist name",
            Self::MissingCategoryName => "Please enter a category name",
        })
    }
}

impl std::error::Error for CreateError {}

/// Build a playlist request, keeping the name exactly as typed.
///
/// # Errors
/// Returns [`CreateError::MissingPlaylistName`] when the name is blank.
pub fn new_playlist(
    name: &str,
    color: Option<ColorPreset>,
    icon: Option<IconPreset>,
) -> Result<NewPlaylist, CreateError> {
    if name.trim().is_empty() {
        return Err(CreateError::MissingPlaylistName);
    }
    let mut request = NewPlaylist::named(name);
    if let Some(color) = color {
        request.color = color.code().to_string();
    }
    if let Some(icon) = icon {
        request.icon = icon.code().to_string();
    }
    Ok(request)
}

/// Build a category request, keeping the name exactly as typed.
///
/// # Errors
/// Returns [`CreateError::MissingCategoryName`] when the name is blank.
pub fn new_category(
    name: &str,
    color: Option<ColorPreset>,
    icon: Option<IconPreset>,
) -> Result<NewCategory, CreateError> {
    if name.trim().is_empty() {
        return Err(CreateError::MissingCategoryName);
    }
    let mut request = NewCategory::named(name);
    if let Some(color) = color {
        request.color = color.code().to_string();
    }
    if let Some(icon) = icon {
        request.icon = icon.code().to_string();
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected_with_form_messages() {
        let err = new_playlist("  ", None, None).expect_err("blank playlist");
        assert_eq!(err.to_string(), "Please enter a playlist name");
        let err = new_category("", None, None).expect_err("blank category");
        assert_eq!(err.to_string(), "Please enter a category name");
    }

    #[test]
    fn defaults_apply_and_name_is_untrimmed() {
        let request = new_playlist(" Demos ", None, None).expect("valid");
        assert_eq!(request.name, " Demos ");
        assert_eq!(request.color, "#1DB954");
        assert_eq!(request.icon, "ri-music-fill");
    }

    #[test]
    fn presets_override_defaults() {
        let request = new_category("Voice", Some(ColorPreset::Orange), Some(IconPreset::Album))
            .expect("valid");
        assert_eq!(request.color, "#FF5722");
        assert_eq!(request.icon, "ri-album-fill");
    }
}
