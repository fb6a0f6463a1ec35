//! Media Playlist - A small catalogue of movies and series
//!
//! This library models playable programs (movies and series) that carry a
//! title-cased name, a year and a like counter, and groups them into fixed,
//! ordered playlists that can be indexed, iterated and queried for membership.

mod playlist;
mod program;
mod title_case;

pub use playlist::{Playlist, PlaylistError};
pub use program::{
    MediaItem, Movie, Program, ProgramCore, ProgramError, ProgramRecord, Series,
};
pub use title_case::title_case;

use thiserror::Error;

/// Top-level error type for media playlist operations
#[derive(Debug, Error)]
pub enum MediaPlaylistError {
    /// Error while building or querying a playlist
    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    /// Failed to render a playlist as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a playlist for console output
///
/// The first line states the playlist size, followed by one description line
/// per program in playlist order.
///
/// # Examples
///
/// ```
/// use media_playlist::{Movie, Playlist, render_playlist};
///
/// let playlist = Playlist::new("Weekend", vec![Movie::new("up", 2009, 96).into()]);
/// assert_eq!(
///     render_playlist(&playlist),
///     "Weekend: 1 program(s)\nUp - 2009 - 96 min - 0 likes\n"
/// );
/// ```
pub fn render_playlist(playlist: &Playlist) -> String {
    let mut output = format!("{}: {} program(s)\n", playlist.title(), playlist.len());

    for item in playlist {
        output.push_str(&item.describe());
        output.push('\n');
    }

    output
}

/// Renders a playlist as pretty-printed JSON
pub fn playlist_to_json(playlist: &Playlist) -> Result<String, MediaPlaylistError> {
    Ok(serde_json::to_string_pretty(playlist)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_playlist_lists_every_item() {
        let mut series = Series::new("the mandalorian", 2019, 2);
        series.increment_like();
        let playlist = Playlist::new(
            "Weekend",
            vec![Movie::new("finding nemo", 2003, 100).into(), series.into()],
        );

        assert_eq!(
            render_playlist(&playlist),
            "Weekend: 2 program(s)\n\
             Finding Nemo - 2003 - 100 min - 0 likes\n\
             The Mandalorian - 2019 - 2 seasons - 1 likes\n"
        );
    }

    #[test]
    fn test_playlist_to_json_contains_items() {
        let playlist = Playlist::new("Solo", vec![Series::new("dark", 2017, 3).into()]);
        let json = playlist_to_json(&playlist).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Solo");
        assert_eq!(value["items"][0]["kind"], "series");
        assert_eq!(value["items"][0]["season_count"], 3);
    }

    #[test]
    fn test_program_errors_surface_through_playlist() {
        let error: MediaPlaylistError = Playlist::from_json(
            r#"{"title": "Bad", "items": [{"kind": "program", "name": "x", "year": 1}]}"#,
        )
        .unwrap_err()
        .into();

        assert!(matches!(
            error,
            MediaPlaylistError::Playlist(PlaylistError::Program(
                ProgramError::AbstractInstantiation { .. }
            ))
        ));
    }

    #[test]
    fn test_errors_convert_to_top_level() {
        let error: MediaPlaylistError = PlaylistError::IndexOutOfRange { index: 9, len: 1 }.into();
        assert_eq!(
            error.to_string(),
            "Playlist error: Index 9 out of range for playlist of length 1"
        );
    }
}
