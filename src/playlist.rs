//! Playlist module
//!
//! A playlist is a titled, ordered and fixed sequence of programs. Items are
//! owned by the playlist; callers borrow them back by index or through
//! iteration. Membership is decided by identity, not by value.

use crate::program::{MediaItem, ProgramError, ProgramRecord};
use serde::{Deserialize, Serialize};
use std::slice;
use thiserror::Error;

/// Errors that can occur when building or querying a playlist
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Requested position lies outside the playlist
    #[error("Index {index} out of range for playlist of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// One of the described programs could not be constructed
    #[error("Invalid program: {0}")]
    Program(#[from] ProgramError),

    /// The playlist document is not valid JSON or has the wrong shape
    #[error("Failed to parse playlist: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw playlist document as accepted by `Playlist::from_json`
#[derive(Debug, Deserialize)]
struct PlaylistDocument {
    title: String,
    items: Vec<ProgramRecord>,
}

/// A fixed, ordered collection of programs
#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    /// Display title
    title: String,
    /// Programs in insertion order
    items: Vec<MediaItem>,
}

impl Playlist {
    /// Creates a playlist from the given programs, keeping their order
    ///
    /// # Examples
    ///
    /// ```
    /// use media_playlist::{Movie, Playlist, Series};
    ///
    /// let playlist = Playlist::new(
    ///     "Weekend",
    ///     vec![
    ///         Movie::new("finding nemo", 2003, 100).into(),
    ///         Series::new("the mandalorian", 2019, 2).into(),
    ///     ],
    /// );
    /// assert_eq!(playlist.len(), 2);
    /// ```
    pub fn new(title: impl Into<String>, items: Vec<MediaItem>) -> Self {
        let title = title.into();
        tracing::debug!(title = %title, items = items.len(), "Created playlist");
        Self { title, items }
    }

    /// Builds a playlist from a JSON document
    ///
    /// The document has the form `{"title": "...", "items": [...]}` where each
    /// item is a program record with a `kind` of `"movie"` or `"series"`.
    /// The first record that cannot be turned into a program aborts loading.
    pub fn from_json(json: &str) -> Result<Self, PlaylistError> {
        let document: PlaylistDocument = serde_json::from_str(json)?;

        let items = document
            .items
            .into_iter()
            .map(MediaItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(document.title, items))
    }

    /// Returns the playlist title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of programs
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the playlist holds no programs
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the program at `index`
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::IndexOutOfRange` if `index >= len()`.
    pub fn item_at(&self, index: usize) -> Result<&MediaItem, PlaylistError> {
        self.items.get(index).ok_or(PlaylistError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns all programs in insertion order
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Returns a fresh iterator over the programs
    pub fn iter(&self) -> slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    /// Checks whether `candidate` is one of the programs stored here
    ///
    /// Only the exact instance counts. An equal program living elsewhere is
    /// not a member.
    pub fn contains(&self, candidate: &MediaItem) -> bool {
        self.items.iter().any(|item| std::ptr::eq(item, candidate))
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a MediaItem;
    type IntoIter = slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
