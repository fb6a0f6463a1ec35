//! Closed union over every concrete kind of program

use super::{Movie, Program, ProgramCore, Series, private};
use serde::Serialize;
use std::fmt;

/// Any concrete program
///
/// This is what collections store when they need to hold movies and series
/// side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaItem {
    /// A movie
    Movie(Movie),
    /// A series
    Series(Series),
}

impl MediaItem {
    /// Returns the movie if this item is one
    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            MediaItem::Movie(movie) => Some(movie),
            MediaItem::Series(_) => None,
        }
    }

    /// Returns the series if this item is one
    pub fn as_series(&self) -> Option<&Series> {
        match self {
            MediaItem::Series(series) => Some(series),
            MediaItem::Movie(_) => None,
        }
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<Series> for MediaItem {
    fn from(series: Series) -> Self {
        MediaItem::Series(series)
    }
}

impl private::Sealed for MediaItem {}

impl Program for MediaItem {
    fn core(&self) -> &ProgramCore {
        match self {
            MediaItem::Movie(movie) => movie.core(),
            MediaItem::Series(series) => series.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ProgramCore {
        match self {
            MediaItem::Movie(movie) => movie.core_mut(),
            MediaItem::Series(series) => series.core_mut(),
        }
    }

    fn describe(&self) -> String {
        match self {
            MediaItem::Movie(movie) => movie.describe(),
            MediaItem::Series(series) => series.describe(),
        }
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
