//! Programs: the playable items of a playlist
//!
//! This module provides the shared identity and engagement state of every
//! program, the `Program` capability trait and the two concrete kinds of
//! programs, movies and series. The trait is sealed: `Movie`, `Series` and
//! the `MediaItem` union over both are the only implementors, so a bare
//! program can never be constructed.

mod media_item;
mod movie;
mod record;
mod series;

pub use media_item::MediaItem;
pub use movie::Movie;
pub use record::ProgramRecord;
pub use series::Series;

use crate::title_case::title_case;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while constructing programs
#[derive(Debug, Error)]
pub enum ProgramError {
    /// Attempted to instantiate the abstract program type
    #[error("Cannot instantiate abstract program type '{kind}', use a movie or a series")]
    AbstractInstantiation { kind: String },

    /// A supplied value has the wrong type or is missing
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// State shared by every kind of program
///
/// The name is only reachable through accessors so that it stays title
/// cased. The like counter can only ever grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramCore {
    /// Title-cased name
    name: String,
    /// Release or first air year
    year: i32,
    /// Number of likes received so far
    like_count: u64,
}

impl ProgramCore {
    /// Creates the shared state with zero likes and a normalized name
    pub(crate) fn new(name: &str, year: i32) -> Self {
        Self {
            name: title_case(name),
            year,
            like_count: 0,
        }
    }

    /// Restores a previously recorded like counter
    pub(crate) fn with_like_count(mut self, like_count: u64) -> Self {
        self.like_count = like_count;
        self
    }

    /// Returns the title-cased name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name, normalizing it to title case
    pub fn set_name(&mut self, name: &str) {
        let name = title_case(name);
        tracing::debug!(from = %self.name, to = %name, "Renaming program");
        self.name = name;
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the current like counter
    pub fn like_count(&self) -> u64 {
        self.like_count
    }

    /// Adds a single like
    ///
    /// The counter saturates at `u64::MAX` instead of wrapping back to zero.
    pub fn increment_like(&mut self) {
        self.like_count = self.like_count.saturating_add(1);
        tracing::debug!(name = %self.name, likes = self.like_count, "Program liked");
    }

    /// Renders the description line
    ///
    /// Without a detail this is the base form `"{name} - {year} - {likes} likes"`.
    /// A detail is inserted between the year and the like count.
    pub fn describe(&self, detail: Option<&str>) -> String {
        match detail {
            Some(detail) => format!(
                "{} - {} - {} - {} likes",
                self.name, self.year, detail, self.like_count
            ),
            None => format!("{} - {} - {} likes", self.name, self.year, self.like_count),
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Common contract of all playable programs
///
/// Implementors only provide access to their `ProgramCore` and their own
/// `describe`; everything else is shared.
pub trait Program: private::Sealed {
    /// Shared program state
    fn core(&self) -> &ProgramCore;

    /// Mutable shared program state
    fn core_mut(&mut self) -> &mut ProgramCore;

    /// Human readable one-line description including medium-specific fields
    fn describe(&self) -> String;

    /// Returns the title-cased name
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Replaces the name, normalizing it to title case
    fn set_name(&mut self, name: &str) {
        self.core_mut().set_name(name);
    }

    /// Returns the release or first air year
    fn year(&self) -> i32 {
        self.core().year()
    }

    /// Returns the current like counter
    fn like_count(&self) -> u64 {
        self.core().like_count()
    }

    /// Adds a single like
    fn increment_like(&mut self) {
        self.core_mut().increment_like();
    }
}
