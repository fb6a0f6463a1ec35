//! Movies

use super::{Program, ProgramCore, private};
use serde::Serialize;
use std::fmt;

/// A movie with a fixed running time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    #[serde(flatten)]
    core: ProgramCore,
    /// Running time in minutes
    duration_minutes: u32,
}

impl Movie {
    /// Creates a movie with zero likes
    ///
    /// # Examples
    ///
    /// ```
    /// use media_playlist::{Movie, Program};
    ///
    /// let mut movie = Movie::new("finding nemo", 2003, 100);
    /// movie.increment_like();
    /// assert_eq!(movie.describe(), "Finding Nemo - 2003 - 100 min - 1 likes");
    /// ```
    pub fn new(name: &str, year: i32, duration_minutes: u32) -> Self {
        Self::from_core(ProgramCore::new(name, year), duration_minutes)
    }

    pub(crate) fn from_core(core: ProgramCore, duration_minutes: u32) -> Self {
        tracing::debug!(name = %core.name(), year = core.year(), duration_minutes, "Created movie");
        Self {
            core,
            duration_minutes,
        }
    }

    /// Returns the running time in minutes
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

impl private::Sealed for Movie {}

impl Program for Movie {
    fn core(&self) -> &ProgramCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ProgramCore {
        &mut self.core
    }

    fn describe(&self) -> String {
        self.core
            .describe(Some(format!("{} min", self.duration_minutes).as_str()))
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_name_is_title_cased() {
        let movie = Movie::new("todo mundo em pânico", 1999, 120);
        assert_eq!(movie.name(), "Todo Mundo Em Pânico");
        assert_eq!(movie.year(), 1999);
        assert_eq!(movie.duration_minutes(), 120);
        assert_eq!(movie.like_count(), 0);
    }

    #[test]
    fn test_movie_describe() {
        let mut movie = Movie::new("Finding Nemo", 2003, 100);
        movie.increment_like();
        assert_eq!(movie.describe(), "Finding Nemo - 2003 - 100 min - 1 likes");
        assert_eq!(movie.to_string(), movie.describe());
    }

    #[test]
    fn test_movie_rename_keeps_duration() {
        let mut movie = Movie::new("Finding Nemo", 2003, 100);
        movie.set_name("finding dory");
        assert_eq!(movie.name(), "Finding Dory");
        assert_eq!(movie.duration_minutes(), 100);
    }
}
