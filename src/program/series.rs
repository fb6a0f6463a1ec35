//! Series

use super::{Program, ProgramCore, private};
use serde::Serialize;
use std::fmt;

/// A TV series with a fixed number of seasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    #[serde(flatten)]
    core: ProgramCore,
    /// Number of seasons aired
    season_count: u32,
}

impl Series {
    /// Creates a series with zero likes
    pub fn new(name: &str, year: i32, season_count: u32) -> Self {
        Self::from_core(ProgramCore::new(name, year), season_count)
    }

    pub(crate) fn from_core(core: ProgramCore, season_count: u32) -> Self {
        tracing::debug!(name = %core.name(), year = core.year(), season_count, "Created series");
        Self { core, season_count }
    }

    /// Returns the number of seasons
    pub fn season_count(&self) -> u32 {
        self.season_count
    }
}

impl private::Sealed for Series {}

impl Program for Series {
    fn core(&self) -> &ProgramCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ProgramCore {
        &mut self.core
    }

    fn describe(&self) -> String {
        self.core
            .describe(Some(format!("{} seasons", self.season_count).as_str()))
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_name_is_title_cased() {
        let series = Series::new("the mandalorian", 2019, 2);
        assert_eq!(series.name(), "The Mandalorian");
        assert_eq!(series.season_count(), 2);
    }

    #[test]
    fn test_series_describe() {
        let mut series = Series::new("The Mandalorian", 2019, 2);
        series.increment_like();
        series.increment_like();
        assert_eq!(
            series.describe(),
            "The Mandalorian - 2019 - 2 seasons - 2 likes"
        );
    }

    #[test]
    fn test_series_likes_accumulate() {
        let mut series = Series::new("Daredevil", 2015, 3);
        for _ in 0..42 {
            series.increment_like();
        }
        assert_eq!(series.like_count(), 42);
        assert_eq!(series.to_string(), "Daredevil - 2015 - 3 seasons - 42 likes");
    }
}
