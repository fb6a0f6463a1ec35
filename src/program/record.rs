//! Loosely typed program descriptions
//!
//! A `ProgramRecord` mirrors the JSON shape produced when a `MediaItem` is
//! serialized. Fields are loosely typed; conversion into a `MediaItem` goes
//! through the regular constructors and reports the first unusable field.

use super::{MediaItem, Movie, ProgramCore, ProgramError, Series};
use serde::Deserialize;
use serde_json::Value;

/// A single program as found in a JSON document
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramRecord {
    /// Program kind, `"movie"` or `"series"`
    pub kind: String,
    /// Program name, expected to be a JSON string
    pub name: Value,
    /// Release or first air year
    pub year: i32,
    /// Running time, required for movies
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Number of seasons, required for series
    #[serde(default)]
    pub season_count: Option<u32>,
    /// Previously recorded likes
    #[serde(default)]
    pub like_count: u64,
}

impl TryFrom<ProgramRecord> for MediaItem {
    type Error = ProgramError;

    fn try_from(record: ProgramRecord) -> Result<Self, Self::Error> {
        tracing::trace!(kind = %record.kind, "Converting program record");

        let kind = record.kind.to_lowercase();
        if kind == "program" {
            return Err(ProgramError::AbstractInstantiation { kind: record.kind });
        }

        let name = match &record.name {
            Value::String(name) => name.as_str(),
            other => {
                return Err(ProgramError::InvalidInput(format!(
                    "name must be text, got {}",
                    other
                )));
            }
        };

        let core = ProgramCore::new(name, record.year).with_like_count(record.like_count);

        match kind.as_str() {
            "movie" => {
                let duration = record.duration_minutes.ok_or_else(|| {
                    ProgramError::InvalidInput(format!(
                        "movie '{}' is missing duration_minutes",
                        core.name()
                    ))
                })?;
                Ok(MediaItem::Movie(Movie::from_core(core, duration)))
            }
            "series" => {
                let seasons = record.season_count.ok_or_else(|| {
                    ProgramError::InvalidInput(format!(
                        "series '{}' is missing season_count",
                        core.name()
                    ))
                })?;
                Ok(MediaItem::Series(Series::from_core(core, seasons)))
            }
            _ => Err(ProgramError::InvalidInput(format!(
                "unknown program kind '{}'",
                record.kind
            ))),
        }
    }
}
