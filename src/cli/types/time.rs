//! Season and calendar date types.

use crate::error::{MlbError, Result};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Earliest season the standings and stats views accept.
const FIRST_SEASON: u16 = 1876;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The `count` most recent seasons, newest first, ending at `self`.
    pub fn recent(self, count: u16) -> Vec<Season> {
        (0..count)
            .filter_map(|i| self.0.checked_sub(i))
            .filter(|y| *y >= FIRST_SEASON)
            .map(Season)
            .collect()
    }
}

impl Default for Season {
    /// The current calendar year.
    fn default() -> Self {
        Self(Utc::now().year() as u16)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = MlbError;

    fn from_str(s: &str) -> Result<Self> {
        let year: u16 = s.trim().parse().map_err(|_| MlbError::InvalidSeason {
            value: s.to_string(),
        })?;
        if year < FIRST_SEASON {
            return Err(MlbError::InvalidSeason {
                value: s.to_string(),
            });
        }
        Ok(Self(year))
    }
}

/// Calendar day used by the schedule endpoint (`date=YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GameDate {
    type Err = MlbError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| MlbError::InvalidDate {
                value: s.to_string(),
            })
    }
}
