//! Calendar dates in the meal page's external format.
//!
//! Dates travel as `YYYY.MM.DD` text and address the page's per-day
//! containers through the same digits with the dots removed.

use crate::{Error, Result};
use chrono::{Duration, Local, NaiveDate};
use std::fmt;

/// Direction for single-step navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// A calendar date as the meal page addresses it
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealDate(NaiveDate);

impl MealDate {
    /// Parse user-supplied date text.
    ///
    /// Rejects anything that is not a real calendar date in `YYYY.MM.DD`
    /// form, so no fetch is ever attempted for malformed input.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        NaiveDate::parse_from_str(trimmed, "%Y.%m.%d")
            .map(MealDate)
            .map_err(|_| Error::InvalidDate(trimmed.to_string()))
    }

    /// Today's local date
    pub fn today() -> Self {
        MealDate(Local::now().date_naive())
    }

    /// Digit-only container id: `2024.12.02` -> `20241202`
    pub fn key(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// The date one day back or forward
    pub fn step(&self, direction: Direction) -> Self {
        let delta = match direction {
            Direction::Back => Duration::days(-1),
            Direction::Forward => Duration::days(1),
        };
        MealDate(self.0 + delta)
    }
}

impl fmt::Display for MealDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y.%m.%d"))
    }
}
