//! Bounded forward search for a food term across upcoming dates.

use crate::date::{Direction, MealDate};
use crate::source::MealSource;
use crate::{parse, Error, Result};

/// Days scanned beyond the start date; the window itself is one longer
/// because the start date is included
pub const DEFAULT_WINDOW_DAYS: u32 = 20;

/// Result list and cursor of one search invocation
///
/// The cursor is unset until a search finds at least one date, and then
/// always points into `results`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    results: Vec<MealDate>,
    cursor: Option<usize>,
}

impl SearchState {
    /// The term this search ran with
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Matching dates, ascending
    pub fn results(&self) -> &[MealDate] {
        &self.results
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Date currently selected by the cursor
    pub fn selected(&self) -> Option<MealDate> {
        self.cursor.map(|i| self.results[i])
    }

    fn shifted(&self, direction: Direction) -> Option<usize> {
        let cursor = self.cursor?;
        match direction {
            Direction::Back => cursor.checked_sub(1),
            Direction::Forward => (cursor + 1 < self.results.len()).then_some(cursor + 1),
        }
    }

    /// Date one step in `direction`, without moving the cursor
    pub fn peek(&self, direction: Direction) -> Option<MealDate> {
        self.shifted(direction).map(|i| self.results[i])
    }

    /// Move the cursor one result in `direction` and return the selected
    /// date, or `None` when the cursor already sits at that end of the
    /// results (the state is left unchanged).
    pub fn step(&mut self, direction: Direction) -> Option<MealDate> {
        let next = self.shifted(direction)?;
        self.cursor = Some(next);
        Some(self.results[next])
    }
}

/// Scan `start ..= start + window_days` for dates whose meal text contains
/// `term`, accumulating matches in ascending date order.
///
/// Every date re-fetches the whole page through `source`; there is no
/// batching and no caching, so a search issues up to `window_days + 1`
/// sequential fetches. A fetch failure skips that date and the scan
/// continues. When anything matched, the cursor selects the earliest date.
pub fn search_window<S: MealSource>(
    source: &S,
    term: &str,
    start: MealDate,
    window_days: u32,
) -> Result<SearchState> {
    let term = term.trim();
    if term.is_empty() {
        return Err(Error::EmptySearchTerm);
    }

    let mut results = Vec::new();
    let mut date = start;
    for _ in 0..=window_days {
        match source.fetch() {
            Ok(page) => {
                if let Some(text) = parse::extract(&page, &date) {
                    if text.contains(term) {
                        results.push(date);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Skipping {}: fetch failed: {}", date, e);
            }
        }
        date = date.step(Direction::Forward);
    }

    tracing::info!(
        "'{}' found on {} of {} dates from {}",
        term,
        results.len(),
        window_days + 1,
        start
    );

    let cursor = if results.is_empty() { None } else { Some(0) };
    Ok(SearchState {
        term: term.to_string(),
        results,
        cursor,
    })
}
