//! Session state and the operations the user-facing surface drives.
//!
//! One session owns the preferences, the meal source, the currently
//! displayed date, and the navigation mode. While a search is active its
//! result list takes over the ± controls; any direct date query drops back
//! to plain day stepping.

use crate::annotate;
use crate::date::{Direction, MealDate};
use crate::parse;
use crate::search::{self, SearchState, DEFAULT_WINDOW_DAYS};
use crate::source::MealSource;
use crate::types::{MenuView, Preferences};
use crate::Result;

/// Whether ± navigation steps by day or through search results
#[derive(Clone, Debug, Default)]
pub enum NavigationMode {
    #[default]
    Plain,
    Searching(SearchState),
}

/// Outcome of a ± step
#[derive(Clone, Debug)]
pub enum StepOutcome {
    /// A new date was selected and rendered
    Moved(MenuView),
    /// Search navigation had no further result in that direction
    AtBoundary,
}

/// Outcome of a food-term search
#[derive(Clone, Debug)]
pub enum FindOutcome {
    /// At least one date matched; the earliest is selected and rendered
    Found { count: usize, view: MenuView },
    /// No date in the window matched
    NotFound,
}

/// One user's meal lookup session
///
/// Every operation is a blocking call that completes before returning, and
/// a failed operation leaves the current date and navigation mode as they
/// were.
pub struct MealSession<S: MealSource> {
    source: S,
    prefs: Preferences,
    current: MealDate,
    mode: NavigationMode,
    window_days: u32,
}

impl<S: MealSource> MealSession<S> {
    pub fn new(source: S, prefs: Preferences, start: MealDate) -> Self {
        Self {
            source,
            prefs,
            current: start,
            mode: NavigationMode::Plain,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Override the search window length (days beyond the start date)
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    pub fn current_date(&self) -> MealDate {
        self.current
    }

    pub fn mode(&self) -> &NavigationMode {
        &self.mode
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Display the menu for user-supplied date text.
    ///
    /// A direct date query always leaves search navigation. Malformed dates
    /// fail before any fetch.
    pub fn view(&mut self, date_text: &str) -> Result<MenuView> {
        let date = MealDate::parse(date_text)?;
        self.view_date(date)
    }

    /// Display the menu for an already-validated date, clearing any active
    /// search
    pub fn view_date(&mut self, date: MealDate) -> Result<MenuView> {
        let view = self.render(date)?;
        self.mode = NavigationMode::Plain;
        self.current = date;
        Ok(view)
    }

    /// Step one unit in `direction`: through the search results while a
    /// search is active, by one day otherwise
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome> {
        let target = match &self.mode {
            NavigationMode::Searching(state) => match state.peek(direction) {
                Some(date) => date,
                None => return Ok(StepOutcome::AtBoundary),
            },
            NavigationMode::Plain => self.current.step(direction),
        };

        let view = self.render(target)?;

        // Commit the cursor move only now that the fetch has succeeded
        if let NavigationMode::Searching(state) = &mut self.mode {
            state.step(direction);
        }
        self.current = target;
        Ok(StepOutcome::Moved(view))
    }

    /// Search the forward window for `term` and, on a hit, jump to the
    /// earliest matching date.
    ///
    /// A search with no matches clears any previous search, so ± falls back
    /// to day stepping.
    pub fn find(&mut self, term: &str) -> Result<FindOutcome> {
        let state = search::search_window(&self.source, term, self.current, self.window_days)?;

        let Some(date) = state.selected() else {
            self.mode = NavigationMode::Plain;
            return Ok(FindOutcome::NotFound);
        };

        let count = state.results().len();
        let view = self.render(date)?;
        self.mode = NavigationMode::Searching(state);
        self.current = date;
        Ok(FindOutcome::Found { count, view })
    }

    /// Fetch, extract, and annotate one date's menu
    fn render(&self, date: MealDate) -> Result<MenuView> {
        let page = self.source.fetch()?;
        let menu = parse::extract(&page, &date).map(|text| annotate::annotate(&text, &self.prefs));
        if menu.is_none() {
            tracing::debug!("No meal information for {}", date);
        }
        Ok(MenuView { date, menu })
    }
}
