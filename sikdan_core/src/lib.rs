#![forbid(unsafe_code)]

//! Core lookup, parsing, and annotation logic for the sikdan meal viewer.
//!
//! This crate provides:
//! - Fetching the school's multi-day meal page (`source`)
//! - Per-day text extraction from the page markup (`markup`, `parse`)
//! - Annotation against favorite foods and allergen codes (`annotate`)
//! - Date arithmetic and bounded forward search (`date`, `search`)
//! - The session object driving stateful navigation (`session`)

pub mod allergens;
pub mod annotate;
pub mod config;
pub mod date;
pub mod error;
pub mod logging;
pub mod markup;
pub mod parse;
pub mod search;
pub mod session;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use allergens::AllergenCode;
pub use annotate::annotate;
pub use config::Config;
pub use date::{Direction, MealDate};
pub use error::{Error, Result};
pub use parse::extract;
pub use search::{search_window, SearchState, DEFAULT_WINDOW_DAYS};
pub use session::{FindOutcome, MealSession, NavigationMode, StepOutcome};
pub use source::{HttpMealSource, MealSource, DEFAULT_FETCH_TIMEOUT};
pub use types::{AnnotatedLine, AnnotatedMenu, MenuView, Preferences};
