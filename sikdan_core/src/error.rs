//! Error types for the sikdan_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sikdan_core operations
///
/// The `Display` text of the user-input and transport variants is shown
/// verbatim by the CLI, so those carry the Korean user-facing wording.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Network failure, timeout, or non-success HTTP status while fetching
    /// the meal page
    #[error("오류 발생: {0}")]
    Transport(#[from] reqwest::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Date text that does not parse as a valid YYYY.MM.DD date
    #[error("날짜 형식이 잘못됨: {0}")]
    InvalidDate(String),

    /// A search was requested with an empty term
    #[error("검색어를 입력하세요")]
    EmptySearchTerm,

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
