//! Errors raised by the pagination client and the command handlers.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a single command can fail with. The command loop prints
/// these as one line and re-prompts; none of them are fatal.
#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not decode page from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("you're on the first page")]
    NoPreviousPage,

    #[error("you're on the last page")]
    EndOfCatalog,

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for library operations.
pub type PokedexResult<T> = Result<T, PokedexError>;

impl PokedexError {
    /// Navigation errors are the user's doing; everything else came from
    /// the wire or the terminal.
    pub fn is_navigation(&self) -> bool {
        matches!(self, PokedexError::NoPreviousPage | PokedexError::EndOfCatalog)
    }
}
