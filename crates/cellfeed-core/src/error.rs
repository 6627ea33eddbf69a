//! Error types for cellfeed-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellfeed-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No cell is indexed at the requested coordinate
    #[error("cell (row {row}, col {col}) not found")]
    CellNotFound { row: u32, col: u32 },

    /// A worksheet summary id does not carry the expected worksheet-feed prefix
    #[error("Invalid worksheet id: {0}")]
    InvalidWorksheetId(String),

    /// A cells-feed id could not be split into spreadsheet and worksheet keys
    #[error("Invalid cells feed id: {0}")]
    InvalidFeedId(String),
}

impl Error {
    /// Whether this error means "no such value" rather than a malformed input
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::CellNotFound { .. })
    }
}
