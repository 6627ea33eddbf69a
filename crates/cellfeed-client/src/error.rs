//! Error types for the feed client.

use thiserror::Error;

use cellfeed_xml::FeedError;

/// Errors raised by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Other(String),
}

/// Errors that can occur while talking to the feed service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Core(#[from] cellfeed_core::Error),

    #[error("Cell R{row}C{col} has no edit link")]
    MissingEditLink { row: u32, col: u32 },

    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),

    #[error("Invalid update state: {0}")]
    InvalidState(&'static str),
}

impl ClientError {
    /// "No such cell or worksheet", as opposed to a failed request.
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::Core(e) => e.is_not_found(),
            ClientError::WorksheetNotFound(_) => true,
            _ => false,
        }
    }

    /// The request could not be performed or the service refused it.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// The service answered with a document that does not match the feed schema.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Feed(e) if e.is_decode())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_request_failure() {
        let not_found = ClientError::from(cellfeed_core::Error::CellNotFound { row: 1, col: 2 });
        assert!(not_found.is_not_found());
        assert!(!not_found.is_transport());

        let failed = ClientError::from(TransportError::Status {
            status: 404,
            body: String::new(),
        });
        assert!(failed.is_transport());
        assert!(!failed.is_not_found());

        let bad_id = ClientError::from(cellfeed_core::Error::InvalidWorksheetId("x".into()));
        assert!(!bad_id.is_not_found());
    }

    #[test]
    fn test_decode_classification() {
        let err = ClientError::from(FeedError::Decode("bad".into()));
        assert!(err.is_decode());

        let err = ClientError::from(FeedError::Construction("bad".into()));
        assert!(!err.is_decode());
    }
}
