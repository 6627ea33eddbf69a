//! Feed error types

use thiserror::Error;

/// Result type for feed decoding and batch construction
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Errors that can occur while decoding feeds or building batch documents
#[derive(Debug, Error)]
pub enum FeedError {
    /// XML syntax error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Well-formed XML that does not match the expected feed schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// The batch document could not be built
    #[error("Batch construction error: {0}")]
    Construction(String),
}

impl FeedError {
    /// Whether the response was unusable (syntax or schema mismatch)
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            FeedError::Xml(_) | FeedError::Attr(_) | FeedError::Decode(_)
        )
    }

    pub(crate) fn decode<S: Into<String>>(msg: S) -> Self {
        FeedError::Decode(msg.into())
    }

    pub(crate) fn construction<S: Into<String>>(msg: S) -> Self {
        FeedError::Construction(msg.into())
    }
}
