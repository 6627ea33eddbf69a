//! Client configuration.

use crate::endpoints::FeedEndpoints;

/// What to do when a cell comes back without an `edit` link.
///
/// Without the link the service rejects the update, so `Reject` fails early. `Submit`
/// sends the batch anyway with an empty `href` and leaves the verdict to the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingEditLinkPolicy {
    #[default]
    Submit,
    Reject,
}

/// Configuration for [`SheetsClient`](crate::client::SheetsClient).
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Feed URL templates. Default: the public spreadsheets feed service.
    pub endpoints: FeedEndpoints,
    /// Handling of cells without an edit link. Default: [`MissingEditLinkPolicy::Submit`].
    pub missing_edit_link: MissingEditLinkPolicy,
}

impl ClientConfig {
    pub fn with_feed_base(mut self, base: impl Into<String>) -> Self {
        self.endpoints = FeedEndpoints::new(base);
        self
    }

    pub fn with_missing_edit_link(mut self, policy: MissingEditLinkPolicy) -> Self {
        self.missing_edit_link = policy;
        self
    }
}
