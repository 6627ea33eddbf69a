//! Feed URL templates.

use cellfeed_core::DEFAULT_FEED_BASE;

/// Builds the feed URLs for spreadsheets, worksheets and cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEndpoints {
    base: String,
}

impl FeedEndpoints {
    /// Endpoints rooted at `base` (e.g. `https://spreadsheets.google.com/feeds`).
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/worksheets/{spreadsheet}/private/full`
    pub fn worksheets(&self, spreadsheet_id: &str) -> String {
        format!("{}/worksheets/{}/private/full", self.base, spreadsheet_id)
    }

    /// `{base}/cells/{spreadsheet}/{worksheet}/private/full`
    pub fn cells(&self, spreadsheet_id: &str, worksheet_id: &str) -> String {
        format!(
            "{}/cells/{}/{}/private/full",
            self.base, spreadsheet_id, worksheet_id
        )
    }

    /// `{base}/cells/{spreadsheet}/{worksheet}/private/full/R{row}C{col}`
    pub fn cell(&self, spreadsheet_id: &str, worksheet_id: &str, row: u32, col: u32) -> String {
        format!("{}/R{}C{}", self.cells(spreadsheet_id, worksheet_id), row, col)
    }

    /// `{base}/cells/{spreadsheet}/{worksheet}/private/full/batch`
    pub fn batch(&self, spreadsheet_id: &str, worksheet_id: &str) -> String {
        format!("{}/batch", self.cells(spreadsheet_id, worksheet_id))
    }
}

impl Default for FeedEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_BASE)
    }
}
