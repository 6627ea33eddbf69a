//! Spreadsheet listing (worksheets feed)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::{find_href, Link};

/// Summary of one worksheet as listed in a spreadsheet's worksheets feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorksheetSummary {
    /// Canonical feed URL identifying the worksheet
    pub id: String,
    /// Worksheet title (not guaranteed unique)
    pub title: String,
    /// Number of rows
    pub row_count: u32,
    /// Number of columns
    pub col_count: u32,
    /// Links keyed by relation type
    pub links: Vec<Link>,
}

impl WorksheetSummary {
    /// Target of the first link with relation `rel`
    pub fn link(&self, rel: &str) -> Option<&str> {
        find_href(&self.links, rel)
    }
}

/// A spreadsheet and its worksheet summaries, in feed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spreadsheet {
    /// Spreadsheet title
    pub title: String,
    /// Worksheet summaries
    pub worksheets: Vec<WorksheetSummary>,
}

impl Spreadsheet {
    /// First worksheet whose title equals `title`
    pub fn worksheet_by_title(&self, title: &str) -> Option<&WorksheetSummary> {
        self.worksheets.iter().find(|ws| ws.title == title)
    }

    /// Id of the first worksheet whose title equals `title`
    pub fn worksheet_id_by_title(&self, title: &str) -> Option<&str> {
        self.worksheet_by_title(title).map(|ws| ws.id.as_str())
    }

    /// Number of worksheets
    pub fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }
}
