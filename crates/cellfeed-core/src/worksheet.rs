//! Worksheet (cells feed) with its derived cell index

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::cell::{find_href, Cell, Link};
use crate::error::{Error, Result};
use crate::feed_id::parse_cells_feed_id;
use crate::index::CellIndex;

/// A worksheet's cells as returned by one fetch of its cells feed
///
/// The cell index is built when the worksheet is constructed and never changes; a fresh
/// fetch produces a fresh worksheet.
#[derive(Debug, Clone)]
pub struct Worksheet {
    id: String,
    row_count: u32,
    col_count: u32,
    links: Vec<Link>,
    index: CellIndex,
}

impl Worksheet {
    /// Create a worksheet and index its cells
    pub fn new(
        id: impl Into<String>,
        row_count: u32,
        col_count: u32,
        links: Vec<Link>,
        cells: Vec<Cell>,
    ) -> Self {
        Self {
            id: id.into(),
            row_count,
            col_count,
            links,
            index: CellIndex::build(cells),
        }
    }

    /// Cells feed URL identifying this worksheet
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Number of columns
    pub fn col_count(&self) -> u32 {
        self.col_count
    }

    /// Feed-level links
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Target of the first feed-level link with relation `rel`
    pub fn link(&self, rel: &str) -> Option<&str> {
        find_href(&self.links, rel)
    }

    /// Cells in feed order
    pub fn cells(&self) -> &[Cell] {
        self.index.cells()
    }

    /// The derived cell index
    pub fn index(&self) -> &CellIndex {
        &self.index
    }

    /// Cell at `(col, row)`, if present
    ///
    /// Column comes first here; [`Worksheet::cell`] takes `(row, col)`.
    pub fn get(&self, col: u32, row: u32) -> Option<&Cell> {
        self.index.lookup(col, row)
    }

    /// Cell at `(row, col)`, or [`Error::CellNotFound`]
    pub fn cell(&self, row: u32, col: u32) -> Result<&Cell> {
        self.index
            .lookup(col, row)
            .ok_or(Error::CellNotFound { row, col })
    }

    /// Column whose header cell (row 1) has exactly `title` as its input value
    ///
    /// See [`CellIndex::column_by_header`] for the duplicate-header caveat.
    pub fn column_by_header(&self, title: &str) -> Option<u32> {
        self.index.column_by_header(title)
    }

    /// Worksheet key embedded in the feed id
    pub fn worksheet_key(&self) -> Result<&str> {
        parse_cells_feed_id(&self.id).map(|(_, worksheet)| worksheet)
    }

    /// Spreadsheet key embedded in the feed id
    pub fn spreadsheet_key(&self) -> Result<&str> {
        parse_cells_feed_id(&self.id).map(|(spreadsheet, _)| spreadsheet)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Worksheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Worksheet", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("row_count", &self.row_count)?;
        state.serialize_field("col_count", &self.col_count)?;
        state.serialize_field("links", &self.links)?;
        state.serialize_field("cells", self.cells())?;
        state.end()
    }
}
