//! Column/row lookup over a worksheet's flat cell list
//!
//! The feed returns cells as a flat, unordered list of entries. [`CellIndex`] keeps that
//! list untouched and adds a two-level map `column → row → position` so a coordinate can
//! be resolved in constant time.
//!
//! Structure: `AHashMap<col, AHashMap<row, usize>>`, where the value is a position in
//! the flat list. The index is built once and never mutated afterwards.

use ahash::AHashMap;

use crate::cell::Cell;

/// Row that holds column headers
pub const HEADER_ROW: u32 = 1;

/// Read-only index over a worksheet's cells
#[derive(Debug, Clone, Default)]
pub struct CellIndex {
    /// Cells in feed order, duplicates included
    cells: Vec<Cell>,
    /// Column → row → position in `cells`
    columns: AHashMap<u32, AHashMap<u32, usize>>,
}

impl CellIndex {
    /// Build the index in a single pass over `cells`.
    ///
    /// When two records share a coordinate, the later one wins.
    pub fn build(cells: Vec<Cell>) -> Self {
        let mut columns: AHashMap<u32, AHashMap<u32, usize>> = AHashMap::new();
        for (position, cell) in cells.iter().enumerate() {
            columns
                .entry(cell.col)
                .or_default()
                .insert(cell.row, position);
        }
        Self { cells, columns }
    }

    /// Look up the cell at `(col, row)`.
    ///
    /// `None` is the normal answer for coordinates outside the used range.
    pub fn lookup(&self, col: u32, row: u32) -> Option<&Cell> {
        let position = *self.columns.get(&col)?.get(&row)?;
        self.cells.get(position)
    }

    /// Find a column whose header cell (row 1) has exactly `title` as its input value.
    ///
    /// Columns without a header cell are skipped. Columns are visited in no particular
    /// order: if several columns carry the same header, which one is returned is
    /// implementation-defined.
    pub fn column_by_header(&self, title: &str) -> Option<u32> {
        self.columns.iter().find_map(|(&col, rows)| {
            let header = self.cells.get(*rows.get(&HEADER_ROW)?)?;
            (header.input_value == title).then_some(col)
        })
    }

    /// The flat cell list in feed order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of records in the flat list (duplicates counted)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Indexed column numbers, in no particular order
    pub fn columns(&self) -> impl Iterator<Item = u32> + '_ {
        self.columns.keys().copied()
    }

    /// Number of distinct coordinates
    pub fn distinct_len(&self) -> usize {
        self.columns.values().map(|rows| rows.len()).sum()
    }
}
