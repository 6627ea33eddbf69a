//! # cellfeed-core
//!
//! Core data structures for the cellfeed spreadsheet feed client.
//!
//! This crate provides the in-memory mirror of the remote feed documents and the
//! structures derived from them:
//! - [`Spreadsheet`], [`WorksheetSummary`] - a spreadsheet's worksheet listing
//! - [`Worksheet`], [`Cell`], [`Link`] - a worksheet's cells feed
//! - [`CellIndex`] - column → row lookup over a worksheet's flat cell list
//! - [`PendingEdit`] - a cell change waiting to be sent in a batch
//! - [`BatchResponse`] - per-entry outcome of a submitted batch
//!
//! ## Example
//!
//! ```rust
//! use cellfeed_core::{Cell, Worksheet};
//!
//! let sheet = Worksheet::new(
//!     "https://spreadsheets.google.com/feeds/cells/abc/od6/private/full",
//!     10,
//!     2,
//!     Vec::new(),
//!     vec![Cell::new(1, 1, "Name"), Cell::new(2, 1, "Ada")],
//! );
//!
//! let col = sheet.column_by_header("Name").unwrap();
//! assert_eq!(sheet.get(col, 2).unwrap().input_value, "Ada");
//! assert!(sheet.get(2, 2).is_none());
//! ```

pub mod batch;
pub mod cell;
pub mod edit;
pub mod error;
pub mod feed_id;
pub mod index;
pub mod spreadsheet;
pub mod worksheet;

// Re-exports for convenience
pub use batch::{BatchEntryResult, BatchResponse};
pub use cell::{find_href, Cell, Link, REL_EDIT, REL_SELF};
pub use edit::PendingEdit;
pub use error::{Error, Result};
pub use feed_id::{parse_cells_feed_id, worksheet_key, DEFAULT_FEED_BASE};
pub use index::{CellIndex, HEADER_ROW};
pub use spreadsheet::{Spreadsheet, WorksheetSummary};
pub use worksheet::Worksheet;
