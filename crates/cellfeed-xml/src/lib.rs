//! # cellfeed-xml
//!
//! Feed document decoding and batch update construction for cellfeed.
//!
//! - [`decode`] turns worksheets feeds, cells feeds, single cell entries and batch
//!   responses into `cellfeed-core` records.
//! - [`batch`] renders pending cell edits into the batch feed the service accepts.

pub mod batch;
pub mod decode;
pub mod error;

pub use batch::{build_batch_feed, BATCH_CONTENT_TYPE};
pub use decode::{decode_batch_response, decode_cell, decode_spreadsheet, decode_worksheet};
pub use error::{FeedError, FeedResult};

/// Atom namespace (default namespace of every feed)
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Batch operations namespace
pub const BATCH_NS: &str = "http://schemas.google.com/gdata/batch";

/// Spreadsheet-specific namespace (`gs:` elements)
pub const SPREADSHEET_NS: &str = "http://schemas.google.com/spreadsheets/2006";
