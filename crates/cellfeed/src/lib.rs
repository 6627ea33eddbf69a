//! # cellfeed
//!
//! A Rust client for spreadsheets exposed as Atom/XML feeds.
//!
//! ## Features
//!
//! - Fetch a spreadsheet's worksheet listing
//! - Fetch a worksheet's cells and look them up by coordinate or by column header
//! - Fetch single cells
//! - Update one or many cells through batch feeds
//!
//! ## Example
//!
//! ```rust
//! use cellfeed::prelude::*;
//!
//! // Index a cells feed
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"
//!                    xmlns:gs="http://schemas.google.com/spreadsheets/2006">
//!   <id>https://spreadsheets.google.com/feeds/cells/abc/od6/private/full</id>
//!   <entry><gs:cell row="1" col="1" inputValue="Name"/></entry>
//!   <entry><gs:cell row="2" col="1" inputValue="Ada"/></entry>
//! </feed>"#;
//! let sheet = decode_worksheet(xml).unwrap();
//! let col = sheet.column_by_header("Name").unwrap();
//! assert_eq!(sheet.get(col, 2).unwrap().input_value, "Ada");
//!
//! // Build the batch document that would update A2
//! let body = build_batch_feed(sheet.id(), &[PendingEdit::new(2, col, "Grace", "")]).unwrap();
//! assert!(body.contains(r#"inputValue="Grace""#));
//! ```

pub mod prelude;

// Re-export core types
pub use cellfeed_core::{
    find_href, parse_cells_feed_id, worksheet_key, BatchEntryResult, BatchResponse, Cell,
    CellIndex, Link, PendingEdit, Spreadsheet, Worksheet, WorksheetSummary, DEFAULT_FEED_BASE,
    HEADER_ROW, REL_EDIT, REL_SELF,
};

// Core error type, renamed so it does not clash with the client error
pub use cellfeed_core::Error as CoreError;

// Re-export XML types
pub use cellfeed_xml::{
    build_batch_feed, decode_batch_response, decode_cell, decode_spreadsheet, decode_worksheet,
    FeedError, FeedResult, BATCH_CONTENT_TYPE,
};

// Re-export client types
pub use cellfeed_client::{
    CellHandle, CellUpdate, ClientConfig, ClientError, FeedEndpoints, HttpResponse,
    MissingEditLinkPolicy, ReqwestTransport, Result, SheetsClient, SpreadsheetHandle, Transport,
    TransportConfig, TransportError, UpdateState, WorksheetHandle,
};
