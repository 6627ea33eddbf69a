//! Blocking client for spreadsheet cell feeds.
//!
//! The client fetches spreadsheets (worksheets feeds), worksheets (cells feeds) and
//! single cells, and pushes cell updates back as batch feeds.
//!
//! # Architecture
//!
//! - **Transport** (`transport.rs`): the HTTP seam, with a blocking reqwest implementation
//! - **Endpoints** (`endpoints.rs`): feed URL templates
//! - **Client** (`client.rs`): `SheetsClient` and the spreadsheet/worksheet/cell handles
//! - **Update** (`update.rs`): the two-step fetch-then-submit cell update protocol
//!
//! Decoding and batch construction live in `cellfeed-xml`, the data model and cell index
//! in `cellfeed-core`.
//!
//! # Example
//!
//! ```rust,no_run
//! use cellfeed_client::{ClientConfig, SheetsClient, TransportConfig};
//!
//! # fn example() -> cellfeed_client::Result<()> {
//! let transport = TransportConfig {
//!     token: Some("ya29.token".into()),
//!     ..Default::default()
//! };
//! let client = SheetsClient::connect(transport, ClientConfig::default())?;
//!
//! let sheet = client.spreadsheet("abc").worksheet_by_title("Sheet1")?;
//! let cells = sheet.get()?;
//! if let Some(col) = cells.column_by_header("Score") {
//!     sheet.cell(2, col).set("42")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod update;

// Re-export key types
pub use client::{CellHandle, SheetsClient, SpreadsheetHandle, WorksheetHandle};
pub use config::{ClientConfig, MissingEditLinkPolicy};
pub use endpoints::FeedEndpoints;
pub use error::{ClientError, Result, TransportError};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportConfig};
pub use update::{CellUpdate, UpdateState};
