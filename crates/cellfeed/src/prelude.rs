//! Prelude module - common imports for cellfeed users
//!
//! ```rust
//! use cellfeed::prelude::*;
//! ```

pub use crate::{
    // Decoding and batch building
    build_batch_feed,
    decode_cell,
    decode_spreadsheet,
    decode_worksheet,

    // Data model
    BatchResponse,
    Cell,
    CellIndex,
    Link,
    PendingEdit,
    Spreadsheet,
    Worksheet,
    WorksheetSummary,

    // Client
    ClientConfig,
    ClientError,
    MissingEditLinkPolicy,
    SheetsClient,
    Transport,
    TransportConfig,
    UpdateState,
};
