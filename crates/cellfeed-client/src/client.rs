//! Resource accessors.
//!
//! [`SheetsClient`] owns the transport and configuration. Spreadsheet, worksheet and
//! cell handles are small value records holding identifiers and a shared reference to
//! the client; they own nothing and can be recreated at will. Every accessor performs at
//! most one round trip, except the cell updates which are explicitly two-step.

use cellfeed_core::{
    feed_id, BatchResponse, Cell, PendingEdit, Spreadsheet, Worksheet, WorksheetSummary,
};
use cellfeed_xml::{
    build_batch_feed, decode_batch_response, decode_cell, decode_spreadsheet, decode_worksheet,
    BATCH_CONTENT_TYPE,
};

use crate::config::{ClientConfig, MissingEditLinkPolicy};
use crate::error::{ClientError, Result};
use crate::transport::{ReqwestTransport, Transport, TransportConfig};
use crate::update::CellUpdate;

/// Entry point to the feed service.
pub struct SheetsClient<T> {
    transport: T,
    config: ClientConfig,
}

impl SheetsClient<ReqwestTransport> {
    /// Create a client over a reqwest transport.
    pub fn connect(transport: TransportConfig, config: ClientConfig) -> Result<Self> {
        Ok(Self::with_config(ReqwestTransport::new(transport)?, config))
    }
}

impl<T: Transport> SheetsClient<T> {
    /// Create a client with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle on the spreadsheet with key `spreadsheet_id`.
    pub fn spreadsheet(&self, spreadsheet_id: impl Into<String>) -> SpreadsheetHandle<'_, T> {
        SpreadsheetHandle {
            client: self,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    /// GET `url` and return the body of a 2xx response.
    pub(crate) fn get_body(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {url}");
        let response = self.transport.get(url)?.error_for_status()?;
        Ok(response.body)
    }

    /// POST a batch document to `url` and return the body of a 2xx response.
    pub(crate) fn post_batch(&self, url: &str, body: String) -> Result<String> {
        tracing::debug!("POST {url} ({} bytes)", body.len());
        let response = self
            .transport
            .post(url, BATCH_CONTENT_TYPE, body)?
            .error_for_status()?;
        Ok(response.body)
    }

    /// Fetch a cell and pick its edit link, applying the missing-link policy.
    pub(crate) fn edit_link(
        &self,
        spreadsheet_id: &str,
        worksheet_id: &str,
        row: u32,
        col: u32,
    ) -> Result<String> {
        let url = self.config.endpoints.cell(spreadsheet_id, worksheet_id, row, col);
        let cell = decode_cell(&self.get_body(&url)?)?;

        match (cell.edit_link(), self.config.missing_edit_link) {
            (Some(link), _) => Ok(link.to_string()),
            (None, MissingEditLinkPolicy::Submit) => {
                tracing::warn!("R{row}C{col} has no edit link; submitting with an empty one");
                Ok(String::new())
            }
            (None, MissingEditLinkPolicy::Reject) => Err(ClientError::MissingEditLink { row, col }),
        }
    }

    /// Build and POST one batch document for the given worksheet.
    pub(crate) fn submit_batch(
        &self,
        spreadsheet_id: &str,
        worksheet_id: &str,
        edits: &[PendingEdit],
    ) -> Result<BatchResponse> {
        let endpoints = &self.config.endpoints;
        let document = build_batch_feed(&endpoints.cells(spreadsheet_id, worksheet_id), edits)?;
        let body = self.post_batch(&endpoints.batch(spreadsheet_id, worksheet_id), document)?;
        let response = decode_batch_response(&body)?;

        tracing::info!(
            "Submitted {} cell update(s) to {spreadsheet_id}/{worksheet_id}",
            edits.len()
        );
        for failure in response.failures() {
            tracing::warn!(
                "Batch entry {} failed: {:?} {}",
                failure.batch_id,
                failure.status,
                failure.reason
            );
        }
        Ok(response)
    }
}

/// Handle on one spreadsheet.
pub struct SpreadsheetHandle<'c, T> {
    client: &'c SheetsClient<T>,
    spreadsheet_id: String,
}

impl<'c, T: Transport> SpreadsheetHandle<'c, T> {
    pub fn id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Fetch the worksheets feed.
    pub fn get(&self) -> Result<Spreadsheet> {
        let url = self.client.config.endpoints.worksheets(&self.spreadsheet_id);
        Ok(decode_spreadsheet(&self.client.get_body(&url)?)?)
    }

    /// Handle on the worksheet with key `worksheet_id` (e.g. `od6`).
    pub fn worksheet(&self, worksheet_id: impl Into<String>) -> WorksheetHandle<'c, T> {
        WorksheetHandle {
            client: self.client,
            spreadsheet_id: self.spreadsheet_id.clone(),
            worksheet_id: worksheet_id.into(),
        }
    }

    /// Handle on the worksheet described by `summary`.
    ///
    /// The worksheet key is the trailing segment of the summary id; an id without the
    /// expected prefix fails with [`cellfeed_core::Error::InvalidWorksheetId`].
    pub fn worksheet_from_summary(
        &self,
        summary: &WorksheetSummary,
    ) -> Result<WorksheetHandle<'c, T>> {
        let key = feed_id::worksheet_key(
            self.client.config.endpoints.base(),
            &self.spreadsheet_id,
            &summary.id,
        )?;
        Ok(self.worksheet(key))
    }

    /// Fetch the worksheets feed and return a handle on the first worksheet titled `title`.
    pub fn worksheet_by_title(&self, title: &str) -> Result<WorksheetHandle<'c, T>> {
        let spreadsheet = self.get()?;
        let summary = spreadsheet
            .worksheet_by_title(title)
            .ok_or_else(|| ClientError::WorksheetNotFound(title.to_string()))?;
        self.worksheet_from_summary(summary)
    }
}

/// Handle on one worksheet of a spreadsheet.
pub struct WorksheetHandle<'c, T> {
    client: &'c SheetsClient<T>,
    spreadsheet_id: String,
    worksheet_id: String,
}

impl<'c, T: Transport> WorksheetHandle<'c, T> {
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn id(&self) -> &str {
        &self.worksheet_id
    }

    /// Fetch the cells feed and index it.
    pub fn get(&self) -> Result<Worksheet> {
        let url = self
            .client
            .config
            .endpoints
            .cells(&self.spreadsheet_id, &self.worksheet_id);
        Ok(decode_worksheet(&self.client.get_body(&url)?)?)
    }

    /// Handle on the cell at `(row, col)`, 1-based.
    pub fn cell(&self, row: u32, col: u32) -> CellHandle<'c, T> {
        CellHandle {
            client: self.client,
            spreadsheet_id: self.spreadsheet_id.clone(),
            worksheet_id: self.worksheet_id.clone(),
            row,
            col,
        }
    }

    /// Update several cells in one batch.
    ///
    /// Each cell is fetched first for its edit link, then all edits are POSTed together.
    /// The first failure stops the operation and nothing is submitted.
    pub fn set_cells(&self, changes: &[(u32, u32, &str)]) -> Result<BatchResponse> {
        let edits = changes
            .iter()
            .map(|&(row, col, value)| -> Result<PendingEdit> {
                let link = self
                    .client
                    .edit_link(&self.spreadsheet_id, &self.worksheet_id, row, col)?;
                Ok(PendingEdit::new(row, col, value, link))
            })
            .collect::<Result<Vec<_>>>()?;

        self.submit(&edits)
    }

    /// Submit already prepared edits in one batch.
    pub fn submit(&self, edits: &[PendingEdit]) -> Result<BatchResponse> {
        self.client
            .submit_batch(&self.spreadsheet_id, &self.worksheet_id, edits)
    }
}

/// Handle on one cell of a worksheet.
pub struct CellHandle<'c, T> {
    client: &'c SheetsClient<T>,
    spreadsheet_id: String,
    worksheet_id: String,
    row: u32,
    col: u32,
}

impl<'c, T: Transport> CellHandle<'c, T> {
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Fetch the cell's current state.
    pub fn get(&self) -> Result<Cell> {
        let url = self
            .client
            .config
            .endpoints
            .cell(&self.spreadsheet_id, &self.worksheet_id, self.row, self.col);
        Ok(decode_cell(&self.client.get_body(&url)?)?)
    }

    /// Start the two-step update protocol for this cell.
    pub fn update(&self) -> CellUpdate<'c, T> {
        CellUpdate::new(
            self.client,
            self.spreadsheet_id.clone(),
            self.worksheet_id.clone(),
            self.row,
            self.col,
        )
    }

    /// Set the cell's input value: fetch its edit link, then submit a one-entry batch.
    ///
    /// `Ok` means the batch round trip completed, not that the service applied the change.
    /// A rejected entry (such as a 409 for a stale edit link) is reported in the response;
    /// check [`BatchResponse::all_succeeded`].
    pub fn set(&self, input_value: &str) -> Result<BatchResponse> {
        let mut update = self.update();
        update.fetch()?;
        update.submit(input_value)
    }
}
