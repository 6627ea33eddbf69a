//! Two-step cell update protocol.
//!
//! 1. Fetch the cell and take its `edit` link, which carries the version token the
//!    service checks before accepting a change.
//! 2. Submit a one-entry batch carrying that link.
//!
//! ```text
//! Uninitialized --fetch--> Fetched(edit link) --submit--> Submitted
//!       |                          |
//!       +--------> Failed <--------+
//! ```
//!
//! There is no retry: a failure in either step ends in `Failed` and the error is
//! returned. Step 1 is read-only, so a step-2 failure has nothing to roll back.

use cellfeed_core::{BatchResponse, PendingEdit};

use crate::client::SheetsClient;
use crate::error::{ClientError, Result};
use crate::transport::Transport;

/// Where a [`CellUpdate`] is in the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateState {
    Uninitialized,
    /// Step 1 done; the link may be empty when the policy allows it.
    Fetched { edit_link: String },
    Submitted,
    Failed,
}

impl UpdateState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UpdateState::Submitted | UpdateState::Failed)
    }
}

/// One in-flight update of a single cell.
pub struct CellUpdate<'c, T> {
    client: &'c SheetsClient<T>,
    spreadsheet_id: String,
    worksheet_id: String,
    row: u32,
    col: u32,
    state: UpdateState,
}

impl<'c, T: Transport> CellUpdate<'c, T> {
    pub(crate) fn new(
        client: &'c SheetsClient<T>,
        spreadsheet_id: String,
        worksheet_id: String,
        row: u32,
        col: u32,
    ) -> Self {
        Self {
            client,
            spreadsheet_id,
            worksheet_id,
            row,
            col,
            state: UpdateState::Uninitialized,
        }
    }

    pub fn state(&self) -> &UpdateState {
        &self.state
    }

    /// Step 1: fetch the cell's current edit link.
    pub fn fetch(&mut self) -> Result<String> {
        if self.state != UpdateState::Uninitialized {
            return Err(ClientError::InvalidState("fetch requires an uninitialized update"));
        }

        match self
            .client
            .edit_link(&self.spreadsheet_id, &self.worksheet_id, self.row, self.col)
        {
            Ok(edit_link) => {
                self.state = UpdateState::Fetched {
                    edit_link: edit_link.clone(),
                };
                Ok(edit_link)
            }
            Err(e) => {
                self.state = UpdateState::Failed;
                Err(e)
            }
        }
    }

    /// Step 2: submit `input_value` with the fetched edit link.
    ///
    /// The response body is read in full before this returns.
    pub fn submit(&mut self, input_value: &str) -> Result<BatchResponse> {
        let edit_link = match &self.state {
            UpdateState::Fetched { edit_link } => edit_link.clone(),
            _ => return Err(ClientError::InvalidState("submit requires a fetched edit link")),
        };

        let edit = PendingEdit::new(self.row, self.col, input_value, edit_link);
        match self
            .client
            .submit_batch(&self.spreadsheet_id, &self.worksheet_id, &[edit])
        {
            Ok(response) => {
                self.state = UpdateState::Submitted;
                Ok(response)
            }
            Err(e) => {
                self.state = UpdateState::Failed;
                Err(e)
            }
        }
    }
}
