//! Pending cell edits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One requested cell change that has not been sent yet
///
/// The edit link comes from a prior fetch of the cell and carries the version token the
/// remote service checks before applying the change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingEdit {
    /// Versioned edit link of the target cell (may be empty, see the client's policy)
    pub edit_link: String,
    /// Row (1-based)
    pub row: u32,
    /// Column (1-based)
    pub col: u32,
    /// New raw input value
    pub input_value: String,
}

impl PendingEdit {
    /// Create a pending edit
    pub fn new(
        row: u32,
        col: u32,
        input_value: impl Into<String>,
        edit_link: impl Into<String>,
    ) -> Self {
        Self {
            edit_link: edit_link.into(),
            row,
            col,
            input_value: input_value.into(),
        }
    }

    /// Batch identifier of this edit: `R{row}C{col}`
    pub fn batch_id(&self) -> String {
        format!("R{}C{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_id() {
        assert_eq!(PendingEdit::new(2, 3, "42", "").batch_id(), "R2C3");
        assert_eq!(PendingEdit::new(10, 1, "", "").batch_id(), "R10C1");
    }
}
