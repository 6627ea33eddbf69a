//! Batch response records

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Outcome of one entry of a submitted batch
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchEntryResult {
    /// Batch identifier echoed by the service (`R{row}C{col}`)
    pub batch_id: String,
    /// Operation type echoed by the service (`update`)
    pub operation: String,
    /// HTTP-like status code of this entry, if reported
    pub status: Option<u16>,
    /// Status reason phrase
    pub reason: String,
    /// Cell state after the operation, if returned
    pub cell: Option<Cell>,
}

impl BatchEntryResult {
    /// Whether the service reported a 2xx status for this entry
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}

/// Response feed of a batch submission
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchResponse {
    /// Per-entry results in response order
    pub entries: Vec<BatchEntryResult>,
}

impl BatchResponse {
    /// Entries that did not report success
    pub fn failures(&self) -> impl Iterator<Item = &BatchEntryResult> {
        self.entries.iter().filter(|entry| !entry.is_success())
    }

    /// Whether every entry reported success
    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Result for a given batch id
    pub fn entry(&self, batch_id: &str) -> Option<&BatchEntryResult> {
        self.entries.iter().find(|entry| entry.batch_id == batch_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(batch_id: &str, status: Option<u16>) -> BatchEntryResult {
        BatchEntryResult {
            batch_id: batch_id.to_string(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_failures() {
        let response = BatchResponse {
            entries: vec![
                entry("R1C1", Some(200)),
                entry("R1C2", Some(409)),
                entry("R1C3", None),
            ],
        };

        let failed: Vec<_> = response.failures().map(|e| e.batch_id.as_str()).collect();
        assert_eq!(failed, vec!["R1C2", "R1C3"]);
        assert!(!response.all_succeeded());
        assert_eq!(response.entry("R1C2").and_then(|e| e.status), Some(409));
    }

    #[test]
    fn test_empty_response_succeeds() {
        assert!(BatchResponse::default().all_succeeded());
    }
}
