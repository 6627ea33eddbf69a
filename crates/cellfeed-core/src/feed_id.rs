//! Identifier parsing for feed URLs
//!
//! Worksheet summaries identify a worksheet by a full URL
//! (`{base}/worksheets/{spreadsheet}/private/full/{worksheet}`); the worksheet key used in
//! every other endpoint is the trailing segment. Cells feeds identify themselves by
//! `{base}/cells/{spreadsheet}/{worksheet}/private/full`.

use crate::error::{Error, Result};

/// Base URL of the public spreadsheets feed service
pub const DEFAULT_FEED_BASE: &str = "https://spreadsheets.google.com/feeds";

/// Visibility/projection suffix used by every private feed
const PRIVATE_FULL: &str = "private/full";

/// Extract the worksheet key from a worksheet summary id.
///
/// The id must start with `{feed_base}/worksheets/{spreadsheet_id}/private/full/` and
/// the remainder must be a single non-empty path segment.
///
/// ```rust
/// use cellfeed_core::feed_id::{worksheet_key, DEFAULT_FEED_BASE};
///
/// let key = worksheet_key(
///     DEFAULT_FEED_BASE,
///     "abc",
///     "https://spreadsheets.google.com/feeds/worksheets/abc/private/full/od6",
/// )
/// .unwrap();
/// assert_eq!(key, "od6");
/// ```
pub fn worksheet_key<'a>(
    feed_base: &str,
    spreadsheet_id: &str,
    summary_id: &'a str,
) -> Result<&'a str> {
    let prefix = format!(
        "{}/worksheets/{}/{}/",
        feed_base.trim_end_matches('/'),
        spreadsheet_id,
        PRIVATE_FULL
    );

    let key = summary_id
        .strip_prefix(prefix.as_str())
        .ok_or_else(|| Error::InvalidWorksheetId(summary_id.to_string()))?;

    if key.is_empty() || key.contains('/') {
        return Err(Error::InvalidWorksheetId(summary_id.to_string()));
    }
    Ok(key)
}

/// Split a cells-feed id into `(spreadsheet_key, worksheet_key)`.
pub fn parse_cells_feed_id(feed_id: &str) -> Result<(&str, &str)> {
    let invalid = || Error::InvalidFeedId(feed_id.to_string());

    let (_, rest) = feed_id.split_once("/cells/").ok_or_else(invalid)?;
    let rest = rest.strip_suffix(PRIVATE_FULL).ok_or_else(invalid)?;

    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(spreadsheet), Some(worksheet), Some(""), None)
            if !spreadsheet.is_empty() && !worksheet.is_empty() =>
        {
            Ok((spreadsheet, worksheet))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet_key() {
        let key = worksheet_key(
            DEFAULT_FEED_BASE,
            "abc",
            "https://spreadsheets.google.com/feeds/worksheets/abc/private/full/od6",
        );
        assert_eq!(key, Ok("od6"));
    }

    #[test]
    fn test_worksheet_key_trailing_slash_on_base() {
        let key = worksheet_key(
            "https://example.test/feeds/",
            "key",
            "https://example.test/feeds/worksheets/key/private/full/w1",
        );
        assert_eq!(key, Ok("w1"));
    }

    #[test]
    fn test_worksheet_key_prefix_absent() {
        let err = worksheet_key(DEFAULT_FEED_BASE, "abc", "od6").unwrap_err();
        assert!(matches!(err, Error::InvalidWorksheetId(_)));

        // Different spreadsheet id: the prefix does not match, so nothing is truncated.
        let err = worksheet_key(
            DEFAULT_FEED_BASE,
            "abcd",
            "https://spreadsheets.google.com/feeds/worksheets/abc/private/full/od6",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidWorksheetId(_)));
    }

    #[test]
    fn test_worksheet_key_empty_or_nested() {
        let base = "https://spreadsheets.google.com/feeds/worksheets/abc/private/full/";
        assert!(worksheet_key(DEFAULT_FEED_BASE, "abc", base).is_err());
        assert!(worksheet_key(DEFAULT_FEED_BASE, "abc", &format!("{base}od6/extra")).is_err());
    }

    #[test]
    fn test_parse_cells_feed_id() {
        let ids =
            parse_cells_feed_id("https://spreadsheets.google.com/feeds/cells/abc/od6/private/full");
        assert_eq!(ids, Ok(("abc", "od6")));

        for id in [
            "https://spreadsheets.google.com/feeds/cells/abc/private/full",
            "https://spreadsheets.google.com/feeds/worksheets/abc/private/full",
        ] {
            assert!(parse_cells_feed_id(id).is_err());
        }
        assert!(parse_cells_feed_id("").is_err());
    }
}
