//! Batch update document construction
//!
//! The service accepts cell updates as an Atom feed with one `<entry>` per change:
//!
//! ```text
//! <feed xmlns=".../Atom" xmlns:batch=".../batch" xmlns:gs=".../spreadsheets/2006">
//!   <id>{base}</id>
//!   <entry>
//!     <batch:id>R{row}C{col}</batch:id>
//!     <batch:operation type="update"/>
//!     <id>{base}/R{row}C{col}</id>
//!     <link rel="edit" type="application/atom+xml" href="{edit link}"/>
//!     <gs:cell row="{row}" col="{col}" inputValue="{value}"/>
//!   </entry>
//! </feed>
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use quick_xml::escape::escape;

use crate::error::{FeedError, FeedResult};
use cellfeed_core::PendingEdit;

/// Content type of a batch submission
pub const BATCH_CONTENT_TYPE: &str = "text/xml";

const FEED_OPEN: &str = concat!(
    r#"<feed xmlns="http://www.w3.org/2005/Atom""#,
    "\n    ",
    r#"xmlns:batch="http://schemas.google.com/gdata/batch""#,
    "\n    ",
    r#"xmlns:gs="http://schemas.google.com/spreadsheets/2006">"#,
    "\n",
);

const FEED_CLOSE: &str = "</feed>\n";

const EDIT_LINK_TYPE: &str = "application/atom+xml";

const OPERATION: &str = "update";

/// Render `edits` into one batch feed for the cells feed at `base_url`.
///
/// Entries appear in input order. Fails without producing a partial document when the
/// edit list is empty, a coordinate is 0, or a value contains a character XML 1.0
/// cannot represent.
///
/// ```rust
/// use cellfeed_core::PendingEdit;
/// use cellfeed_xml::build_batch_feed;
///
/// let xml = build_batch_feed("U", &[PendingEdit::new(2, 3, "42", "U/R2C3/v1")]).unwrap();
/// assert!(xml.contains("<batch:id>R2C3</batch:id>"));
/// assert!(xml.contains("<id>U/R2C3</id>"));
/// assert!(xml.contains(r#"row="2" col="3" inputValue="42""#));
/// ```
pub fn build_batch_feed(base_url: &str, edits: &[PendingEdit]) -> FeedResult<String> {
    if edits.is_empty() {
        return Err(FeedError::construction("batch has no edits"));
    }
    check_chars("base URL", base_url)?;

    let base = escape(base_url);
    let mut out = String::with_capacity(FEED_OPEN.len() + 320 * edits.len());
    out.push_str(FEED_OPEN);
    writeln!(out, "  <id>{base}</id>").map_err(fmt_error)?;

    for edit in edits {
        write_entry(&mut out, &base, edit)?;
    }

    out.push_str(FEED_CLOSE);
    Ok(out)
}

fn write_entry(out: &mut String, base: &str, edit: &PendingEdit) -> FeedResult<()> {
    if edit.row == 0 || edit.col == 0 {
        return Err(FeedError::construction(format!(
            "cell coordinates are 1-based, got row {} col {}",
            edit.row, edit.col
        )));
    }
    check_chars("edit link", &edit.edit_link)?;
    check_chars("input value", &edit.input_value)?;

    let batch_id = edit.batch_id();
    write!(
        out,
        concat!(
            "  <entry>\n",
            "    <batch:id>{batch_id}</batch:id>\n",
            "    <batch:operation type=\"{operation}\"/>\n",
            "    <id>{base}/{batch_id}</id>\n",
            "    <link rel=\"edit\" type=\"{link_type}\" href=\"{href}\"/>\n",
            "    <gs:cell row=\"{row}\" col=\"{col}\" inputValue=\"{value}\"/>\n",
            "  </entry>\n",
        ),
        batch_id = batch_id,
        operation = OPERATION,
        base = base,
        link_type = EDIT_LINK_TYPE,
        href = escape_attr(&edit.edit_link),
        row = edit.row,
        col = edit.col,
        value = escape_attr(&edit.input_value),
    )
    .map_err(fmt_error)
}

fn fmt_error(err: std::fmt::Error) -> FeedError {
    FeedError::construction(err.to_string())
}

/// Escape an attribute value.
///
/// Tabs and line breaks are written as character references so attribute-value
/// normalization on the receiving side keeps them.
fn escape_attr(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped;
    }
    Cow::Owned(
        escaped
            .replace('\t', "&#9;")
            .replace('\n', "&#10;")
            .replace('\r', "&#13;"),
    )
}

/// Reject characters outside the XML 1.0 `Char` production.
fn check_chars(what: &str, value: &str) -> FeedResult<()> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(FeedError::construction(format!(
            "{what} contains U+{:04X}, which XML cannot represent",
            c as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
