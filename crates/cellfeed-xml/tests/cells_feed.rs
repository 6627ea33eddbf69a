//! End-to-end tests for cells feeds (decode -> index -> lookup, batch building)

use cellfeed_core::{PendingEdit, REL_EDIT};
use cellfeed_xml::{build_batch_feed, decode_cell, decode_worksheet, FeedError};
use pretty_assertions::assert_eq;

const BASE: &str = "https://spreadsheets.google.com/feeds/cells/abc/od6/private/full";

/// Build a cells feed from `(row, col, inputValue, numericValue)` tuples
fn cells_feed(cells: &[(u32, u32, &str, Option<&str>)]) -> String {
    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:gs="http://schemas.google.com/spreadsheets/2006">
  <id>{BASE}</id>
  <title type="text">Sheet1</title>
  <link rel="http://schemas.google.com/g/2005#batch" type="application/atom+xml" href="{BASE}/batch"/>
  <gs:rowCount>50</gs:rowCount>
  <gs:colCount>8</gs:colCount>
"#
    );
    for (row, col, input, numeric) in cells {
        let numeric_attr = numeric
            .map(|n| format!(r#" numericValue="{n}""#))
            .unwrap_or_default();
        xml.push_str(&format!(
            r#"  <entry>
    <id>{BASE}/R{row}C{col}</id>
    <title type="text">R{row}C{col}</title>
    <link rel="self" type="application/atom+xml" href="{BASE}/R{row}C{col}"/>
    <link rel="edit" type="application/atom+xml" href="{BASE}/R{row}C{col}/v{row}{col}"/>
    <gs:cell row="{row}" col="{col}" inputValue="{input}"{numeric_attr}>{input}</gs:cell>
  </entry>
"#
        ));
    }
    xml.push_str("</feed>\n");
    xml
}

#[test]
fn test_decode_worksheet_header_fields() {
    let ws = decode_worksheet(&cells_feed(&[])).unwrap();

    assert_eq!(ws.id(), BASE);
    assert_eq!(ws.row_count(), 50);
    assert_eq!(ws.col_count(), 8);
    assert_eq!(
        ws.link("http://schemas.google.com/g/2005#batch"),
        Some(format!("{BASE}/batch").as_str())
    );
    assert!(ws.cells().is_empty());
    assert_eq!(ws.worksheet_key().unwrap(), "od6");
}

#[test]
fn test_decode_then_lookup_every_cell() {
    let raw = [
        (1, 1, "Name", None),
        (1, 2, "Score", None),
        (2, 1, "Ada", None),
        (2, 2, "10", Some("10.0")),
        (7, 5, "far away", None),
    ];
    let ws = decode_worksheet(&cells_feed(&raw)).unwrap();

    assert_eq!(ws.cells().len(), raw.len());
    for (row, col, input, numeric) in raw {
        let cell = ws.get(col, row).unwrap();
        assert_eq!(cell.coordinate(), (row, col));
        assert_eq!(cell.input_value, input);
        assert_eq!(cell.numeric_value, numeric.map(|n| n.parse::<f64>().unwrap()));
        assert_eq!(
            cell.edit_link(),
            Some(format!("{BASE}/R{row}C{col}/v{row}{col}").as_str())
        );
    }

    assert!(ws.get(3, 3).is_none());
    assert!(ws.cell(3, 3).unwrap_err().is_not_found());
}

#[test]
fn test_header_lookup_scenario() {
    let ws = decode_worksheet(&cells_feed(&[(1, 1, "Name", None)])).unwrap();

    assert_eq!(ws.column_by_header("Name"), Some(1));
    assert_eq!(ws.column_by_header("Missing"), None);
}

#[test]
fn test_duplicate_coordinates_last_entry_wins() {
    let ws = decode_worksheet(&cells_feed(&[(4, 2, "old", None), (4, 2, "new", None)])).unwrap();

    assert_eq!(ws.cells().len(), 2);
    assert_eq!(ws.get(2, 4).map(|c| c.input_value.as_str()), Some("new"));
}

#[test]
fn test_schema_mismatch_is_decode_error() {
    let err = decode_worksheet(r#"<feed><entry><gs:cell row="x" col="1"/></entry></feed>"#).unwrap_err();
    assert!(matches!(err, FeedError::Decode(_)));
}

#[test]
fn test_fetched_edit_link_flows_into_batch() {
    let entry = format!(
        r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:gs="http://schemas.google.com/spreadsheets/2006">
  <link rel="edit" type="application/atom+xml" href="{BASE}/R2C3/0"/>
  <gs:cell row="2" col="3" inputValue="7" numericValue="7.0">7</gs:cell>
</entry>"#
    );
    let cell = decode_cell(&entry).unwrap();
    let edit_link = cell.link(REL_EDIT).unwrap_or_default();

    let edits = [PendingEdit::new(cell.row, cell.col, "42", edit_link)];
    let xml = build_batch_feed(BASE, &edits).unwrap();

    assert!(xml.contains("<batch:id>R2C3</batch:id>"));
    assert!(xml.contains(&format!("<id>{BASE}/R2C3</id>")));
    assert!(xml.contains(&format!(r#"href="{BASE}/R2C3/0""#)));
    assert!(xml.contains(r#"<gs:cell row="2" col="3" inputValue="42"/>"#));
}

/// Known gap: a cell fetched without an edit link still yields a batch document, with an
/// empty `href`. The service rejects such entries; this test pins the boundary rather
/// than endorsing it.
#[test]
fn test_missing_edit_link_known_gap() {
    let entry = r#"<entry xmlns:gs="http://schemas.google.com/spreadsheets/2006"><gs:cell row="2" col="3" inputValue="7"/></entry>"#;
    let cell = decode_cell(entry).unwrap();
    assert!(cell.edit_link().is_none());

    let xml = build_batch_feed(
        BASE,
        &[PendingEdit::new(2, 3, "42", cell.edit_link().unwrap_or_default())],
    )
    .unwrap();
    assert!(xml.contains(r#"<link rel="edit" type="application/atom+xml" href=""/>"#));
}
