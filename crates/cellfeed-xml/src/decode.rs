//! Feed decoding
//!
//! Feeds are read with the quick-xml event reader. Elements are matched by local name,
//! so the `gs:` prefix the service uses for `rowCount`, `colCount` and `cell` does not
//! need to be resolved. Batch elements (`batch:id`) are told apart from their Atom
//! namesakes by their prefix.

use std::mem;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{FeedError, FeedResult};
use cellfeed_core::{
    BatchEntryResult, BatchResponse, Cell, Link, Spreadsheet, Worksheet, WorksheetSummary,
};

/// One step of the document walk
enum Node<'e, 'x> {
    /// An element was opened (self-closing elements are followed by `Close`)
    Open(&'e BytesStart<'x>),
    /// An element was closed; carries the text collected since the last open
    Close(String),
}

/// Walk `xml`, calling `visit` with the qualified-name path of the current element.
fn walk<F>(xml: &str, root: &[u8], mut visit: F) -> FeedResult<()>
where
    F: FnMut(&[Vec<u8>], Node<'_, '_>) -> FeedResult<()>,
{
    // Text is kept verbatim; titles may carry significant surrounding spaces.
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut text = String::new();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                open(&mut path, &mut seen_root, root, &e)?;
                text.clear();
                visit(&path, Node::Open(&e))?;
            }
            Event::Empty(e) => {
                open(&mut path, &mut seen_root, root, &e)?;
                text.clear();
                visit(&path, Node::Open(&e))?;
                visit(&path, Node::Close(String::new()))?;
                path.pop();
            }
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
            Event::End(_) => {
                visit(&path, Node::Close(mem::take(&mut text)))?;
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(FeedError::decode(format!(
            "document has no <{}> element",
            String::from_utf8_lossy(root)
        )));
    }
    if !path.is_empty() {
        return Err(FeedError::decode("document ended inside an element"));
    }
    Ok(())
}

fn open(
    path: &mut Vec<Vec<u8>>,
    seen_root: &mut bool,
    root: &[u8],
    e: &BytesStart<'_>,
) -> FeedResult<()> {
    if path.is_empty() {
        let local = e.local_name();
        if *seen_root || local.as_ref() != root {
            return Err(FeedError::decode(format!(
                "unexpected root element <{}>, expected <{}>",
                String::from_utf8_lossy(e.name().as_ref()),
                String::from_utf8_lossy(root)
            )));
        }
        *seen_root = true;
    }
    path.push(e.name().as_ref().to_vec());
    Ok(())
}

/// Local part of a qualified name
fn local(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Whether `path` is exactly `expected`, compared by local name
fn at(path: &[Vec<u8>], expected: &[&[u8]]) -> bool {
    path.len() == expected.len()
        && path
            .iter()
            .zip(expected)
            .all(|(name, want)| local(name) == *want)
}

/// Whether the innermost element carries a namespace prefix
fn prefixed(path: &[Vec<u8>]) -> bool {
    path.last().map_or(false, |name| name.contains(&b':'))
}

/// Value of the attribute whose local name is `name`
fn attr(e: &BytesStart<'_>, name: &[u8]) -> FeedResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn parse_count(field: &str, value: &str) -> FeedResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| FeedError::decode(format!("{field} is not an integer: {value:?}")))
}

fn read_link(e: &BytesStart<'_>) -> FeedResult<Link> {
    Ok(Link {
        rel: attr(e, b"rel")?.unwrap_or_default(),
        href: attr(e, b"href")?.unwrap_or_default(),
        link_type: attr(e, b"type")?.unwrap_or_default(),
    })
}

/// Read the attributes of a `gs:cell` element
fn read_cell(e: &BytesStart<'_>) -> FeedResult<Cell> {
    let row = attr(e, b"row")?.ok_or_else(|| FeedError::decode("cell has no row attribute"))?;
    let col = attr(e, b"col")?.ok_or_else(|| FeedError::decode("cell has no col attribute"))?;

    let numeric_value = match attr(e, b"numericValue")? {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::debug!("ignoring non-numeric numericValue {raw:?} at R{row}C{col}");
                None
            }
        },
        None => None,
    };

    Ok(Cell {
        row: parse_count("cell row", &row)?,
        col: parse_count("cell col", &col)?,
        input_value: attr(e, b"inputValue")?.unwrap_or_default(),
        numeric_value,
        links: Vec::new(),
    })
}

/// Decode a worksheets feed into a [`Spreadsheet`].
pub fn decode_spreadsheet(xml: &str) -> FeedResult<Spreadsheet> {
    let mut spreadsheet = Spreadsheet::default();
    let mut current: Option<WorksheetSummary> = None;

    walk(xml, b"feed", |path, node| {
        match node {
            Node::Open(e) => {
                if at(path, &[b"feed", b"entry"]) {
                    current = Some(WorksheetSummary::default());
                } else if at(path, &[b"feed", b"entry", b"link"]) {
                    if let Some(summary) = current.as_mut() {
                        summary.links.push(read_link(e)?);
                    }
                }
            }
            Node::Close(text) => {
                if at(path, &[b"feed", b"title"]) {
                    spreadsheet.title = text;
                } else if at(path, &[b"feed", b"entry"]) {
                    spreadsheet.worksheets.extend(current.take());
                } else if let Some(summary) = current.as_mut() {
                    if at(path, &[b"feed", b"entry", b"id"]) {
                        summary.id = text.trim().to_string();
                    } else if at(path, &[b"feed", b"entry", b"title"]) {
                        summary.title = text;
                    } else if at(path, &[b"feed", b"entry", b"rowCount"]) {
                        summary.row_count = parse_count("rowCount", &text)?;
                    } else if at(path, &[b"feed", b"entry", b"colCount"]) {
                        summary.col_count = parse_count("colCount", &text)?;
                    }
                }
            }
        }
        Ok(())
    })?;

    Ok(spreadsheet)
}

/// Decode a cells feed into a [`Worksheet`], building its cell index.
///
/// Each entry's links are attached to the cell it carries; entries without a
/// `gs:cell` element are ignored.
pub fn decode_worksheet(xml: &str) -> FeedResult<Worksheet> {
    let mut id = String::new();
    let mut row_count = 0;
    let mut col_count = 0;
    let mut links = Vec::new();
    let mut cells = Vec::new();

    let mut entry_links: Vec<Link> = Vec::new();
    let mut entry_cell: Option<Cell> = None;

    walk(xml, b"feed", |path, node| {
        match node {
            Node::Open(e) => {
                if at(path, &[b"feed", b"link"]) {
                    links.push(read_link(e)?);
                } else if at(path, &[b"feed", b"entry"]) {
                    entry_links.clear();
                    entry_cell = None;
                } else if at(path, &[b"feed", b"entry", b"link"]) {
                    entry_links.push(read_link(e)?);
                } else if at(path, &[b"feed", b"entry", b"cell"]) {
                    entry_cell = Some(read_cell(e)?);
                }
            }
            Node::Close(text) => {
                if at(path, &[b"feed", b"id"]) {
                    id = text.trim().to_string();
                } else if at(path, &[b"feed", b"rowCount"]) {
                    row_count = parse_count("rowCount", &text)?;
                } else if at(path, &[b"feed", b"colCount"]) {
                    col_count = parse_count("colCount", &text)?;
                } else if at(path, &[b"feed", b"entry"]) {
                    if let Some(mut cell) = entry_cell.take() {
                        cell.links = mem::take(&mut entry_links);
                        cells.push(cell);
                    }
                }
            }
        }
        Ok(())
    })?;

    Ok(Worksheet::new(id, row_count, col_count, links, cells))
}

/// Decode a single cell entry (the response of a cell GET).
pub fn decode_cell(xml: &str) -> FeedResult<Cell> {
    let mut links = Vec::new();
    let mut cell: Option<Cell> = None;

    walk(xml, b"entry", |path, node| {
        if let Node::Open(e) = node {
            if at(path, &[b"entry", b"link"]) {
                links.push(read_link(e)?);
            } else if at(path, &[b"entry", b"cell"]) {
                cell = Some(read_cell(e)?);
            }
        }
        Ok(())
    })?;

    let mut cell = cell.ok_or_else(|| FeedError::decode("entry has no cell element"))?;
    cell.links = links;
    Ok(cell)
}

/// Decode the response feed of a batch submission.
///
/// An empty body decodes to an empty response.
pub fn decode_batch_response(xml: &str) -> FeedResult<BatchResponse> {
    let mut response = BatchResponse::default();
    if xml.trim().is_empty() {
        return Ok(response);
    }

    let mut current: Option<BatchEntryResult> = None;
    let mut entry_links: Vec<Link> = Vec::new();

    walk(xml, b"feed", |path, node| {
        match node {
            Node::Open(e) => {
                if at(path, &[b"feed", b"entry"]) {
                    current = Some(BatchEntryResult::default());
                    entry_links.clear();
                } else if let Some(entry) = current.as_mut() {
                    if at(path, &[b"feed", b"entry", b"operation"]) {
                        entry.operation = attr(e, b"type")?.unwrap_or_default();
                    } else if at(path, &[b"feed", b"entry", b"status"]) {
                        entry.status = match attr(e, b"code")? {
                            Some(code) => Some(code.trim().parse().map_err(|_| {
                                FeedError::decode(format!(
                                    "batch status code is not a number: {code:?}"
                                ))
                            })?),
                            None => None,
                        };
                        entry.reason = attr(e, b"reason")?.unwrap_or_default();
                    } else if at(path, &[b"feed", b"entry", b"link"]) {
                        entry_links.push(read_link(e)?);
                    } else if at(path, &[b"feed", b"entry", b"cell"]) {
                        entry.cell = Some(read_cell(e)?);
                    }
                }
            }
            Node::Close(text) => {
                if at(path, &[b"feed", b"entry"]) {
                    if let Some(mut entry) = current.take() {
                        if let Some(cell) = entry.cell.as_mut() {
                            cell.links = mem::take(&mut entry_links);
                        }
                        response.entries.push(entry);
                    }
                } else if at(path, &[b"feed", b"entry", b"id"]) && prefixed(path) {
                    if let Some(entry) = current.as_mut() {
                        entry.batch_id = text.trim().to_string();
                    }
                }
            }
        }
        Ok(())
    })?;

    Ok(response)
}
