//! Shared fixtures: a recording in-memory transport and canned feed documents.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use cellfeed_client::{HttpResponse, Transport, TransportError};

pub const SPREADSHEET: &str = "abc";
pub const WORKSHEET: &str = "od6";
pub const CELLS_URL: &str = "https://spreadsheets.google.com/feeds/cells/abc/od6/private/full";
pub const WORKSHEETS_URL: &str =
    "https://spreadsheets.google.com/feeds/worksheets/abc/private/full";
pub const BATCH_URL: &str =
    "https://spreadsheets.google.com/feeds/cells/abc/od6/private/full/batch";

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Option<String>,
}

/// Replays canned responses keyed by method and URL, and records every request.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<(&'static str, String), Result<HttpResponse, String>>,
    requests: RefCell<Vec<Recorded>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(("GET", url.into()), Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn on_post(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(("POST", url.into()), Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail_post(mut self, url: impl Into<String>, message: &str) -> Self {
        self.routes.insert(("POST", url.into()), Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn posts(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST")
            .collect()
    }

    fn reply(&self, method: &'static str, url: &str) -> Result<HttpResponse, TransportError> {
        match self.routes.get(&(method, url.to_string())) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(TransportError::Other(message.clone())),
            None => Ok(HttpResponse::new(404, format!("no route for {method} {url}"))),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(Recorded {
            method: "GET",
            url: url.to_string(),
            content_type: None,
            body: None,
        });
        self.reply("GET", url)
    }

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(Recorded {
            method: "POST",
            url: url.to_string(),
            content_type: Some(content_type.to_string()),
            body: Some(body),
        });
        self.reply("POST", url)
    }
}

pub fn worksheets_feed() -> String {
    format!(
        r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:gs="http://schemas.google.com/spreadsheets/2006">
  <id>{WORKSHEETS_URL}</id>
  <title type="text">Inventory</title>
  <entry>
    <id>{WORKSHEETS_URL}/od6</id>
    <title type="text">Stock</title>
    <link rel="self" type="application/atom+xml" href="{WORKSHEETS_URL}/od6"/>
    <gs:rowCount>10</gs:rowCount>
    <gs:colCount>4</gs:colCount>
  </entry>
  <entry>
    <id>https://elsewhere.test/od7</id>
    <title type="text">Broken</title>
    <gs:rowCount>1</gs:rowCount>
    <gs:colCount>1</gs:colCount>
  </entry>
</feed>"#
    )
}

pub fn cells_feed() -> String {
    format!(
        r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:gs="http://schemas.google.com/spreadsheets/2006">
  <id>{CELLS_URL}</id>
  <gs:rowCount>10</gs:rowCount>
  <gs:colCount>4</gs:colCount>
  <entry>
    <id>{CELLS_URL}/R1C1</id>
    <link rel="edit" type="application/atom+xml" href="{CELLS_URL}/R1C1/a"/>
    <gs:cell row="1" col="1" inputValue="Item">Item</gs:cell>
  </entry>
  <entry>
    <id>{CELLS_URL}/R1C2</id>
    <link rel="edit" type="application/atom+xml" href="{CELLS_URL}/R1C2/b"/>
    <gs:cell row="1" col="2" inputValue="Count">Count</gs:cell>
  </entry>
  <entry>
    <id>{CELLS_URL}/R2C2</id>
    <link rel="edit" type="application/atom+xml" href="{CELLS_URL}/R2C2/c"/>
    <gs:cell row="2" col="2" inputValue="7" numericValue="7.0">7</gs:cell>
  </entry>
</feed>"#
    )
}

/// Single-cell entry; `edit_version` of `None` omits the edit link.
pub fn cell_entry(row: u32, col: u32, value: &str, edit_version: Option<&str>) -> String {
    let edit = edit_version
        .map(|v| {
            format!(r#"<link rel="edit" type="application/atom+xml" href="{CELLS_URL}/R{row}C{col}/{v}"/>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<entry xmlns="http://www.w3.org/2005/Atom" xmlns:gs="http://schemas.google.com/spreadsheets/2006">
  <id>{CELLS_URL}/R{row}C{col}</id>
  <link rel="self" type="application/atom+xml" href="{CELLS_URL}/R{row}C{col}"/>
  {edit}
  <gs:cell row="{row}" col="{col}" inputValue="{value}">{value}</gs:cell>
</entry>"#
    )
}

pub fn cell_url(row: u32, col: u32) -> String {
    format!("{CELLS_URL}/R{row}C{col}")
}

/// Batch response reporting `code` for each batch id.
pub fn batch_response(entries: &[(&str, u16)]) -> String {
    let mut xml = String::from(
        r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:batch="http://schemas.google.com/gdata/batch" xmlns:gs="http://schemas.google.com/spreadsheets/2006">"#,
    );
    for (id, code) in entries {
        xml.push_str(&format!(
            r#"<entry><batch:id>{id}</batch:id><batch:operation type="update"/><batch:status code="{code}" reason="r"/><id>{CELLS_URL}/{id}</id></entry>"#
        ));
    }
    xml.push_str("</feed>");
    xml
}
