//! Cell and hyperlink records
//!
//! These mirror the `<entry>`/`<gs:cell>`/`<link>` elements of a cells feed. They carry
//! no behavior beyond field access and link lookup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relation type of the link that must accompany a cell update.
pub const REL_EDIT: &str = "edit";

/// Relation type of a resource's canonical self link.
pub const REL_SELF: &str = "self";

/// A hyperlink attached to a feed entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    /// Relation type (`edit`, `self`, ...)
    pub rel: String,
    /// Target URL
    pub href: String,
    /// Media type of the target
    pub link_type: String,
}

impl Link {
    /// Create a link with the given relation and target
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            link_type: String::new(),
        }
    }

    /// Set the media type
    pub fn with_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = link_type.into();
        self
    }
}

/// Find the target of the first link with relation `rel`.
pub fn find_href<'a>(links: &'a [Link], rel: &str) -> Option<&'a str> {
    links
        .iter()
        .find(|link| link.rel == rel)
        .map(|link| link.href.as_str())
}

/// A single cell as returned by the remote feed
///
/// Rows and columns are 1-based.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Row (1-based)
    pub row: u32,
    /// Column (1-based)
    pub col: u32,
    /// Raw value as entered by the user
    pub input_value: String,
    /// Numeric value, present only when the cell parses as a number
    pub numeric_value: Option<f64>,
    /// Links of the entry carrying this cell
    pub links: Vec<Link>,
}

impl Cell {
    /// Create a cell without links or numeric value
    pub fn new(row: u32, col: u32, input_value: impl Into<String>) -> Self {
        Self {
            row,
            col,
            input_value: input_value.into(),
            numeric_value: None,
            links: Vec::new(),
        }
    }

    /// Set the numeric value
    pub fn with_numeric_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(value);
        self
    }

    /// Attach a link
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Target of the first link with relation `rel`
    pub fn link(&self, rel: &str) -> Option<&str> {
        find_href(&self.links, rel)
    }

    /// The versioned edit link required to update this cell
    pub fn edit_link(&self) -> Option<&str> {
        self.link(REL_EDIT)
    }

    /// The `(row, col)` coordinate of this cell
    pub fn coordinate(&self) -> (u32, u32) {
        (self.row, self.col)
    }
}
