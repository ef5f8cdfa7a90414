//! Template document model
//!
//! A template is laid out ahead of time: every placeholder slot already has
//! its page, its coordinates and a sample text. Filling only rewrites text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Metadata for the template revision being filled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDoc {
    pub document_revision_key: String,
}

impl TemplateDoc {
    pub fn new(document_revision_key: impl Into<String>) -> Self {
        Self {
            document_revision_key: document_revision_key.into(),
        }
    }
}

/// Page identifier as found in template JSON (numbers and strings both occur).
/// Numbers keep their original spelling, so `4` and `4.0` survive a fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Number(Number),
    Name(String),
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Number(n) => write!(f, "{}", n),
            PageRef::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for PageRef {
    fn from(n: u32) -> Self {
        PageRef::Number(Number::from(n))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page: PageRef,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Properties the filler does not interpret, carried through untouched
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// A placeholder slot, labelled with the field identifier that fills it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Slot position. Kept as JSON numbers so integer coordinates are
/// written back as integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coords {
    pub x: Number,
    pub y: Number,
}

impl Coords {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub coords: Coords,
    #[serde(default)]
    pub text: String,
}

impl Page {
    pub fn new(page: u32, items: Vec<Item>) -> Self {
        Self {
            page: PageRef::from(page),
            items,
            extra: Map::new(),
        }
    }
}

impl Line {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>, text: impl Into<String>) -> Self {
        Self {
            coords: Coords::new(x, y),
            text: text.into(),
        }
    }
}

impl Item {
    pub fn new(id: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            id: id.into(),
            lines,
            extra: Map::new(),
        }
    }

    /// Texts of all lines, in order
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}
