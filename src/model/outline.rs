//! Outline types: a title plus a flat, leveled heading list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a document could not be processed at all.
pub const ERROR_TITLE: &str = "Error Processing Document";

/// Coarse outline depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric depth (1-3).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.depth())
    }
}

/// A detected heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    pub page: u32,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Document outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Resolved document title
    pub title: String,

    /// Headings ordered by page, reading order within a page
    #[serde(rename = "outline")]
    pub headings: Vec<Heading>,
}

impl Outline {
    /// Create an outline.
    pub fn new(title: impl Into<String>, headings: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            headings,
        }
    }

    /// Placeholder returned for a document that could not be opened.
    pub fn error_placeholder() -> Self {
        Self::new(ERROR_TITLE, Vec::new())
    }

    /// Whether this is the failed-document placeholder.
    pub fn is_error_placeholder(&self) -> bool {
        self.title == ERROR_TITLE && self.headings.is_empty()
    }
}
