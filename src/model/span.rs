//! Styled text as delivered by the extraction layer.

use serde::{Deserialize, Serialize};

/// A run of text sharing one font and style on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub content: String,
    /// Font size in points
    pub font_size: f32,
    /// Whether the font is bold
    pub bold: bool,
    /// Whether the font is italic
    pub italic: bool,
    /// Page number (1-indexed)
    pub page: u32,
    /// Vertical position of the baseline; spans on one visual line share it
    pub baseline: f32,
    /// Horizontal start position; orders spans within a line
    #[serde(default)]
    pub x: f32,
}

impl TextSpan {
    /// Create a regular-weight span on the given page.
    ///
    /// Baseline and x start at 0.0. Spans are grouped into lines by
    /// baseline, so spans that never get a baseline through [`Self::at`]
    /// all land on one line per page. Within a line, spans sharing an x
    /// keep their input order.
    pub fn new(content: impl Into<String>, font_size: f32, page: u32) -> Self {
        Self {
            content: content.into(),
            font_size,
            bold: false,
            italic: false,
            page,
            baseline: 0.0,
            x: 0.0,
        }
    }

    /// Mark the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the span as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Place the span on a baseline.
    pub fn at(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the horizontal start position.
    pub fn at_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }
}

/// One visual text line, merged from the spans that share its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Trimmed, non-empty text
    pub text: String,
    /// Largest font size among the merged spans
    pub font_size: f32,
    /// True if any merged span is bold
    pub bold: bool,
    /// Page number (1-indexed)
    pub page: u32,
    /// Baseline of the first merged span
    pub baseline: f32,
}

impl Line {
    /// Create a line directly, bypassing span aggregation.
    pub fn new(text: impl Into<String>, font_size: f32, bold: bool, page: u32) -> Self {
        Self {
            text: text.into(),
            font_size,
            bold,
            page,
            baseline: 0.0,
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
