//! Document title resolution.

use regex::Regex;

use crate::source::DocumentSource;

/// Picks a title from metadata, then from the opening lines of page 1.
#[derive(Debug, Clone)]
pub struct TitleResolver {
    numeric: Regex,
    /// Metadata titles must be shorter than this
    pub max_metadata_len: usize,
    /// How many non-empty page 1 lines to consider
    pub scan_lines: usize,
    /// Candidate lines must be longer than this
    pub min_line_len: usize,
    /// Candidate lines must be shorter than this
    pub max_line_len: usize,
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self {
            numeric: Regex::new(r"^\d+$").unwrap(),
            max_metadata_len: 200,
            scan_lines: 5,
            min_line_len: 5,
            max_line_len: 100,
        }
    }
}

impl TitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the title of `source`, or return `fallback`.
    pub fn resolve(&self, source: &dyn DocumentSource, fallback: &str) -> String {
        if let Some(title) = source
            .metadata_title()
            .and_then(|t| self.from_metadata(&t))
        {
            return title;
        }

        if source.page_count() > 0 {
            match source.page_text(1) {
                Ok(text) => {
                    if let Some(title) = self.from_first_page(&text) {
                        return title;
                    }
                }
                Err(e) => log::warn!("{}: no title from page 1: {}", source.name(), e),
            }
        }

        fallback.to_string()
    }

    /// Trimmed metadata title, if usable.
    pub fn from_metadata(&self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() || title.chars().count() >= self.max_metadata_len {
            return None;
        }
        Some(title.to_string())
    }

    /// First title-like line among the opening non-empty lines of a page.
    pub fn from_first_page(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(self.scan_lines)
            .find(|line| self.is_title_like(line))
            .map(str::to_string)
    }

    fn is_title_like(&self, line: &str) -> bool {
        let len = line.chars().count();
        len > self.min_line_len
            && len < self.max_line_len
            && !self.numeric.is_match(line)
            && !line.to_lowercase().starts_with("page")
    }
}
