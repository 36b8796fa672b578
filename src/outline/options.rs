//! Outline extraction options.

/// Title used when neither metadata nor page 1 yields one.
pub const UNTITLED: &str = "Untitled Document";

/// Options for outline extraction.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Lines longer than this (in characters) are never headings
    pub max_heading_len: usize,

    /// Lines ending in '.' longer than this are treated as body text
    pub body_period_len: usize,

    /// Lines must be longer than this to count toward font statistics
    pub min_line_len: usize,

    /// Title when nothing better is found
    pub fallback_title: String,

    /// Whether to extract multiple documents in parallel
    pub parallel: bool,
}

impl OutlineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading length.
    pub fn with_max_heading_len(mut self, len: usize) -> Self {
        self.max_heading_len = len;
        self
    }

    /// Set the length above which period-terminated lines are body text.
    pub fn with_body_period_len(mut self, len: usize) -> Self {
        self.body_period_len = len;
        self
    }

    /// Set the minimum eligible line length.
    pub fn with_min_line_len(mut self, len: usize) -> Self {
        self.min_line_len = len;
        self
    }

    /// Set the fallback title.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable parallel processing.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_heading_len: 150,
            body_period_len: 50,
            min_line_len: 3,
            fallback_title: UNTITLED.to_string(),
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OutlineOptions::default();
        assert_eq!(options.max_heading_len, 150);
        assert_eq!(options.body_period_len, 50);
        assert_eq!(options.min_line_len, 3);
        assert_eq!(options.fallback_title, "Untitled Document");
        assert!(!options.parallel);
    }

    #[test]
    fn test_builder() {
        let options = OutlineOptions::new()
            .with_max_heading_len(80)
            .with_fallback_title("Report")
            .parallel();
        assert_eq!(options.max_heading_len, 80);
        assert_eq!(options.fallback_title, "Report");
        assert!(options.parallel);
    }
}
