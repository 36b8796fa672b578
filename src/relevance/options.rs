//! Relevance run options.

/// Options for subsection extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionOptions {
    /// Maximum subsections kept per section
    pub max_subsections: usize,

    /// Sentences of this many characters or fewer are dropped
    pub min_sentence_len: usize,

    /// Consecutive sentences per subsection
    pub group_size: usize,
}

impl Default for SubsectionOptions {
    fn default() -> Self {
        Self {
            max_subsections: 3,
            min_sentence_len: 20,
            group_size: 2,
        }
    }
}

/// Options for a persona/job relevance run.
#[derive(Debug, Clone)]
pub struct RelevanceOptions {
    /// Sections kept in the report across all documents
    pub top_k: usize,

    /// Body paragraphs of this many characters or fewer are dropped
    pub min_paragraph_len: usize,

    /// Section titles are truncated to this many characters
    pub max_title_len: usize,

    /// Subsection extraction settings
    pub subsections: SubsectionOptions,

    /// Whether to extract documents in parallel
    pub parallel: bool,
}

impl RelevanceOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many sections the report keeps.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the maximum subsections per section.
    pub fn with_max_subsections(mut self, max: usize) -> Self {
        self.subsections.max_subsections = max;
        self
    }

    /// Replace the subsection settings.
    pub fn with_subsections(mut self, subsections: SubsectionOptions) -> Self {
        self.subsections = subsections;
        self
    }

    /// Set the minimum body paragraph length.
    pub fn with_min_paragraph_len(mut self, len: usize) -> Self {
        self.min_paragraph_len = len;
        self
    }

    /// Set the section title length limit.
    pub fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
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

impl Default for RelevanceOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            min_paragraph_len: 20,
            max_title_len: 200,
            subsections: SubsectionOptions::default(),
            parallel: false,
        }
    }
}
