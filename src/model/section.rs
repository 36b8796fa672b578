//! Section types for the relevance pipeline.

use serde::{Deserialize, Serialize};

/// A titled run of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading paragraph, truncated
    pub title: String,
    /// Body paragraphs joined by single spaces
    pub content: String,
    /// Page the section was closed on
    pub page: u32,
    /// Whitespace-delimited words in `content`
    pub word_count: usize,
}

impl Section {
    /// Create a section, deriving the word count from the content.
    pub fn new(title: impl Into<String>, content: impl Into<String>, page: u32) -> Self {
        let content = content.into();
        let word_count = content.split_whitespace().count();
        Self {
            title: title.into(),
            content,
            page,
            word_count,
        }
    }
}

/// A section with its source document and relevance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSection {
    pub section: Section,
    /// Source file name
    pub document: String,
    pub relevance_score: f64,
    /// 1-based position after ranking; 0 until ranked
    pub importance_rank: usize,
}

/// A short excerpt of grouped sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    pub refined_text: String,
    pub sentence_count: usize,
    pub word_count: usize,
    /// 1-based position within the owning section
    pub subsection_rank: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_word_count() {
        let section = Section::new("Methods", "We sampled  forty\nsites in total.", 2);
        assert_eq!(section.word_count, 6);
        assert_eq!(Section::new("Empty", "", 1).word_count, 0);
    }
}
