//! Sentence-group excerpts.

use regex::Regex;

use super::SubsectionOptions;
use crate::model::Subsection;

/// Cuts section content into short runs of consecutive sentences.
#[derive(Debug, Clone)]
pub struct SubsectionExtractor {
    options: SubsectionOptions,
    terminators: Regex,
}

impl SubsectionExtractor {
    pub fn new(options: SubsectionOptions) -> Self {
        Self {
            options,
            terminators: Regex::new(r"[.!?]+").unwrap(),
        }
    }

    /// Qualifying sentences of `content`, trimmed, terminators removed.
    pub fn sentences<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.terminators
            .split(content)
            .map(str::trim)
            .filter(|s| s.chars().count() > self.options.min_sentence_len)
            .collect()
    }

    /// Up to `max_subsections` excerpts, in content order, ranked from 1.
    pub fn extract(&self, content: &str) -> Vec<Subsection> {
        let group_size = self.options.group_size.max(1);

        self.sentences(content)
            .chunks(group_size)
            .take(self.options.max_subsections)
            .enumerate()
            .map(|(i, group)| {
                let refined_text = format!("{}.", group.join(". "));
                let word_count = refined_text.split_whitespace().count();
                Subsection {
                    refined_text,
                    sentence_count: group.len(),
                    word_count,
                    subsection_rank: i + 1,
                }
            })
            .collect()
    }
}

impl Default for SubsectionExtractor {
    fn default() -> Self {
        Self::new(SubsectionOptions::default())
    }
}
