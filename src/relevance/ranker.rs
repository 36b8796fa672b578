//! Cross-document section ranking.

use std::cmp::Ordering;

use super::{DocumentSections, RelevanceOptions, RelevanceScorer, SubsectionExtractor};
use crate::model::{ExtractedSection, ScoredSection, SubsectionAnalysis};

/// Scores every section of a run and keeps the best ones.
#[derive(Debug, Clone)]
pub struct SectionRanker {
    top_k: usize,
    extractor: SubsectionExtractor,
}

impl SectionRanker {
    pub fn new(options: &RelevanceOptions) -> Self {
        Self {
            top_k: options.top_k,
            extractor: SubsectionExtractor::new(options.subsections.clone()),
        }
    }

    /// Score all sections of all documents, in document then section order.
    pub fn score_all(
        &self,
        scorer: &RelevanceScorer,
        documents: &[DocumentSections],
    ) -> Vec<ScoredSection> {
        documents
            .iter()
            .flat_map(|doc| {
                doc.sections.iter().map(move |section| ScoredSection {
                    relevance_score: scorer.score(&section.content),
                    section: section.clone(),
                    document: doc.name.clone(),
                    importance_rank: 0,
                })
            })
            .collect()
    }

    /// Sort by descending score (ties keep input order), keep the top K and
    /// number them from 1.
    pub fn rank(&self, mut sections: Vec<ScoredSection>) -> Vec<ScoredSection> {
        sections.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        sections.truncate(self.top_k);

        for (i, section) in sections.iter_mut().enumerate() {
            section.importance_rank = i + 1;
        }
        sections
    }

    /// Report entries for ranked sections, with their subsections.
    pub fn extract(&self, ranked: &[ScoredSection]) -> Vec<ExtractedSection> {
        ranked
            .iter()
            .map(|scored| {
                let subsections = self
                    .extractor
                    .extract(&scored.section.content)
                    .into_iter()
                    .map(|sub| SubsectionAnalysis {
                        document: scored.document.clone(),
                        refined_text: sub.refined_text,
                        page_number: scored.section.page,
                        subsection_rank: sub.subsection_rank,
                    })
                    .collect();

                ExtractedSection {
                    document: scored.document.clone(),
                    page_number: scored.section.page,
                    section_title: scored.section.title.clone(),
                    importance_rank: scored.importance_rank,
                    relevance_score: round3(scored.relevance_score),
                    subsections,
                }
            })
            .collect()
    }
}

impl Default for SectionRanker {
    fn default() -> Self {
        Self::new(&RelevanceOptions::default())
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
