//! Relevance run result, shaped for JSON output.

use serde::{Deserialize, Serialize};

/// Result of a persona/job relevance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceReport {
    pub metadata: ReportMetadata,
    /// Top-ranked sections across all documents
    pub extracted_sections: Vec<ExtractedSection>,
    /// Every subsection of `extracted_sections`, flattened in rank order
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

impl RelevanceReport {
    /// Build a report, flattening the sections' subsections.
    pub fn new(metadata: ReportMetadata, extracted_sections: Vec<ExtractedSection>) -> Self {
        let subsection_analysis = extracted_sections
            .iter()
            .flat_map(|section| section.subsections.iter().cloned())
            .collect();
        Self {
            metadata,
            extracted_sections,
            subsection_analysis,
        }
    }
}

/// Run-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// File names of every input document, in input order
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    /// ISO-8601 local time the run finished
    pub processing_timestamp: String,
    pub total_documents: usize,
    /// Sections scored across all documents, before the top-K cut
    pub total_sections_analyzed: usize,
}

/// A ranked section in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub page_number: u32,
    pub section_title: String,
    pub importance_rank: usize,
    /// Rounded to three decimals
    pub relevance_score: f64,
    pub subsections: Vec<SubsectionAnalysis>,
}

/// A subsection excerpt in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
    pub subsection_rank: usize,
}
