//! Persona-driven section relevance.
//!
//! Documents are split into sections at heading-like paragraphs, each
//! section is scored against keyword sets chosen by the reader's persona
//! and task, and the best sections across all documents are reported with
//! short sentence-group excerpts.
//!
//! # Example
//!
//! ```
//! use docsift::relevance::RelevanceAnalyzer;
//! use docsift::source::MemoryDocument;
//!
//! let doc = MemoryDocument::new("study.pdf").with_text(
//!     "1. Methods\n\nWe describe the methodology and the analysis of the data.",
//! );
//! let analyzer = RelevanceAnalyzer::default();
//! let sections = vec![analyzer.sectionize(&doc)];
//! let report = analyzer
//!     .analyze(&sections, "PhD Researcher", "Literature review")
//!     .unwrap();
//! assert_eq!(report.extracted_sections[0].section_title, "1. Methods");
//! ```

mod analyzer;
mod options;
mod persona;
mod ranker;
mod scorer;
mod sectionizer;
mod subsection;

pub use analyzer::{validate_inputs, RelevanceAnalyzer};
pub use options::{RelevanceOptions, SubsectionOptions};
pub use persona::{JobType, PersonaJobClassifier, PersonaType};
pub use ranker::SectionRanker;
pub use scorer::RelevanceScorer;
pub use sectionizer::{default_patterns, DocumentSections, Sectionizer};
pub use subsection::SubsectionExtractor;
