//! # docsift
//!
//! Structure and relevance extraction for PDF documents.
//!
//! The library derives two kinds of structured output from PDF text:
//!
//! - an **outline**: the document title plus H1-H3 headings inferred from
//!   numbering patterns and typography;
//! - a **relevance report**: document sections ranked for a reader persona
//!   and a job to be done, with short excerpts of the best sections.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::{extract_outline, render};
//!
//! fn main() -> docsift::Result<()> {
//!     let outline = extract_outline("report.pdf");
//!     println!("{}", render::to_json(&outline, render::JsonFormat::Pretty)?);
//!
//!     let report = docsift::analyze_files(
//!         &["paper1.pdf", "paper2.pdf"],
//!         "PhD Researcher in Computational Biology",
//!         "Prepare a literature review focused on methodology",
//!         &docsift::RelevanceOptions::default(),
//!     )?;
//!     println!("{} sections ranked", report.extracted_sections.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two-pass heading detection**: font statistics cover the whole document
//! - **Persona taxonomy**: free-text personas and jobs map to keyword sets
//! - **Failure isolation**: bad pages are skipped, bad documents degrade
//! - **Pluggable extraction**: any [`source::DocumentSource`] can be analyzed
//! - **Parallel processing**: Uses Rayon across documents

pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod relevance;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, find_pdfs, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{
    ExtractedSection, Heading, HeadingLevel, Outline, RelevanceReport, ReportMetadata, Section,
    SubsectionAnalysis, TextSpan,
};
pub use outline::{OutlineBuilder, OutlineOptions};
pub use relevance::{RelevanceAnalyzer, RelevanceOptions, SubsectionOptions};
pub use render::JsonFormat;
pub use source::{DocumentSource, MemoryDocument, PdfSource};

use std::path::Path;

use rayon::prelude::*;

use relevance::DocumentSections;

/// Extract the outline of a PDF file.
///
/// Never fails: a document that cannot be opened yields the
/// "Error Processing Document" placeholder.
///
/// # Example
///
/// ```no_run
/// use docsift::extract_outline;
///
/// let outline = extract_outline("report.pdf");
/// for heading in &outline.headings {
///     println!("{} {} (p{})", heading.level, heading.text, heading.page);
/// }
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Outline {
    extract_outline_with_options(path, &OutlineOptions::default())
}

/// Extract the outline of a PDF file with custom options.
pub fn extract_outline_with_options<P: AsRef<Path>>(path: P, options: &OutlineOptions) -> Outline {
    let builder = OutlineBuilder::new(options.clone());
    outline_from_path(&builder, path.as_ref())
}

/// Extract outlines of several PDF files, in input order.
///
/// # Example
///
/// ```no_run
/// use docsift::{extract_outlines, OutlineOptions};
///
/// let files = docsift::find_pdfs("input")?;
/// let outlines = extract_outlines(&files, &OutlineOptions::new().parallel());
/// # Ok::<(), docsift::Error>(())
/// ```
pub fn extract_outlines<P>(paths: &[P], options: &OutlineOptions) -> Vec<Outline>
where
    P: AsRef<Path> + Sync,
{
    let builder = OutlineBuilder::new(options.clone());

    if options.parallel {
        paths
            .par_iter()
            .map(|p| outline_from_path(&builder, p.as_ref()))
            .collect()
    } else {
        paths
            .iter()
            .map(|p| outline_from_path(&builder, p.as_ref()))
            .collect()
    }
}

fn outline_from_path(builder: &OutlineBuilder, path: &Path) -> Outline {
    match PdfSource::open(path) {
        Ok(source) => builder.build(&source),
        Err(e) => {
            log::error!("{}: {}", path.display(), e);
            Outline::error_placeholder()
        }
    }
}

/// Rank the sections of several PDF files for a persona and job.
///
/// Documents that cannot be opened are listed in the report metadata but
/// contribute no sections. Blank persona or job text, or an empty file
/// list, is an error.
pub fn analyze_files<P>(
    paths: &[P],
    persona: &str,
    job: &str,
    options: &RelevanceOptions,
) -> Result<RelevanceReport>
where
    P: AsRef<Path> + Sync,
{
    relevance::validate_inputs(persona, job)?;
    if paths.is_empty() {
        return Err(Error::NoDocuments);
    }

    let analyzer = RelevanceAnalyzer::new(options.clone());
    log::info!("analyzing {} documents", paths.len());

    let documents: Vec<DocumentSections> = if options.parallel {
        paths
            .par_iter()
            .map(|p| sections_from_path(&analyzer, p.as_ref()))
            .collect()
    } else {
        paths
            .iter()
            .map(|p| sections_from_path(&analyzer, p.as_ref()))
            .collect()
    };

    analyzer.analyze(&documents, persona, job)
}

fn sections_from_path(analyzer: &RelevanceAnalyzer, path: &Path) -> DocumentSections {
    match PdfSource::open(path) {
        Ok(source) => analyzer.sectionize(&source),
        Err(e) => {
            log::error!("{}: {}", path.display(), e);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            DocumentSections::empty(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // ==================== Outline Entry Points ====================

    #[test]
    fn test_extract_outline_missing_file() {
        let outline = extract_outline("does/not/exist.pdf");
        assert!(outline.is_error_placeholder());
    }

    #[test]
    fn test_extract_outline_not_a_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        fs::write(&path, b"plain text pretending to be a pdf").unwrap();

        let outline = extract_outline(&path);
        assert_eq!(outline.title, "Error Processing Document");
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_extract_outlines_keeps_order() {
        let paths = ["a/missing.pdf", "b/missing.pdf"];
        let sequential = extract_outlines(&paths, &OutlineOptions::default());
        let parallel = extract_outlines(&paths, &OutlineOptions::new().parallel());
        assert_eq!(sequential.len(), 2);
        assert_eq!(sequential, parallel);
    }

    // ==================== Relevance Entry Points ====================

    #[test]
    fn test_analyze_files_requires_inputs() {
        let paths = ["x.pdf"];
        let options = RelevanceOptions::default();

        assert!(matches!(
            analyze_files(&paths, "", "review", &options),
            Err(Error::MissingInput(_))
        ));
        assert!(matches!(
            analyze_files(&paths, "Analyst", "   ", &options),
            Err(Error::MissingInput(_))
        ));

        let none: [&str; 0] = [];
        assert!(matches!(
            analyze_files(&none, "Analyst", "review", &options),
            Err(Error::NoDocuments)
        ));
    }

    #[test]
    fn test_analyze_files_lists_unreadable_documents() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.pdf");
        fs::write(&broken, b"%PDF-1.7\ntruncated").unwrap();

        let report = analyze_files(
            &[broken.as_path()],
            "Investment Analyst",
            "Analyze revenue trends",
            &RelevanceOptions::default().parallel(),
        )
        .unwrap();

        assert_eq!(report.metadata.input_documents, vec!["broken.pdf"]);
        assert_eq!(report.metadata.total_documents, 1);
        assert_eq!(report.metadata.total_sections_analyzed, 0);
        assert!(report.extracted_sections.is_empty());
        assert!(report.subsection_analysis.is_empty());
    }
}
