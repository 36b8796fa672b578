//! Integration tests for persona-driven section ranking.

use docsift::error::Error;
use docsift::relevance::{
    DocumentSections, JobType, PersonaJobClassifier, PersonaType, RelevanceAnalyzer,
    RelevanceOptions, RelevanceScorer,
};
use docsift::source::{DocumentSource, MemoryDocument};

const PERSONA: &str = "PhD Researcher in Computational Biology";
const JOB: &str = "Prepare a literature review focused on methodology";

/// Two sections of identical length: one dense with keywords, one without.
fn paper() -> MemoryDocument {
    MemoryDocument::new("paper.pdf").with_text(
        "Protein Folding Benchmarks\n\n\
         1. Methodology\n\n\
         methodology analysis methodology analysis methodology analysis.\n\n\
         2. Venue\n\n\
         located downtown near the harbour parking.",
    )
}

/// A section with many long sentences.
fn notes() -> MemoryDocument {
    MemoryDocument::new("notes.pdf").with_text(
        "Lab Notes\n\n\
         the first sentence of the notes is long enough. \
         the second sentence of the notes is long enough. \
         the third sentence of the notes is long enough. \
         the fourth sentence of the notes is long enough. \
         the fifth sentence of the notes covers the data analysis.",
    )
}

fn many_sections(count: usize) -> MemoryDocument {
    let text = (0..count)
        .map(|i| {
            format!(
                "Section Heading {}\n\nresults of the study number {} were recorded in detail.",
                i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    MemoryDocument::new("many.pdf").with_text(text)
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_reference_persona_and_job() {
    let classifier = PersonaJobClassifier::default();
    assert_eq!(classifier.classify_persona(PERSONA), PersonaType::Researcher);
    assert_eq!(classifier.classify_job(JOB), JobType::LiteratureReview);

    let scorer = RelevanceScorer::new(&classifier, PERSONA, JOB);
    assert_eq!(scorer.persona_type(), PersonaType::Researcher);
    assert_eq!(scorer.job_type(), JobType::LiteratureReview);
}

#[test]
fn test_job_triggers_checked_in_table_order() {
    let classifier = PersonaJobClassifier::default();
    let cases = [
        ("Technical review of investment returns", JobType::FinancialAnalysis),
        ("Market analysis of the exam season", JobType::ExamPreparation),
        ("Survey of market competition", JobType::LiteratureReview),
        ("Review the algorithm used by the market", JobType::MarketAnalysis),
        ("Explain the sorting algorithm", JobType::TechnicalReview),
    ];
    for (job, expected) in cases {
        assert_eq!(classifier.classify_job(job), expected, "{}", job);
    }

    // A job naming an investment focus scores against the financial keywords
    let scorer = RelevanceScorer::new(
        &classifier,
        PERSONA,
        "Technical review of investment returns",
    );
    assert_eq!(scorer.job_type(), JobType::FinancialAnalysis);
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_keyword_dense_section_ranks_first() {
    let analyzer = RelevanceAnalyzer::default();
    let docs = vec![analyzer.sectionize(&paper())];
    let report = analyzer.analyze(&docs, PERSONA, JOB).unwrap();

    let titles: Vec<_> = report
        .extracted_sections
        .iter()
        .map(|s| s.section_title.as_str())
        .collect();
    assert_eq!(titles, vec!["1. Methodology", "2. Venue"]);
    assert!(
        report.extracted_sections[0].relevance_score
            > report.extracted_sections[1].relevance_score
    );
    assert_eq!(report.extracted_sections[1].relevance_score, 0.0);
}

#[test]
fn test_top_k_and_rank_invariants() {
    let analyzer = RelevanceAnalyzer::default();
    let docs = vec![analyzer.sectionize(&many_sections(14))];
    let report = analyzer.analyze(&docs, PERSONA, JOB).unwrap();

    assert_eq!(report.metadata.total_sections_analyzed, 14);
    assert_eq!(report.extracted_sections.len(), 10);

    for (i, section) in report.extracted_sections.iter().enumerate() {
        assert_eq!(section.importance_rank, i + 1);
    }
    assert!(report
        .extracted_sections
        .windows(2)
        .all(|w| w[0].relevance_score >= w[1].relevance_score));
}

#[test]
fn test_custom_top_k() {
    let analyzer = RelevanceAnalyzer::new(RelevanceOptions::new().with_top_k(3));
    let docs = vec![analyzer.sectionize(&many_sections(5))];
    let report = analyzer.analyze(&docs, PERSONA, JOB).unwrap();
    assert_eq!(report.extracted_sections.len(), 3);
}

// ============================================================================
// Subsections
// ============================================================================

#[test]
fn test_subsections_grouped_and_flattened() {
    let analyzer = RelevanceAnalyzer::default();
    let docs = vec![analyzer.sectionize(&paper()), analyzer.sectionize(&notes())];
    let report = analyzer.analyze(&docs, PERSONA, JOB).unwrap();

    let lab = report
        .extracted_sections
        .iter()
        .find(|s| s.section_title == "Lab Notes")
        .unwrap();
    assert_eq!(lab.subsections.len(), 3);
    assert_eq!(
        lab.subsections[0].refined_text,
        "the first sentence of the notes is long enough. the second sentence of the notes is long enough."
    );
    assert_eq!(
        lab.subsections[2].refined_text,
        "the fifth sentence of the notes covers the data analysis."
    );

    let expected: Vec<_> = report
        .extracted_sections
        .iter()
        .flat_map(|s| s.subsections.iter().cloned())
        .collect();
    assert_eq!(report.subsection_analysis, expected);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unreadable_document_still_listed() {
    let analyzer = RelevanceAnalyzer::default();
    let broken = MemoryDocument::new("broken.pdf").with_failed_page("xref damaged");
    let good = paper();
    let sources: Vec<&dyn DocumentSource> = vec![&broken, &good];
    let report = analyzer.analyze_sources(&sources, PERSONA, JOB).unwrap();

    assert_eq!(report.metadata.input_documents, vec!["broken.pdf", "paper.pdf"]);
    assert_eq!(report.metadata.total_documents, 2);
    assert!(report.extracted_sections.iter().all(|s| s.document == "paper.pdf"));
}

#[test]
fn test_run_errors() {
    let analyzer = RelevanceAnalyzer::default();
    let docs = vec![DocumentSections::empty("a.pdf")];

    assert!(matches!(
        analyzer.analyze(&docs, "", JOB),
        Err(Error::MissingInput(_))
    ));
    assert!(matches!(
        analyzer.analyze(&docs, PERSONA, " \n"),
        Err(Error::MissingInput(_))
    ));
    assert!(matches!(
        analyzer.analyze(&[], PERSONA, JOB),
        Err(Error::NoDocuments)
    ));
}
