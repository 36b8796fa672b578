//! Persona/job relevance runs.

use super::sectionizer::file_stem;
use super::{
    DocumentSections, PersonaJobClassifier, RelevanceOptions, RelevanceScorer, SectionRanker,
    Sectionizer,
};
use crate::error::{Error, Result};
use crate::model::{RelevanceReport, ReportMetadata};
use crate::outline::TitleResolver;
use crate::source::DocumentSource;

/// Runs the relevance pipeline: sectionize, score, rank, excerpt.
#[derive(Debug, Clone)]
pub struct RelevanceAnalyzer {
    options: RelevanceOptions,
    classifier: PersonaJobClassifier,
    sectionizer: Sectionizer,
    ranker: SectionRanker,
    titles: TitleResolver,
}

impl RelevanceAnalyzer {
    pub fn new(options: RelevanceOptions) -> Self {
        Self {
            classifier: PersonaJobClassifier::default(),
            sectionizer: Sectionizer::new(&options),
            ranker: SectionRanker::new(&options),
            titles: TitleResolver::default(),
            options,
        }
    }

    /// Use a custom persona/job classifier.
    pub fn with_classifier(mut self, classifier: PersonaJobClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Use a custom sectionizer.
    pub fn with_sectionizer(mut self, sectionizer: Sectionizer) -> Self {
        self.sectionizer = sectionizer;
        self
    }

    pub fn options(&self) -> &RelevanceOptions {
        &self.options
    }

    pub fn classifier(&self) -> &PersonaJobClassifier {
        &self.classifier
    }

    /// Read a document into sections. Unreadable pages are skipped.
    pub fn sectionize(&self, source: &dyn DocumentSource) -> DocumentSections {
        let name = source.name().to_string();
        let title = self.titles.resolve(source, file_stem(&name));
        let sections = self.sectionizer.sectionize(source);
        log::info!("{}: {} sections", name, sections.len());

        DocumentSections {
            name,
            title,
            sections,
            page_count: source.page_count(),
        }
    }

    /// Rank the sections of `documents` for a persona and job.
    pub fn analyze(
        &self,
        documents: &[DocumentSections],
        persona: &str,
        job: &str,
    ) -> Result<RelevanceReport> {
        let (persona, job) = validate_inputs(persona, job)?;
        if documents.is_empty() {
            return Err(Error::NoDocuments);
        }

        let scorer = RelevanceScorer::new(&self.classifier, persona, job);
        let scored = self.ranker.score_all(&scorer, documents);
        let total_sections_analyzed = scored.len();
        let ranked = self.ranker.rank(scored);
        let extracted_sections = self.ranker.extract(&ranked);

        log::info!(
            "ranked {} of {} sections across {} documents",
            extracted_sections.len(),
            total_sections_analyzed,
            documents.len()
        );

        let metadata = ReportMetadata {
            input_documents: documents.iter().map(|d| d.name.clone()).collect(),
            persona: persona.to_string(),
            job_to_be_done: job.to_string(),
            processing_timestamp: timestamp(),
            total_documents: documents.len(),
            total_sections_analyzed,
        };
        Ok(RelevanceReport::new(metadata, extracted_sections))
    }

    /// Sectionize and rank in one step.
    pub fn analyze_sources(
        &self,
        sources: &[&dyn DocumentSource],
        persona: &str,
        job: &str,
    ) -> Result<RelevanceReport> {
        validate_inputs(persona, job)?;
        let documents: Vec<_> = sources.iter().map(|s| self.sectionize(*s)).collect();
        self.analyze(&documents, persona, job)
    }
}

impl Default for RelevanceAnalyzer {
    fn default() -> Self {
        Self::new(RelevanceOptions::default())
    }
}

/// Trimmed persona and job, or an error naming the blank one.
pub fn validate_inputs<'a>(persona: &'a str, job: &'a str) -> Result<(&'a str, &'a str)> {
    let persona = persona.trim();
    if persona.is_empty() {
        return Err(Error::MissingInput("persona".to_string()));
    }
    let job = job.trim();
    if job.is_empty() {
        return Err(Error::MissingInput("job to be done".to_string()));
    }
    Ok((persona, job))
}

/// Local time, ISO-8601 with microseconds.
fn timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryDocument;

    fn paper() -> MemoryDocument {
        MemoryDocument::new("paper.pdf").with_text(
            "Graph Methods in Biology\n\n\
             1. Methodology\n\n\
             our methodology combines analysis of data from three labs.\n\n\
             2. Acknowledgements\n\n\
             we thank the staff who kindly helped during the project.",
        )
    }

    #[test]
    fn test_sectionize_uses_title_and_name() {
        let doc = RelevanceAnalyzer::default().sectionize(&paper());
        assert_eq!(doc.name, "paper.pdf");
        assert_eq!(doc.title, "Graph Methods in Biology");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.page_count, 1);
    }

    #[test]
    fn test_title_falls_back_to_stem() {
        let doc = RelevanceAnalyzer::default()
            .sectionize(&MemoryDocument::new("notes.pdf").with_text("tiny"));
        assert_eq!(doc.title, "notes");
    }

    #[test]
    fn test_missing_inputs() {
        let analyzer = RelevanceAnalyzer::default();
        let docs = vec![analyzer.sectionize(&paper())];

        let err = analyzer.analyze(&docs, "  ", "review").unwrap_err();
        assert!(matches!(err, Error::MissingInput(ref what) if what == "persona"));

        let err = analyzer.analyze(&docs, "Researcher", "").unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));

        let err = analyzer.analyze(&[], "Researcher", "review").unwrap_err();
        assert!(matches!(err, Error::NoDocuments));
    }

    #[test]
    fn test_report_metadata() {
        let analyzer = RelevanceAnalyzer::default();
        let docs = vec![
            analyzer.sectionize(&paper()),
            DocumentSections::empty("broken.pdf"),
        ];

        let report = analyzer
            .analyze(&docs, " PhD Researcher ", "Prepare a literature review")
            .unwrap();

        assert_eq!(report.metadata.persona, "PhD Researcher");
        assert_eq!(report.metadata.input_documents, vec!["paper.pdf", "broken.pdf"]);
        assert_eq!(report.metadata.total_documents, 2);
        assert_eq!(report.metadata.total_sections_analyzed, 2);
        assert_eq!(report.extracted_sections[0].section_title, "1. Methodology");
        assert!(chrono::NaiveDateTime::parse_from_str(
            &report.metadata.processing_timestamp,
            "%Y-%m-%dT%H:%M:%S%.f"
        )
        .is_ok());
    }
}
