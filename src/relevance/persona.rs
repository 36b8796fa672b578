//! Persona and job taxonomy.
//!
//! Free-text persona and job descriptions are mapped onto closed sets of
//! types, each carrying a keyword list used for scoring.

use std::fmt;

use serde::Serialize;

/// Reader archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaType {
    Researcher,
    Student,
    Analyst,
    Journalist,
    Entrepreneur,
    Salesperson,
}

impl PersonaType {
    /// All persona types in matching order.
    pub const ALL: [PersonaType; 6] = [
        PersonaType::Researcher,
        PersonaType::Student,
        PersonaType::Analyst,
        PersonaType::Journalist,
        PersonaType::Entrepreneur,
        PersonaType::Salesperson,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PersonaType::Researcher => "researcher",
            PersonaType::Student => "student",
            PersonaType::Analyst => "analyst",
            PersonaType::Journalist => "journalist",
            PersonaType::Entrepreneur => "entrepreneur",
            PersonaType::Salesperson => "salesperson",
        }
    }

    fn default_keywords(self) -> &'static [&'static str] {
        match self {
            PersonaType::Researcher => &[
                "research",
                "methodology",
                "analysis",
                "study",
                "experiment",
                "data",
                "results",
                "conclusion",
            ],
            PersonaType::Student => &[
                "learn",
                "understand",
                "concept",
                "definition",
                "example",
                "practice",
                "exam",
                "study",
            ],
            PersonaType::Analyst => &[
                "analysis",
                "trend",
                "performance",
                "metrics",
                "revenue",
                "growth",
                "market",
                "financial",
            ],
            PersonaType::Journalist => &[
                "news",
                "event",
                "report",
                "source",
                "fact",
                "interview",
                "story",
                "investigation",
            ],
            PersonaType::Entrepreneur => &[
                "business",
                "opportunity",
                "market",
                "strategy",
                "innovation",
                "profit",
                "customer",
            ],
            PersonaType::Salesperson => &[
                "sales", "customer", "product", "benefit", "price", "deal", "revenue", "target",
            ],
        }
    }
}

impl fmt::Display for PersonaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Task archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    LiteratureReview,
    FinancialAnalysis,
    ExamPreparation,
    MarketAnalysis,
    TechnicalReview,
}

impl JobType {
    /// All job types in matching order.
    pub const ALL: [JobType; 5] = [
        JobType::LiteratureReview,
        JobType::FinancialAnalysis,
        JobType::ExamPreparation,
        JobType::MarketAnalysis,
        JobType::TechnicalReview,
    ];

    pub fn key(self) -> &'static str {
        match self {
            JobType::LiteratureReview => "literature_review",
            JobType::FinancialAnalysis => "financial_analysis",
            JobType::ExamPreparation => "exam_preparation",
            JobType::MarketAnalysis => "market_analysis",
            JobType::TechnicalReview => "technical_review",
        }
    }

    fn default_keywords(self) -> &'static [&'static str] {
        match self {
            JobType::LiteratureReview => &[
                "literature",
                "review",
                "survey",
                "overview",
                "comparison",
                "methodology",
            ],
            JobType::FinancialAnalysis => &[
                "financial",
                "revenue",
                "profit",
                "cost",
                "investment",
                "roi",
                "budget",
            ],
            JobType::ExamPreparation => &[
                "key",
                "important",
                "concept",
                "definition",
                "formula",
                "example",
                "practice",
            ],
            JobType::MarketAnalysis => &[
                "market",
                "competition",
                "trend",
                "analysis",
                "share",
                "position",
                "strategy",
            ],
            JobType::TechnicalReview => &[
                "technical",
                "implementation",
                "algorithm",
                "method",
                "approach",
                "performance",
            ],
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Persona words checked when no type key appears literally.
const PERSONA_FALLBACKS: &[(&[&str], PersonaType)] = &[
    (&["phd", "research"], PersonaType::Researcher),
    (&["student", "undergraduate"], PersonaType::Student),
    (&["analyst", "investment"], PersonaType::Analyst),
    (&["journalist", "reporter"], PersonaType::Journalist),
    (&["entrepreneur", "business"], PersonaType::Entrepreneur),
    (&["sales"], PersonaType::Salesperson),
];

/// Job words checked when no type name appears literally.
const JOB_TRIGGERS: &[(&[&str], JobType)] = &[
    (&["literature review", "survey"], JobType::LiteratureReview),
    (&["financial", "revenue", "investment"], JobType::FinancialAnalysis),
    (&["exam", "study", "preparation"], JobType::ExamPreparation),
    (&["market", "competition"], JobType::MarketAnalysis),
    (&["technical", "algorithm", "method"], JobType::TechnicalReview),
];

/// Maps persona and job text onto the taxonomy and owns its keyword tables.
#[derive(Debug, Clone)]
pub struct PersonaJobClassifier {
    persona_keywords: Vec<(PersonaType, Vec<String>)>,
    job_keywords: Vec<(JobType, Vec<String>)>,
}

impl Default for PersonaJobClassifier {
    fn default() -> Self {
        Self {
            persona_keywords: PersonaType::ALL
                .iter()
                .map(|&p| (p, to_owned(p.default_keywords())))
                .collect(),
            job_keywords: JobType::ALL
                .iter()
                .map(|&j| (j, to_owned(j.default_keywords())))
                .collect(),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl PersonaJobClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keywords of one persona type.
    pub fn with_persona_keywords<S: Into<String>>(
        mut self,
        persona: PersonaType,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        let keywords = keywords.into_iter().map(Into::into).collect();
        if let Some(entry) = self.persona_keywords.iter_mut().find(|(p, _)| *p == persona) {
            entry.1 = keywords;
        }
        self
    }

    /// Replace the keywords of one job type.
    pub fn with_job_keywords<S: Into<String>>(
        mut self,
        job: JobType,
        keywords: impl IntoIterator<Item = S>,
    ) -> Self {
        let keywords = keywords.into_iter().map(Into::into).collect();
        if let Some(entry) = self.job_keywords.iter_mut().find(|(j, _)| *j == job) {
            entry.1 = keywords;
        }
        self
    }

    pub fn persona_keywords(&self, persona: PersonaType) -> &[String] {
        self.persona_keywords
            .iter()
            .find(|(p, _)| *p == persona)
            .map(|(_, k)| k.as_slice())
            .unwrap_or(&[])
    }

    pub fn job_keywords(&self, job: JobType) -> &[String] {
        self.job_keywords
            .iter()
            .find(|(j, _)| *j == job)
            .map(|(_, k)| k.as_slice())
            .unwrap_or(&[])
    }

    /// Persona type for free text. Defaults to researcher.
    pub fn classify_persona(&self, persona: &str) -> PersonaType {
        let persona = persona.to_lowercase();

        if let Some(found) = PersonaType::ALL.into_iter().find(|p| persona.contains(p.key())) {
            return found;
        }

        PERSONA_FALLBACKS
            .iter()
            .find(|(words, _)| words.iter().any(|w| persona.contains(w)))
            .map(|(_, p)| *p)
            .unwrap_or(PersonaType::Researcher)
    }

    /// Job type for free text. Defaults to literature review.
    pub fn classify_job(&self, job: &str) -> JobType {
        let job = job.to_lowercase();

        if let Some(found) = JobType::ALL
            .into_iter()
            .find(|j| job.contains(j.key()))
        {
            return found;
        }

        JOB_TRIGGERS
            .iter()
            .find(|(words, _)| words.iter().any(|w| job.contains(w)))
            .map(|(_, j)| *j)
            .unwrap_or(JobType::LiteratureReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_literal_key() {
        let classifier = PersonaJobClassifier::new();
        assert_eq!(
            classifier.classify_persona("Senior Investment Analyst"),
            PersonaType::Analyst
        );
        assert_eq!(
            classifier.classify_persona("Undergraduate Chemistry Student"),
            PersonaType::Student
        );
        assert_eq!(classifier.classify_persona("SALESPERSON"), PersonaType::Salesperson);
    }

    #[test]
    fn test_persona_fallbacks() {
        let classifier = PersonaJobClassifier::new();
        assert_eq!(
            classifier.classify_persona("PhD Researcher in Computational Biology"),
            PersonaType::Researcher
        );
        assert_eq!(classifier.classify_persona("investment banker"), PersonaType::Analyst);
        assert_eq!(classifier.classify_persona("TV reporter"), PersonaType::Journalist);
        assert_eq!(classifier.classify_persona("small business owner"), PersonaType::Entrepreneur);
        assert_eq!(classifier.classify_persona("regional sales lead"), PersonaType::Salesperson);
    }

    #[test]
    fn test_persona_default() {
        let classifier = PersonaJobClassifier::new();
        assert_eq!(classifier.classify_persona("Food Critic"), PersonaType::Researcher);
        assert_eq!(classifier.classify_persona(""), PersonaType::Researcher);
    }

    #[test]
    fn test_job_classification() {
        let classifier = PersonaJobClassifier::new();
        let cases = [
            ("Prepare a literature review focused on methodology", JobType::LiteratureReview),
            ("Summarize revenue trends", JobType::FinancialAnalysis),
            ("Identify key concepts for exam preparation", JobType::ExamPreparation),
            ("Assess the competition", JobType::MarketAnalysis),
            ("Compare algorithm choices", JobType::TechnicalReview),
            ("Do a market analysis of revenue", JobType::FinancialAnalysis),
            ("Technical review of investment returns", JobType::FinancialAnalysis),
            ("Write a technical_review of the design", JobType::TechnicalReview),
            ("Plan a dinner menu", JobType::LiteratureReview),
        ];
        for (job, expected) in cases {
            assert_eq!(classifier.classify_job(job), expected, "{}", job);
        }
    }

    #[test]
    fn test_keyword_tables_substitutable() {
        let classifier = PersonaJobClassifier::new()
            .with_persona_keywords(PersonaType::Student, ["flashcard"])
            .with_job_keywords(JobType::TechnicalReview, vec!["benchmark".to_string()]);
        assert_eq!(classifier.persona_keywords(PersonaType::Student), ["flashcard"]);
        assert_eq!(classifier.job_keywords(JobType::TechnicalReview), ["benchmark"]);
        assert_eq!(classifier.persona_keywords(PersonaType::Researcher).len(), 8);
    }

    #[test]
    fn test_display_keys() {
        assert_eq!(PersonaType::Salesperson.to_string(), "salesperson");
        assert_eq!(JobType::ExamPreparation.to_string(), "exam_preparation");
    }
}
