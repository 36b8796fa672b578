//! Keyword relevance scoring.

use super::{JobType, PersonaJobClassifier, PersonaType};

/// Weight of one persona keyword occurrence.
const PERSONA_WEIGHT: f64 = 1.0;
/// Weight of one job keyword occurrence.
const JOB_WEIGHT: f64 = 1.5;
/// Weight of one occurrence of a word taken from the job description.
const JOB_TERM_WEIGHT: f64 = 0.5;

const STOP_WORDS: &[&str] = &["the", "and", "for", "with", "from"];

/// Scores section text against one persona and job.
///
/// Classification happens once at construction; every section of a run is
/// then scored with the same keyword sets.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    persona: PersonaType,
    job: JobType,
    persona_keywords: Vec<String>,
    job_keywords: Vec<String>,
    job_terms: Vec<String>,
}

impl RelevanceScorer {
    pub fn new(classifier: &PersonaJobClassifier, persona: &str, job: &str) -> Self {
        let persona_type = classifier.classify_persona(persona);
        let job_type = classifier.classify_job(job);
        log::info!("persona type: {}, job type: {}", persona_type, job_type);

        Self {
            persona: persona_type,
            job: job_type,
            persona_keywords: lowercase(classifier.persona_keywords(persona_type)),
            job_keywords: lowercase(classifier.job_keywords(job_type)),
            job_terms: job_terms(job),
        }
    }

    pub fn persona_type(&self) -> PersonaType {
        self.persona
    }

    pub fn job_type(&self) -> JobType {
        self.job
    }

    /// Words of the job description that count toward the score.
    pub fn job_terms(&self) -> &[String] {
        &self.job_terms
    }

    /// Weighted keyword occurrences, before length normalization.
    pub fn raw_score(&self, content: &str) -> f64 {
        let text = content.to_lowercase();

        let persona: usize = self.persona_keywords.iter().map(|k| occurrences(&text, k)).sum();
        let job: usize = self.job_keywords.iter().map(|k| occurrences(&text, k)).sum();
        let terms: usize = self.job_terms.iter().map(|t| occurrences(&text, t)).sum();

        persona as f64 * PERSONA_WEIGHT + job as f64 * JOB_WEIGHT + terms as f64 * JOB_TERM_WEIGHT
    }

    /// Raw score divided by `ln(word_count + 1)`.
    pub fn score(&self, content: &str) -> f64 {
        let raw = self.raw_score(content);
        let word_count = content.split_whitespace().count();
        if word_count == 0 {
            return raw;
        }
        raw / ((word_count + 1) as f64).ln()
    }
}

fn lowercase(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Lower-cased job words longer than three characters, minus stop words.
/// Repeated words are kept and count again.
fn job_terms(job: &str) -> Vec<String> {
    job.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 3 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Non-overlapping literal occurrences.
fn occurrences(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer(persona: &str, job: &str) -> RelevanceScorer {
        RelevanceScorer::new(&PersonaJobClassifier::new(), persona, job)
    }

    #[test]
    fn test_job_terms() {
        let s = scorer("Researcher", "Review the data from these studies with care");
        assert_eq!(s.job_terms(), ["review", "data", "these", "studies", "care"]);
    }

    #[test]
    fn test_raw_score_weights() {
        // researcher + literature_review; job words: "survey", "papers"
        let s = scorer("Researcher", "survey papers");
        assert_eq!(s.persona_type(), PersonaType::Researcher);
        assert_eq!(s.job_type(), JobType::LiteratureReview);

        assert_eq!(s.raw_score("plain words only"), 0.0);
        // "data": persona keyword
        assert_eq!(s.raw_score("data"), 1.0);
        // "comparison": job keyword
        assert_eq!(s.raw_score("comparison"), 1.5);
        // "survey": job keyword and job term
        assert_eq!(s.raw_score("Survey"), 2.0);
        // "methodology": persona and job keyword
        assert_eq!(s.raw_score("methodology"), 2.5);
    }

    #[test]
    fn test_more_keywords_raise_raw_score() {
        let s = scorer("Financial Analyst", "Summarize revenue growth");
        let base = s.raw_score("the quarter closed with revenue up");
        let more = s.raw_score("the quarter closed with revenue up and revenue beat plan");
        assert!(more > base);
    }

    #[test]
    fn test_padding_lowers_score() {
        let s = scorer("Researcher", "literature review");
        let dense = "methodology and analysis of the data";
        let padded = format!("{} {}", dense, "lorem ipsum dolor ".repeat(10));
        assert_eq!(s.raw_score(dense), s.raw_score(&padded));
        assert!(s.score(&padded) < s.score(dense));
    }

    #[test]
    fn test_normalization() {
        let s = scorer("Researcher", "literature review");
        // 3 words, one "data" hit
        let score = s.score("the data set");
        assert!((score - 1.0 / 4f64.ln()).abs() < 1e-12);
        assert_eq!(s.score(""), 0.0);
    }

    #[test]
    fn test_counts_are_substring_counts() {
        let s = scorer("Researcher", "x");
        // "research" inside "researchers" plus "researched"
        assert_eq!(s.raw_score("researchers researched"), 2.0);
    }
}
