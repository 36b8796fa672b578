//! Outline assembly across all pages of a document.

use std::collections::HashSet;

use super::{FontStatistics, HeadingClassifier, OutlineOptions, TitleResolver};
use crate::model::{Heading, Line, Outline};
use crate::source::{DocumentSource, SpanAggregator};

/// Builds an [`Outline`] from a document source.
///
/// Statistics are taken over every eligible line of the document before
/// any line is classified, so a heading on page 1 is judged against the
/// same averages as one on the last page.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    options: OutlineOptions,
    aggregator: SpanAggregator,
    classifier: HeadingClassifier,
    titles: TitleResolver,
}

impl OutlineBuilder {
    pub fn new(options: OutlineOptions) -> Self {
        let classifier = HeadingClassifier::new(&options);
        Self::with_classifier(options, classifier)
    }

    /// Builder using a custom classifier.
    pub fn with_classifier(options: OutlineOptions, classifier: HeadingClassifier) -> Self {
        Self {
            options,
            aggregator: SpanAggregator::default(),
            classifier,
            titles: TitleResolver::default(),
        }
    }

    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Extract the outline of `source`.
    pub fn build(&self, source: &dyn DocumentSource) -> Outline {
        let title = self.titles.resolve(source, &self.options.fallback_title);
        let lines = self.eligible_lines(source);
        let headings = self.headings(&lines);

        log::info!(
            "{}: {} headings from {} lines",
            source.name(),
            headings.len(),
            lines.len()
        );
        Outline::new(title, headings)
    }

    /// All lines of the document long enough to be considered, in page order.
    pub fn eligible_lines(&self, source: &dyn DocumentSource) -> Vec<Line> {
        let mut lines = Vec::new();

        for page in 1..=source.page_count() {
            let spans = match source.page_spans(page) {
                Ok(spans) => spans,
                Err(e) => {
                    log::warn!("{}: skipping page {}: {}", source.name(), page, e);
                    continue;
                }
            };

            lines.extend(
                self.aggregator
                    .lines(&spans)
                    .into_iter()
                    .filter(|line| line.char_len() > self.options.min_line_len),
            );
        }

        lines
    }

    /// Classify lines into deduplicated headings sorted by page.
    pub fn headings(&self, lines: &[Line]) -> Vec<Heading> {
        let Some(stats) = FontStatistics::from_lines(lines) else {
            return Vec::new();
        };
        log::debug!(
            "font statistics: avg {:.2}, max {:.2}",
            stats.avg_font_size,
            stats.max_font_size
        );

        let mut seen: HashSet<(&str, u32)> = HashSet::new();
        let mut headings = Vec::new();

        for line in lines {
            let Some(level) = self.classifier.classify(line, &stats) else {
                continue;
            };
            if !seen.insert((line.text.as_str(), line.page)) {
                continue;
            }
            log::debug!("{} p{}: {}", level, line.page, line.text);
            headings.push(Heading::new(level, line.text.clone(), line.page));
        }

        headings.sort_by_key(|h| h.page);
        headings
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new(OutlineOptions::default())
    }
}
