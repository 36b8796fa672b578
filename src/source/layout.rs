//! Line and block grouping for extracted spans.

use std::cmp::Ordering;

use crate::model::{Line, TextSpan};

/// Merges spans sharing a baseline into [`Line`]s and lines into text blocks.
#[derive(Debug, Clone)]
pub struct SpanAggregator {
    /// Baseline drift allowed within one line, as a fraction of font size
    pub baseline_tolerance: f32,
    /// Line gap, relative to the page's average, that starts a new block
    pub block_gap_ratio: f32,
    /// Font size change in points that starts a new block
    pub block_font_delta: f32,
}

impl Default for SpanAggregator {
    fn default() -> Self {
        Self {
            baseline_tolerance: 0.3,
            block_gap_ratio: 1.5,
            block_font_delta: 1.0,
        }
    }
}

impl SpanAggregator {
    /// Create an aggregator with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group consecutive spans into lines.
    ///
    /// Spans are expected top to bottom. A span joins the open line when it
    /// is on the same page and its baseline lies within tolerance of the
    /// line's first span; whitespace-only spans are dropped. Each line's
    /// spans are ordered by x, then their trimmed contents are joined by
    /// single spaces.
    pub fn lines(&self, spans: &[TextSpan]) -> Vec<Line> {
        let mut groups: Vec<Vec<&TextSpan>> = Vec::new();

        for span in spans {
            if span.content.trim().is_empty() {
                continue;
            }

            if let Some(group) = groups.last_mut() {
                let first = group[0];
                let tolerance = span.font_size * self.baseline_tolerance;
                if first.page == span.page && (span.baseline - first.baseline).abs() <= tolerance
                {
                    group.push(span);
                    continue;
                }
            }
            groups.push(vec![span]);
        }

        groups.into_iter().map(line_from_spans).collect()
    }

    /// Render lines as page text: a newline between lines of a block and a
    /// blank line between blocks.
    pub fn page_text(&self, lines: &[Line]) -> String {
        let avg_spacing = average_line_spacing(lines);
        let mut text = String::new();

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                if self.breaks_block(&lines[i - 1], line, avg_spacing) {
                    text.push_str("\n\n");
                } else {
                    text.push('\n');
                }
            }
            text.push_str(&line.text);
        }

        text
    }

    fn breaks_block(&self, prev: &Line, curr: &Line, avg_spacing: f32) -> bool {
        if prev.page != curr.page {
            return true;
        }

        let spacing = (prev.baseline - curr.baseline).abs();
        if spacing > avg_spacing * self.block_gap_ratio {
            return true;
        }

        (prev.font_size - curr.font_size).abs() > self.block_font_delta
    }
}

fn line_from_spans(mut spans: Vec<&TextSpan>) -> Line {
    let baseline = spans[0].baseline;
    spans.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    let text = spans
        .iter()
        .map(|s| s.content.trim())
        .collect::<Vec<_>>()
        .join(" ");

    Line {
        text,
        font_size: spans.iter().map(|s| s.font_size).fold(0.0, f32::max),
        bold: spans.iter().any(|s| s.bold),
        page: spans[0].page,
        baseline,
    }
}

fn average_line_spacing(lines: &[Line]) -> f32 {
    let spacings: Vec<f32> = lines
        .windows(2)
        .filter(|w| w[0].page == w[1].page)
        .map(|w| (w[0].baseline - w[1].baseline).abs())
        .filter(|s| *s > 0.1)
        .collect();

    if spacings.is_empty() {
        return 12.0;
    }

    spacings.iter().sum::<f32>() / spacings.len() as f32
}
