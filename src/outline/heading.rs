//! Heading detection from text shape and typography.
//!
//! Classification runs an ordered rule list, first match wins: numbering
//! and chapter patterns, then font size relative to the document, then
//! upper-case lines. A separate set of shape patterns marks lines that look
//! like headings even when no rule assigns a level.

use regex::Regex;

use super::OutlineOptions;
use crate::model::{HeadingLevel, Line};

/// Document-wide font statistics over eligible lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStatistics {
    pub avg_font_size: f32,
    pub max_font_size: f32,
}

impl FontStatistics {
    pub fn new(avg_font_size: f32, max_font_size: f32) -> Self {
        Self {
            avg_font_size,
            max_font_size,
        }
    }

    /// Mean and maximum font size, or `None` when there are no lines.
    pub fn from_lines<'a, I>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Line>,
    {
        let mut count = 0usize;
        let mut sum = 0.0f32;
        let mut max = 0.0f32;
        for line in lines {
            count += 1;
            sum += line.font_size;
            max = max.max(line.font_size);
        }

        if count == 0 {
            return None;
        }
        Some(Self::new(sum / count as f32, max))
    }

    /// Font size relative to the average; 1.0 when the average is zero.
    pub fn ratio(&self, font_size: f32) -> f32 {
        if self.avg_font_size > 0.0 {
            font_size / self.avg_font_size
        } else {
            1.0
        }
    }
}

/// One step of the heading cascade.
#[derive(Debug, Clone)]
pub enum HeadingRule {
    /// Line text matches the pattern
    Pattern(Regex, HeadingLevel),
    /// Font size and weight stand out from the document average
    Typography,
    /// Fully upper-case line of moderate length
    UpperCase,
}

impl HeadingRule {
    /// Level this rule assigns to the line, if it applies.
    pub fn level(&self, line: &Line, stats: &FontStatistics) -> Option<HeadingLevel> {
        match self {
            HeadingRule::Pattern(regex, level) => regex.is_match(&line.text).then_some(*level),
            HeadingRule::Typography => typography_level(line, stats),
            HeadingRule::UpperCase => {
                let len = line.char_len();
                if is_upper_case(&line.text) && len > 5 && len < 60 {
                    if stats.ratio(line.font_size) >= 1.1 {
                        Some(HeadingLevel::H2)
                    } else {
                        Some(HeadingLevel::H3)
                    }
                } else {
                    None
                }
            }
        }
    }
}

fn typography_level(line: &Line, stats: &FontStatistics) -> Option<HeadingLevel> {
    let ratio = stats.ratio(line.font_size);

    if ratio >= 1.8 || line.font_size >= stats.max_font_size * 0.95 {
        Some(HeadingLevel::H1)
    } else if ratio >= 1.4 || (line.bold && ratio >= 1.2) {
        Some(HeadingLevel::H2)
    } else if ratio >= 1.15 || (line.bold && ratio >= 1.05) {
        Some(HeadingLevel::H3)
    } else {
        None
    }
}

/// At least one cased character and no lower-case ones.
fn is_upper_case(text: &str) -> bool {
    text.chars().any(|c| c.is_uppercase()) && !text.chars().any(|c| c.is_lowercase())
}

// Capitalized Latin (with Latin-1/Extended-A accents) or CJK ideograph
const HEADING_INITIAL: &str = r"[A-Z\x{00C0}-\x{017F}\x{4E00}-\x{9FFF}]";

/// The default cascade.
pub fn default_rules() -> Vec<HeadingRule> {
    vec![
        HeadingRule::Pattern(
            Regex::new(r"^(?:(?:Chapter|CHAPTER|Section|SECTION)\s+\d+|第\d+[章节])").unwrap(),
            HeadingLevel::H1,
        ),
        HeadingRule::Pattern(
            Regex::new(&format!(r"^\d+[.．]?\s+{}", HEADING_INITIAL)).unwrap(),
            HeadingLevel::H1,
        ),
        HeadingRule::Pattern(
            Regex::new(&format!(r"^\d+\.\d+[.．]?\s+{}", HEADING_INITIAL)).unwrap(),
            HeadingLevel::H2,
        ),
        HeadingRule::Pattern(
            Regex::new(&format!(r"^\d+\.\d+\.\d+[.．]?\s+{}", HEADING_INITIAL)).unwrap(),
            HeadingLevel::H3,
        ),
        HeadingRule::Typography,
        HeadingRule::UpperCase,
    ]
}

/// The default heading-shape patterns.
pub fn default_shapes() -> Vec<Regex> {
    [
        r"^(?:Chapter|CHAPTER)\s+\d+",
        r"^(?:Section|SECTION)\s+\d+",
        r"^\d+\.?\s+[A-Z\x{00C0}-\x{017F}][^.]*$",
        r"^\d+\.\d+\.?\s+[A-Z\x{00C0}-\x{017F}][^.]*$",
        r"^\d+\.\d+\.\d+\.?\s+[A-Z\x{00C0}-\x{017F}][^.]*$",
        r"^[A-Z\x{00C0}-\x{017F}][A-Z\s\x{00C0}-\x{017F}]{2,}$",
        r"^[A-Z\x{00C0}-\x{017F}][a-z\x{00C0}-\x{017F}].*[^.]$",
        r"^第\d+章",
        r"^第\d+节",
        r"^\d+[．.]\s*[\x{4E00}-\x{9FFF}\x{3040}-\x{309F}\x{30A0}-\x{30FF}]+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

/// Decides whether a line is a heading and at what level.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    rules: Vec<HeadingRule>,
    shapes: Vec<Regex>,
    single_numeral: Regex,
    double_numeral: Regex,
    max_heading_len: usize,
    body_period_len: usize,
}

impl HeadingClassifier {
    /// Classifier with the default rule and shape tables.
    pub fn new(options: &OutlineOptions) -> Self {
        Self::with_tables(default_rules(), default_shapes(), options)
    }

    /// Classifier with custom rule and shape tables.
    pub fn with_tables(
        rules: Vec<HeadingRule>,
        shapes: Vec<Regex>,
        options: &OutlineOptions,
    ) -> Self {
        Self {
            rules,
            shapes,
            single_numeral: Regex::new(r"^\d+\.?\s+").unwrap(),
            double_numeral: Regex::new(r"^\d+\.\d+\.?\s+").unwrap(),
            max_heading_len: options.max_heading_len,
            body_period_len: options.body_period_len,
        }
    }

    /// Whether the line passes the length filters at all.
    pub fn is_candidate(&self, text: &str) -> bool {
        let len = text.chars().count();
        if len > self.max_heading_len {
            return false;
        }
        !(text.ends_with('.') && len > self.body_period_len)
    }

    /// Level from the first rule that applies.
    pub fn rule_level(&self, line: &Line, stats: &FontStatistics) -> Option<HeadingLevel> {
        self.rules.iter().find_map(|rule| rule.level(line, stats))
    }

    /// Whether the text has a heading shape regardless of style.
    pub fn is_heading_shaped(&self, text: &str) -> bool {
        self.shapes.iter().any(|shape| shape.is_match(text))
    }

    /// Classify a line against the document statistics.
    pub fn classify(&self, line: &Line, stats: &FontStatistics) -> Option<HeadingLevel> {
        if !self.is_candidate(&line.text) {
            return None;
        }

        if let Some(level) = self.rule_level(line, stats) {
            return Some(level);
        }

        if !self.is_heading_shaped(&line.text) {
            return None;
        }

        if self.single_numeral.is_match(&line.text) {
            Some(HeadingLevel::H1)
        } else if self.double_numeral.is_match(&line.text) {
            Some(HeadingLevel::H2)
        } else {
            Some(HeadingLevel::H1)
        }
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new(&OutlineOptions::default())
    }
}
