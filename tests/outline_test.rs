//! Integration tests for outline extraction.

use docsift::error::{Error, Result};
use docsift::model::{HeadingLevel, TextSpan};
use docsift::outline::{FontStatistics, HeadingClassifier, OutlineBuilder, OutlineOptions};
use docsift::render::{to_json, JsonFormat};
use docsift::source::{DocumentSource, MemoryDocument};

/// Source whose every page fails, as a damaged file would.
struct UnreadableSource;

impl DocumentSource for UnreadableSource {
    fn name(&self) -> &str {
        "unreadable.pdf"
    }

    fn metadata_title(&self) -> Option<String> {
        None
    }

    fn page_count(&self) -> u32 {
        2
    }

    fn page_spans(&self, page: u32) -> Result<Vec<TextSpan>> {
        Err(Error::TextExtract(format!("Page {}: bad stream", page)))
    }
}

fn body(text: &str, baseline: f32) -> TextSpan {
    TextSpan::new(text, 10.0, 1).at(baseline)
}

/// A two-page report with numbered headings, a banner and body text.
fn report() -> MemoryDocument {
    MemoryDocument::new("report.pdf")
        .with_spans(vec![
            TextSpan::new("42", 10.0, 1).at(780.0),
            TextSpan::new("Annual Report 2023", 26.0, 1).bold().at(740.0),
            TextSpan::new("1. ", 12.0, 1).bold().at(700.0),
            TextSpan::new("Introduction", 12.0, 1).bold().at(700.0),
            body("this report covers the fiscal year in detail", 680.0),
            body("and compares it with the previous period", 668.0),
            TextSpan::new("1.1 Scope", 11.0, 1).at(640.0),
            body("figures are unaudited unless noted otherwise", 620.0),
        ])
        .with_spans(vec![
            TextSpan::new("2. Results", 12.0, 2).bold().at(740.0),
            body("revenue grew in every region during the year", 720.0),
            TextSpan::new("2.1.1. Regional Detail", 10.0, 2).at(700.0),
            body("the north region led growth for the third year", 680.0),
            body("the south region recovered after a slow start", 668.0),
        ])
}

// ============================================================================
// Outline Building
// ============================================================================

#[test]
fn test_report_outline() {
    let outline = OutlineBuilder::default().build(&report());

    assert_eq!(outline.title, "Annual Report 2023");

    let found: Vec<_> = outline
        .headings
        .iter()
        .map(|h| (h.level, h.text.as_str(), h.page))
        .collect();
    assert_eq!(
        found,
        vec![
            (HeadingLevel::H1, "Annual Report 2023", 1),
            (HeadingLevel::H1, "1. Introduction", 1),
            (HeadingLevel::H2, "1.1 Scope", 1),
            (HeadingLevel::H1, "2. Results", 2),
            (HeadingLevel::H3, "2.1.1. Regional Detail", 2),
        ]
    );
}

#[test]
fn test_outline_pages_non_decreasing_and_unique() {
    let outline = OutlineBuilder::default().build(&report());

    assert!(outline.headings.windows(2).all(|w| w[0].page <= w[1].page));

    let mut keys: Vec<_> = outline
        .headings
        .iter()
        .map(|h| (h.text.clone(), h.page))
        .collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn test_unreadable_document_has_empty_outline() {
    let outline = OutlineBuilder::default().build(&UnreadableSource);
    assert_eq!(outline.title, "Untitled Document");
    assert!(outline.headings.is_empty());
}

#[test]
fn test_custom_fallback_title() {
    let options = OutlineOptions::new().with_fallback_title("Unnamed");
    let outline = OutlineBuilder::new(options).build(&UnreadableSource);
    assert_eq!(outline.title, "Unnamed");
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_near_maximum_font_is_top_level() {
    let classifier = HeadingClassifier::default();
    let stats = FontStatistics::new(11.0, 20.0);
    let line = docsift::model::Line::new("a lower case banner", 19.5, false, 1);
    assert_eq!(classifier.classify(&line, &stats), Some(HeadingLevel::H1));
}

// ============================================================================
// JSON Shape
// ============================================================================

#[test]
fn test_outline_json_shape() {
    let outline = OutlineBuilder::default().build(&report());
    let json = to_json(&outline, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "Annual Report 2023");
    assert_eq!(value["outline"][1]["level"], "H1");
    assert_eq!(value["outline"][1]["text"], "1. Introduction");
    assert_eq!(value["outline"][1]["page"], 1);
}
