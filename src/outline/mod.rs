//! Outline extraction: a document title plus H1-H3 headings.
//!
//! Lines are classified from numbering patterns and typography measured
//! against document-wide font statistics. See [`OutlineBuilder`].

mod builder;
mod heading;
mod options;
mod title;

pub use builder::OutlineBuilder;
pub use heading::{default_rules, default_shapes, FontStatistics, HeadingClassifier, HeadingRule};
pub use options::{OutlineOptions, UNTITLED};
pub use title::TitleResolver;
