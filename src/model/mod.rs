//! Value types shared by the outline and relevance pipelines.
//!
//! Everything here is created per run and discarded afterwards; nothing is
//! persisted or carries identity across runs.

mod outline;
mod report;
mod section;
mod span;

pub use outline::{Heading, HeadingLevel, Outline};
pub use report::{ExtractedSection, RelevanceReport, ReportMetadata, SubsectionAnalysis};
pub use section::{ScoredSection, Section, Subsection};
pub use span::{Line, TextSpan};
