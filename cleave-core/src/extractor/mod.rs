//! Boundary extraction
//!
//! Two interchangeable sources feed the chunk builder: [`lexical`] scans for
//! separators, [`structural`] parses markup. Both return boundaries sorted by
//! start ascending with ties broken by level descending.

pub mod lexical;
pub mod structural;

pub use lexical::{Separator, SeparatorHierarchy};
pub use structural::{CommonMarkParser, Span, SpanKind, StructureParser};
