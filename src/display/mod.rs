//! Report assembly and rendering.
pub mod report;

pub use self::report::{ReportSection, ValidationReport};
