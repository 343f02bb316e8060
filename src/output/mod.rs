//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{AnalysisReport, NearMiss, ReportMetadata};
