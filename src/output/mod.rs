//! Report rendering for match results

pub mod report;
pub mod formatter;

pub use formatter::ReportGenerator;
pub use report::MatchReport;
