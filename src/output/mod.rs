//! Report assembly and output formatting module

pub mod formatter;
pub mod report;

pub use formatter::{error_json, save_report_to_file, OutputFormatter, ReportGenerator};
pub use report::ScreeningReport;
