//! Input processing module
//! Handles format detection, text extraction, and hyperlink collection

pub mod file_detector;
pub mod hyperlinks;
pub mod manager;
pub mod text_extractor;

pub use file_detector::DocumentFormat;
pub use manager::{InputManager, SourceDocument};
