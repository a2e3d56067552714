//! Input manager for routing documents to format extractors

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::DocumentFormat;
use crate::input::hyperlinks;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::info;
use std::io::Write;
use std::path::Path;

/// Raw material handed to the parsing pipeline: extracted text plus any
/// hyperlink URIs embedded in the document metadata.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub text: String,
    pub hyperlinks: Vec<String>,
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Validate the path, then pull text and embedded hyperlinks from it.
    pub async fn load(&self, path: &Path) -> Result<SourceDocument> {
        if !path.exists() {
            return Err(ResumeScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = self.detect_format(path)?;

        // Metadata first: link annotations survive even when the visible
        // text never spells the URL out.
        let hyperlinks = hyperlinks::collect_hyperlinks(path, format).await;
        let text = self.extract_text(path, format).await?;

        Ok(SourceDocument { text, hyperlinks })
    }

    /// Parse from an in-memory buffer by staging it in a temporary file with
    /// the right extension. The staging file is removed when the handle
    /// drops, on success and failure alike.
    pub async fn load_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Result<SourceDocument> {
        let suffix = match format {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
            DocumentFormat::Unknown => {
                return Err(ResumeScreenerError::UnsupportedFormat(
                    "Unsupported file format for in-memory document".to_string(),
                ))
            }
        };

        let mut temp = tempfile::Builder::new()
            .prefix("resume-screener-")
            .suffix(suffix)
            .tempfile()?;
        temp.write_all(bytes)?;
        temp.flush()?;

        self.load(temp.path()).await
    }

    /// Reject anything that is not a PDF or DOCX before touching the file.
    pub fn detect_format(&self, path: &Path) -> Result<DocumentFormat> {
        match DocumentFormat::from_path(path) {
            DocumentFormat::Unknown => Err(ResumeScreenerError::UnsupportedFormat(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
            format => Ok(format),
        }
    }

    async fn extract_text(&self, path: &Path, format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            DocumentFormat::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await
            }
            DocumentFormat::Unknown => Err(ResumeScreenerError::UnsupportedFormat(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
