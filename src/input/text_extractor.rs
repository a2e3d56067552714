//! Text extraction from supported document formats

use crate::error::{Result, ResumeScreenerError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;
use zip::ZipArchive;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeScreenerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeScreenerError::ExtractionFailed(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeScreenerError::Io)?;
        extract_docx_text(&bytes).map_err(|e| {
            ResumeScreenerError::ExtractionFailed(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Pulls run text out of the main document part. Paragraph ends become
/// newlines so section detection downstream keeps its line boundaries.
pub fn extract_docx_text(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

    Ok(document_xml_text(&xml)?)
}

fn document_xml_text(xml: &str) -> std::result::Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) if e.local_name().as_ref() == b"t" => in_run_text = false,
            Event::End(e) if e.local_name().as_ref() == b"p" => text.push('\n'),
            Event::Empty(e) if e.local_name().as_ref() == b"br" => text.push('\n'),
            Event::Empty(e) if e.local_name().as_ref() == b"tab" => text.push(' '),
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
