//! File format detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => DocumentFormat::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentFormat::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("Docx"), DocumentFormat::Docx);
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(DocumentFormat::from_extension("txt"), DocumentFormat::Unknown);
        assert_eq!(DocumentFormat::from_extension("doc"), DocumentFormat::Unknown);
        assert_eq!(DocumentFormat::from_path(Path::new("resume")), DocumentFormat::Unknown);
    }
}
