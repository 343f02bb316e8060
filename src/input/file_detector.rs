//! Document format detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
    Markdown,
    Unknown,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "txt" | "text" => DocumentFormat::PlainText,
            "md" | "markdown" => DocumentFormat::Markdown,
            _ => DocumentFormat::Unknown,
        }
    }

    /// Extensionless files are read as plain text
    pub fn detect(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentFormat::PlainText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert_eq!(DocumentFormat::detect(Path::new("cv.PDF")), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::detect(Path::new("job.md")), DocumentFormat::Markdown);
        assert_eq!(DocumentFormat::detect(Path::new("job.txt")), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::detect(Path::new("JOB")), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::detect(Path::new("cv.docx")), DocumentFormat::Unknown);
    }
}
