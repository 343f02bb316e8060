//! Loads resume and job description documents as plain text

use crate::error::{Result, ScanError};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DEFAULT_MAX_INPUT_BYTES: u64 = 1_000_000;

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
    max_input_bytes: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: u64) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        let metadata = tokio::fs::metadata(path).await.map_err(|_| {
            ScanError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;
        if metadata.len() > self.max_input_bytes {
            return Err(ScanError::InvalidInput(format!(
                "{} is {} bytes, above the {} byte limit",
                path.display(),
                metadata.len(),
                self.max_input_bytes
            )));
        }

        let text = match DocumentFormat::detect(path) {
            DocumentFormat::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            DocumentFormat::PlainText => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            DocumentFormat::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            DocumentFormat::Unknown => {
                return Err(ScanError::UnsupportedFormat(format!(
                    "Unsupported file type for: {} (expected .txt, .md or .pdf)",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
