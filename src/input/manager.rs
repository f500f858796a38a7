//! Input manager for handling different file types

use crate::error::{Result, JobApplierError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{TextExtractor, PdfExtractor, PlainTextExtractor};
use std::path::Path;
use std::collections::HashMap;
use log::{debug, info};

/// Extracts document text, caching per path so the resume and base letter
/// are read at most once per run.
pub struct InputManager {
    cache: HashMap<String, String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            debug!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        if !path.exists() {
            return Err(JobApplierError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(JobApplierError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extraction_is_cached_per_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Experienced engineer").unwrap();

        let mut manager = InputManager::new();
        let first = manager.extract_text(&path).await.unwrap();
        assert_eq!(manager.cache_size(), 1);

        // A second call returns the cached text even if the file changed
        std::fs::write(&path, "Different content").unwrap();
        let second = manager.extract_text(&path).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "binary").unwrap();

        let mut manager = InputManager::new();
        let result = manager.extract_text(&path).await;
        assert!(matches!(result, Err(JobApplierError::UnsupportedFormat(_))));
    }
}
