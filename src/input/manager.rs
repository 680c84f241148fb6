//! Input manager for handling different file types

use crate::error::{ExtractionError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::document::{DocumentOrigin, RawDocument};
use log::{debug, info};
use std::path::Path;
use tokio::fs;

/// Reads a file and hands its bytes to the extractor for its type.
/// Every failure on the way (missing file, unknown format, read error, parser error)
/// is an [`ExtractionError`] labelled with the path.
#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let label = path.display().to_string();

        if !path.exists() {
            return Err(ExtractionError::new(label, "file does not exist").into());
        }

        let extractor: &dyn TextExtractor = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                &PdfExtractor
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                &PlainTextExtractor
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                &MarkdownExtractor
            }
            FileType::Unknown => {
                return Err(ExtractionError::new(label, "unsupported file type").into());
            }
        };

        let bytes = fs::read(path)
            .await
            .map_err(|e| ExtractionError::new(label.clone(), format!("could not read file: {}", e)))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        // Report the failing file rather than the extractor's generic label
        let text = extractor
            .extract(&bytes)
            .map_err(|e| ExtractionError::new(label, e.reason))?;

        Ok(text)
    }

    pub async fn load_document(&self, path: &Path, origin: DocumentOrigin) -> Result<RawDocument> {
        let text = self.extract_text(path).await?;
        Ok(RawDocument::new(text, origin))
    }
}
