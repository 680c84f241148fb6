//! Text extraction from raw document bytes

use crate::error::ExtractionError;
use log::warn;
use pulldown_cmark::{Event, Parser, Tag};
use std::panic;

/// Turns raw file bytes into plain text. Blank output is reported as an error, never as success.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

pub const NO_TEXT_REASON: &str = "no extractable text";

fn require_text(label: &str, text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::new(label, NO_TEXT_REASON));
    }
    Ok(text)
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed documents (e.g. a page without /MediaBox)
        let text = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Err(ExtractionError::new("PDF document", e.to_string())),
            Err(_) => {
                warn!("pdf-extract panicked while parsing a PDF");
                return Err(ExtractionError::new(
                    "PDF document",
                    "parser panicked on malformed PDF",
                ));
            }
        };

        require_text("PDF document", text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| ExtractionError::new("text file", format!("invalid UTF-8: {}", e)))?;
        require_text("text file", text)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let markdown = std::str::from_utf8(bytes)
            .map_err(|e| ExtractionError::new("markdown file", format!("invalid UTF-8: {}", e)))?;
        require_text("markdown file", Self::markdown_to_text(markdown))
    }
}

impl MarkdownExtractor {
    /// Keeps text and code spans, one line per block, formatting markers dropped
    fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
