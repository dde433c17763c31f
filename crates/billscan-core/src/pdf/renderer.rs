//! Embedded-text PDF rendering using lopdf and pdf-extract.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{DocumentRenderer, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Production renderer: extracts the embedded text layer of a PDF.
pub struct PdfTextRenderer {
    min_text_length: usize,
}

impl PdfTextRenderer {
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            min_text_length: config.min_text_length,
        }
    }

    /// Pre-flight checks on the raw document before text extraction.
    fn preflight(data: &[u8]) -> Result<()> {
        let doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }
        Ok(())
    }
}

impl Default for PdfTextRenderer {
    fn default() -> Self {
        Self::new(&PdfConfig::default())
    }
}

impl DocumentRenderer for PdfTextRenderer {
    fn render(&self, path: &Path) -> Result<String> {
        let data = fs::read(path).map_err(|e| PdfError::Parse(e.to_string()))?;

        Self::preflight(&data)?;

        let text = pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        debug!(
            "rendered {} to {} characters of text",
            path.display(),
            text.len()
        );

        if text.trim().len() < self.min_text_length {
            return Err(PdfError::TextExtraction(format!(
                "document has no usable text layer ({} characters)",
                text.trim().len()
            )));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rejects_non_pdf_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.pdf");
        fs::write(&path, b"not a pdf at all").unwrap();

        let renderer = PdfTextRenderer::default();
        assert!(matches!(renderer.render(&path), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_render_missing_file() {
        let renderer = PdfTextRenderer::default();
        let result = renderer.render(Path::new("/nonexistent/bill.pdf"));
        assert!(result.is_err());
    }
}
