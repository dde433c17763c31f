//! PDF text rendering module.

mod renderer;

pub use renderer::PdfTextRenderer;

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for document-to-text rendering implementations.
///
/// The extraction pipeline only ever sees plain text; this seam keeps the
/// batch collector testable without real PDF fixtures.
pub trait DocumentRenderer {
    /// Render the document at `path` to plain text.
    fn render(&self, path: &Path) -> Result<String>;
}
