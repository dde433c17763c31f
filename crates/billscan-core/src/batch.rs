//! Batch collection over a directory of bill documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{BillscanError, PdfError, Result};
use crate::extract::{build_bill, LayoutFormat};
use crate::models::bill::RawBill;
use crate::models::config::BatchConfig;
use crate::pdf::DocumentRenderer;

/// Per-file outcome of a batch run.
#[derive(Debug)]
pub enum FileOutcome {
    /// Document rendered and extracted into a bill.
    Processed(PathBuf),
    /// Entry did not carry a recognized document extension.
    Skipped { path: PathBuf, reason: String },
    /// Rendering failed; the batch continued without this file.
    RenderFailed { path: PathBuf, error: PdfError },
}

/// Result of collecting one directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Extracted bills, in directory-enumeration order.
    pub bills: Vec<RawBill>,
    /// One outcome per directory entry considered.
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.bills.len()
    }

    pub fn render_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::RenderFailed { .. }))
            .count()
    }
}

/// List the document files in `dir`, in enumeration order.
///
/// Entries without a recognized extension are excluded here and show up as
/// [`FileOutcome::Skipped`] in the report.
pub fn document_files(dir: &Path, config: &BatchConfig) -> Result<(Vec<PathBuf>, Vec<FileOutcome>)> {
    if !dir.is_dir() {
        return Err(BillscanError::Config(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if path.is_file() && config.extensions.iter().any(|e| *e == ext) {
            files.push(path);
        } else {
            debug!("skipping {}", path.display());
            skipped.push(FileOutcome::Skipped {
                path,
                reason: format!("unrecognized extension {:?}", ext),
            });
        }
    }

    Ok((files, skipped))
}

/// Render one document and extract its bill.
pub fn process_document(
    path: &Path,
    layout: LayoutFormat,
    renderer: &dyn DocumentRenderer,
) -> std::result::Result<RawBill, PdfError> {
    let text = renderer.render(path)?;
    Ok(build_bill(&text, layout.rule_set()))
}

/// Collect every document in `dir` under one layout into a [`BatchReport`].
///
/// A rendering failure omits that file's record and the batch continues,
/// unless `skip_render_errors` is disabled in the configuration.
pub fn collect(
    dir: &Path,
    layout: LayoutFormat,
    renderer: &dyn DocumentRenderer,
    config: &BatchConfig,
) -> Result<BatchReport> {
    let (files, skipped) = document_files(dir, config)?;

    let mut report = BatchReport {
        bills: Vec::with_capacity(files.len()),
        outcomes: skipped,
    };

    for path in files {
        match process_document(&path, layout, renderer) {
            Ok(bill) => {
                report.bills.push(bill);
                report.outcomes.push(FileOutcome::Processed(path));
            }
            Err(e) if config.skip_render_errors => {
                warn!("failed to render {}: {}", path.display(), e);
                report.outcomes.push(FileOutcome::RenderFailed { path, error: e });
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Renderer stub: maps file stems to canned text, fails on demand.
    struct StubRenderer {
        texts: HashMap<String, String>,
    }

    impl StubRenderer {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                texts: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl DocumentRenderer for StubRenderer {
        fn render(&self, path: &Path) -> std::result::Result<String, PdfError> {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            self.texts
                .get(stem)
                .cloned()
                .ok_or_else(|| PdfError::Parse("unreadable document".to_string()))
        }
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"stub").unwrap();
    }

    #[test]
    fn test_collect_skips_non_documents() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "jan.pdf");
        touch(dir.path(), "notes.txt");

        let renderer = StubRenderer::new(&[("jan", "PAY BY: 05-Jan-2024\nActual")]);
        let report = collect(
            dir.path(),
            LayoutFormat::New,
            &renderer,
            &BatchConfig::default(),
        )
        .unwrap();

        // Exactly one row: the unrelated file never contributes
        assert_eq!(report.processed(), 1);
        assert!(report
            .outcomes
            .iter()
            .any(|o| matches!(o, FileOutcome::Skipped { .. })));
    }

    #[test]
    fn test_collect_continues_past_render_failure() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "good.pdf");
        touch(dir.path(), "bad.pdf");

        let renderer = StubRenderer::new(&[("good", "PAY BY: 05-Jan-2024\nActual")]);
        let report = collect(
            dir.path(),
            LayoutFormat::New,
            &renderer,
            &BatchConfig::default(),
        )
        .unwrap();

        assert_eq!(report.processed(), 1);
        assert_eq!(report.render_failures(), 1);
    }

    #[test]
    fn test_collect_fails_fast_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "bad.pdf");

        let renderer = StubRenderer::new(&[]);
        let config = BatchConfig {
            skip_render_errors: false,
            ..BatchConfig::default()
        };

        let result = collect(dir.path(), LayoutFormat::New, &renderer, &config);
        assert!(matches!(result, Err(BillscanError::Pdf(_))));
    }

    #[test]
    fn test_invalid_directory_is_config_error() {
        let renderer = StubRenderer::new(&[]);
        let result = collect(
            Path::new("/no/such/dir"),
            LayoutFormat::Old,
            &renderer,
            &BatchConfig::default(),
        );
        assert!(matches!(result, Err(BillscanError::Config(_))));
    }
}
