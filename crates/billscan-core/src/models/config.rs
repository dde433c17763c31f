//! Configuration structures for the billscan pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the billscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillscanConfig {
    /// PDF rendering configuration.
    pub pdf: PdfConfig,

    /// Batch collection configuration.
    pub batch: BatchConfig,
}

/// PDF rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted-text length to consider a document rendered.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

/// Batch collection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Skip documents whose rendering fails instead of aborting the batch.
    pub skip_render_errors: bool,

    /// File extensions treated as bill documents (lowercase, no dot).
    pub extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            skip_render_errors: true,
            extensions: vec!["pdf".to_string()],
        }
    }
}

impl BillscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BillscanConfig::default();
        assert!(config.batch.skip_render_errors);
        assert_eq!(config.batch.extensions, vec!["pdf".to_string()]);
        assert_eq!(config.pdf.min_text_length, 50);
    }

    #[test]
    fn test_partial_file_round_trip() {
        let json = r#"{ "batch": { "skip_render_errors": false } }"#;
        let config: BillscanConfig = serde_json::from_str(json).unwrap();
        assert!(!config.batch.skip_render_errors);
        // Unspecified sections fall back to defaults
        assert_eq!(config.pdf.min_text_length, 50);
    }
}
