use crate::error::{PdfSplitterError, Result};
use crate::types::BYTES_PER_MB;
use lopdf::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct PdfInspector;

impl PdfInspector {
    pub fn ensure_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PdfSplitterError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Ok(())
    }

    pub fn file_size_mb(path: &Path) -> Result<f64> {
        let bytes = fs::metadata(path)?.len();
        Ok(bytes as f64 / BYTES_PER_MB)
    }

    pub fn load_document(path: &Path) -> Result<Document> {
        debug!("Parsing PDF: {}", path.display());
        let document = Document::load(path)?;
        info!("Loaded {} pages", document.get_pages().len());
        Ok(document)
    }

    /// Chunks go next to the input unless the caller asked for another place.
    pub fn resolve_output_dir(input_path: &Path, output_dir: Option<&Path>) -> PathBuf {
        match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    pub fn ensure_output_directory(output_dir: &Path) -> Result<()> {
        if output_dir.as_os_str().is_empty() || output_dir.exists() {
            return Ok(());
        }

        fs::create_dir_all(output_dir).map_err(|e| PdfSplitterError::OutputDirectory {
            reason: format!(
                "Failed to create output directory {}: {}",
                output_dir.display(),
                e
            ),
        })?;
        info!("Created output directory: {}", output_dir.display());
        Ok(())
    }
}
