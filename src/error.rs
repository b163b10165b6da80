use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfSplitterError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pdf(#[from] lopdf::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Split configuration error: {reason}")]
    SplitConfig { reason: String },

    #[error("Output directory error: {reason}")]
    OutputDirectory { reason: String },

    #[error("Failed to write chunk {}: {source}", .path.display())]
    ChunkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PdfSplitterError>;
