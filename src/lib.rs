//! # PDF Splitter Library
//!
//! Splits a PDF that exceeds a size limit into several smaller PDFs, each
//! holding a contiguous page range of the original.
//!
//! The number of pages per chunk is estimated once from the ratio between
//! the size limit and the input size, assuming every page weighs roughly the
//! same. A chunk that comes out over the limit is logged, never re-split.
//!
//! ## Example Usage
//!
//! ```no_run
//! use pdf_splitter::{split, SplitRequest, SplitResult};
//!
//! let request = SplitRequest::new("scans/archive.pdf")
//!     .with_max_size_mb(20.0)
//!     .with_output_dir("scans/chunks");
//!
//! match split(&request) {
//!     SplitResult::Success(result) => {
//!         println!("Created {} chunk files", result.total_chunks);
//!     }
//!     SplitResult::Failure(failure) => eprintln!("{}", failure.error),
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

pub use error::{PdfSplitterError, Result};
pub use services::{ChunkPlanner, PdfInspector, PdfSplitter};
pub use types::{
    ChunkInfo, ChunkRange, SplitFailure, SplitRequest, SplitResult, SplitSuccess,
    DEFAULT_MAX_SIZE_MB,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Split `request.input_path` into chunks no larger than (approximately)
/// `request.max_size_mb`. See [`PdfSplitter::split`].
pub fn split(request: &SplitRequest) -> SplitResult {
    PdfSplitter::split(request)
}
