use crate::error::{PdfSplitterError, Result};
use crate::services::{ChunkPlanner, PdfInspector};
use crate::types::{ChunkInfo, ChunkRange, SplitRequest, SplitResult, SplitSuccess};
use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub struct PdfSplitter;

impl PdfSplitter {
    /// Run one split request to completion. Every failure is folded into
    /// [`SplitResult::Failure`]; chunk files written before the failure are
    /// left on disk.
    pub fn split(request: &SplitRequest) -> SplitResult {
        match Self::try_split(request) {
            Ok(success) => SplitResult::Success(success),
            Err(e) => {
                error!("PDF splitting failed: {}", e);
                SplitResult::failure(e.to_string())
            }
        }
    }

    pub fn try_split(request: &SplitRequest) -> Result<SplitSuccess> {
        Self::validate_request(request)?;

        let input_path = &request.input_path;
        PdfInspector::ensure_exists(input_path)?;

        let file_size_mb = PdfInspector::file_size_mb(input_path)?;
        info!(
            "Input: {} ({:.2} MB, limit {:.2} MB)",
            input_path.display(),
            file_size_mb,
            request.max_size_mb
        );

        if file_size_mb <= request.max_size_mb {
            info!("File is within the size limit, no split required");
            return Ok(SplitSuccess::unsplit(input_path.clone()));
        }

        let document = PdfInspector::load_document(input_path)?;
        let total_pages = document.get_pages().len();

        if total_pages == 0 {
            return Err(PdfSplitterError::SplitConfig {
                reason: "Document has no pages to split".to_string(),
            });
        }

        let pages_per_chunk =
            ChunkPlanner::estimate_pages_per_chunk(request.max_size_mb, file_size_mb, total_pages);
        let ranges = ChunkPlanner::plan_chunks(total_pages, pages_per_chunk);

        info!(
            "Chunking strategy: {} pages per chunk, {} chunks expected",
            pages_per_chunk,
            ranges.len()
        );

        let output_dir =
            PdfInspector::resolve_output_dir(input_path, request.output_dir.as_deref());
        PdfInspector::ensure_output_directory(&output_dir)?;
        let base_name = ChunkPlanner::base_name(input_path);

        let mut chunks = Vec::with_capacity(ranges.len());
        for range in &ranges {
            let output_file = output_dir.join(ChunkPlanner::chunk_file_name(&base_name, range));

            info!(
                "Creating chunk {}/{}: pages {}-{}",
                range.number,
                ranges.len(),
                range.first_page(),
                range.last_page()
            );

            let size_mb = Self::write_chunk(&document, range, total_pages, &output_file)?;
            if size_mb > request.max_size_mb {
                warn!(
                    "Chunk {} is {:.2} MB, above the {:.2} MB limit",
                    output_file.display(),
                    size_mb,
                    request.max_size_mb
                );
            }

            chunks.push(ChunkInfo {
                file: output_file,
                first_page: range.first_page(),
                last_page: range.last_page(),
                page_count: range.page_count(),
                size_mb: (size_mb * 100.0).round() / 100.0,
            });
        }

        let avg_chunk_size_mb =
            chunks.iter().map(|c| c.size_mb).sum::<f64>() / chunks.len() as f64;
        info!(
            "Split {} pages into {} chunks (avg {:.2} MB)",
            total_pages,
            chunks.len(),
            avg_chunk_size_mb
        );

        Ok(SplitSuccess {
            chunk_files: chunks.iter().map(|c| c.file.clone()).collect(),
            total_chunks: chunks.len(),
            total_pages: Some(total_pages),
            split_required: true,
            pages_per_chunk: Some(pages_per_chunk),
            chunks,
        })
    }

    fn validate_request(request: &SplitRequest) -> Result<()> {
        if !request.max_size_mb.is_finite() || request.max_size_mb <= 0.0 {
            return Err(PdfSplitterError::SplitConfig {
                reason: format!(
                    "max_size_mb must be a positive number, got {}",
                    request.max_size_mb
                ),
            });
        }
        Ok(())
    }

    /// Writes the pages of `range` as a standalone PDF and returns the size
    /// of the written file in MB.
    fn write_chunk(
        source: &Document,
        range: &ChunkRange,
        total_pages: usize,
        output_path: &Path,
    ) -> Result<f64> {
        let mut chunk = Self::extract_range(source, range, total_pages);

        let file = File::create(output_path).map_err(|e| Self::write_error(output_path, e))?;
        let mut writer = BufWriter::new(file);
        chunk.save_to(&mut writer)?;
        writer
            .flush()
            .map_err(|e| Self::write_error(output_path, e))?;
        drop(writer);

        let size_mb = PdfInspector::file_size_mb(output_path)?;
        debug!("Wrote {} ({:.2} MB)", output_path.display(), size_mb);
        Ok(size_mb)
    }

    /// Copy of `source` that keeps only the pages of `range`, in their
    /// original order, with objects no longer reachable pruned away.
    fn extract_range(source: &Document, range: &ChunkRange, total_pages: usize) -> Document {
        let pages_to_delete: Vec<u32> = (1..=total_pages)
            .filter(|page| *page < range.first_page() || *page > range.last_page())
            .map(|page| page as u32)
            .collect();

        let mut chunk = source.clone();
        if !pages_to_delete.is_empty() {
            chunk.delete_pages(&pages_to_delete);
        }
        chunk.prune_objects();
        chunk
    }

    fn write_error(path: &Path, source: std::io::Error) -> PdfSplitterError {
        PdfSplitterError::ChunkWrite {
            path: PathBuf::from(path),
            source,
        }
    }
}
