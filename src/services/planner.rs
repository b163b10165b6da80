use crate::types::{ChunkRange, SAFETY_FACTOR};
use std::path::Path;

pub struct ChunkPlanner;

impl ChunkPlanner {
    /// Target page count per chunk, assuming every page weighs roughly the
    /// same number of bytes. Never less than one page.
    pub fn estimate_pages_per_chunk(
        max_size_mb: f64,
        file_size_mb: f64,
        total_pages: usize,
    ) -> usize {
        let estimate = (max_size_mb / file_size_mb) * total_pages as f64 * SAFETY_FACTOR;
        // `as` saturates, so NaN and negative estimates land on 0 here
        std::cmp::max(1, estimate.floor() as usize)
    }

    pub fn plan_chunks(total_pages: usize, pages_per_chunk: usize) -> Vec<ChunkRange> {
        let step = pages_per_chunk.max(1);

        (0..total_pages)
            .step_by(step)
            .enumerate()
            .map(|(idx, start)| ChunkRange {
                number: idx + 1,
                start,
                end: std::cmp::min(start + step, total_pages),
            })
            .collect()
    }

    pub fn chunk_file_name(base_name: &str, range: &ChunkRange) -> String {
        format!(
            "{}_chunk{:03}_p{}-{}.pdf",
            base_name,
            range.number,
            range.first_page(),
            range.last_page()
        )
    }

    pub fn base_name(input_path: &Path) -> String {
        input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "document".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_estimate_uses_size_ratio_and_safety_factor() {
        // 0.25 * 200 * 0.9 = 45
        assert_eq!(ChunkPlanner::estimate_pages_per_chunk(1.0, 4.0, 200), 45);
        // 0.5 * 10 * 0.9 = 4.5
        assert_eq!(ChunkPlanner::estimate_pages_per_chunk(1.0, 2.0, 10), 4);
    }

    #[test]
    fn test_estimate_never_below_one_page() {
        assert_eq!(ChunkPlanner::estimate_pages_per_chunk(1.0, 500.0, 10), 1);
        assert_eq!(ChunkPlanner::estimate_pages_per_chunk(0.001, 900.0, 1), 1);

        let ranges = ChunkPlanner::plan_chunks(10, 1);
        assert_eq!(ranges.len(), 10);
        assert!(ranges.iter().all(|r| r.page_count() == 1));
    }

    #[test]
    fn test_plan_chunks_partitions_every_page_once() {
        for total_pages in 1..=40 {
            for pages_per_chunk in 1..=12 {
                let ranges = ChunkPlanner::plan_chunks(total_pages, pages_per_chunk);

                assert_eq!(ranges.len(), total_pages.div_ceil(pages_per_chunk));
                assert_eq!(ranges.first().unwrap().first_page(), 1);
                assert_eq!(ranges.last().unwrap().last_page(), total_pages);

                for pair in ranges.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                    assert_eq!(pair[0].page_count(), pages_per_chunk);
                    assert_eq!(pair[0].number + 1, pair[1].number);
                }
            }
        }
    }

    #[test]
    fn test_plan_chunks_short_final_chunk() {
        let ranges = ChunkPlanner::plan_chunks(10, 4);
        let bounds: Vec<(usize, usize)> = ranges
            .iter()
            .map(|r| (r.first_page(), r.last_page()))
            .collect();

        assert_eq!(bounds, vec![(1, 4), (5, 8), (9, 10)]);
    }

    #[test]
    fn test_plan_chunks_empty_document() {
        assert!(ChunkPlanner::plan_chunks(0, 5).is_empty());
    }

    #[test]
    fn test_chunk_file_names() {
        let names: Vec<String> = ChunkPlanner::plan_chunks(30, 10)
            .iter()
            .map(|range| ChunkPlanner::chunk_file_name("report", range))
            .collect();

        assert_eq!(
            names,
            vec![
                "report_chunk001_p1-10.pdf",
                "report_chunk002_p11-20.pdf",
                "report_chunk003_p21-30.pdf",
            ]
        );
    }

    #[test]
    fn test_chunk_file_name_single_page() {
        let range = ChunkRange {
            number: 12,
            start: 41,
            end: 42,
        };
        assert_eq!(
            ChunkPlanner::chunk_file_name("scan", &range),
            "scan_chunk012_p42-42.pdf"
        );
    }

    #[test]
    fn test_base_name() {
        assert_eq!(ChunkPlanner::base_name(Path::new("/data/report.pdf")), "report");
        assert_eq!(ChunkPlanner::base_name(Path::new("archive.v2.pdf")), "archive.v2");
        assert_eq!(ChunkPlanner::base_name(Path::new("/")), "document");
    }
}
