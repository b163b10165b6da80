use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// Threshold used when the caller does not supply one.
pub const DEFAULT_MAX_SIZE_MB: f64 = 45.0;

/// Headroom for per-chunk structural overhead (fonts and shared resources
/// are duplicated into every chunk).
pub const SAFETY_FACTOR: f64 = 0.9;

pub const BYTES_PER_MB: f64 = 1_048_576.0;

#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub input_path: PathBuf,
    pub max_size_mb: f64,
    pub output_dir: Option<PathBuf>,
}

impl SplitRequest {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            output_dir: None,
        }
    }

    pub fn with_max_size_mb(mut self, max_size_mb: f64) -> Self {
        self.max_size_mb = max_size_mb;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}

/// A contiguous half-open page range `[start, end)` of the source document,
/// 0-based. `number` is the 1-based position of the chunk in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub number: usize,
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    pub fn first_page(&self) -> usize {
        self.start + 1
    }

    pub fn last_page(&self) -> usize {
        self.end
    }

    pub fn page_count(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkInfo {
    pub file: PathBuf,
    pub first_page: usize,
    pub last_page: usize,
    pub page_count: usize,
    pub size_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitSuccess {
    pub chunk_files: Vec<PathBuf>,
    pub total_chunks: usize,
    pub total_pages: Option<usize>,
    pub split_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_per_chunk: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<ChunkInfo>,
}

impl SplitSuccess {
    /// The input already fits: it is reported back as the only chunk.
    pub fn unsplit(input_path: PathBuf) -> Self {
        Self {
            chunk_files: vec![input_path],
            total_chunks: 1,
            total_pages: None,
            split_required: false,
            pages_per_chunk: None,
            chunks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitFailure {
    pub error: String,
}

/// Outcome of one split run. Serializes as a flat JSON object whose
/// `success` field tells the two shapes apart.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitResult {
    Success(SplitSuccess),
    Failure(SplitFailure),
}

impl SplitResult {
    pub fn failure(error: impl Into<String>) -> Self {
        SplitResult::Failure(SplitFailure {
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SplitResult::Success(_))
    }
}

#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for SplitResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SplitResult::Success(body) => Tagged {
                success: true,
                body,
            }
            .serialize(serializer),
            SplitResult::Failure(body) => Tagged {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_unsplit_result_shape() {
        let result = SplitResult::Success(SplitSuccess::unsplit(PathBuf::from("in/report.pdf")));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "chunk_files": ["in/report.pdf"],
                "total_chunks": 1,
                "total_pages": null,
                "split_required": false
            })
        );
    }

    #[test]
    fn test_split_result_shape() {
        let result = SplitResult::Success(SplitSuccess {
            chunk_files: vec![
                PathBuf::from("out/a_chunk001_p1-2.pdf"),
                PathBuf::from("out/a_chunk002_p3-3.pdf"),
            ],
            total_chunks: 2,
            total_pages: Some(3),
            split_required: true,
            pages_per_chunk: Some(2),
            chunks: vec![ChunkInfo {
                file: PathBuf::from("out/a_chunk001_p1-2.pdf"),
                first_page: 1,
                last_page: 2,
                page_count: 2,
                size_mb: 0.5,
            }],
        });
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["total_chunks"], json!(2));
        assert_eq!(value["total_pages"], json!(3));
        assert_eq!(value["split_required"], json!(true));
        assert_eq!(value["pages_per_chunk"], json!(2));
        assert_eq!(value["chunks"][0]["page_count"], json!(2));
    }

    #[test]
    fn test_failure_result_shape() {
        let result = SplitResult::failure("File not found: missing.pdf");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({ "success": false, "error": "File not found: missing.pdf" })
        );
        assert!(!result.is_success());
    }

    #[test]
    fn test_request_defaults() {
        let request = SplitRequest::new("doc.pdf");
        assert_eq!(request.max_size_mb, DEFAULT_MAX_SIZE_MB);
        assert!(request.output_dir.is_none());

        let request = request.with_max_size_mb(10.0).with_output_dir("out");
        assert_eq!(request.max_size_mb, 10.0);
        assert_eq!(request.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_chunk_range_pages() {
        let range = ChunkRange {
            number: 2,
            start: 10,
            end: 20,
        };
        assert_eq!(range.first_page(), 11);
        assert_eq!(range.last_page(), 20);
        assert_eq!(range.page_count(), 10);
    }
}
