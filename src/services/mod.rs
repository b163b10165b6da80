pub mod inspector;
pub mod planner;
pub mod splitter;

pub use inspector::PdfInspector;
pub use planner::ChunkPlanner;
pub use splitter::PdfSplitter;
