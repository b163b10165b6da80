use clap::Parser;
use pdf_splitter::{SplitRequest, DEFAULT_MAX_SIZE_MB};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-split")]
#[command(about = "Split a large PDF into page-range chunks below a size limit")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// PDF file to split
    #[arg(value_name = "INPUT_PDF")]
    pub input: PathBuf,

    /// Maximum size of each chunk in megabytes
    #[arg(value_name = "MAX_SIZE_MB", default_value_t = DEFAULT_MAX_SIZE_MB)]
    pub max_size_mb: f64,

    /// Directory for chunk files (defaults to the input file's directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_request(self) -> SplitRequest {
        let request = SplitRequest::new(self.input).with_max_size_mb(self.max_size_mb);
        match self.output_dir {
            Some(dir) => request.with_output_dir(dir),
            None => request,
        }
    }
}
