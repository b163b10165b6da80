mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use pdf_splitter::PdfSplitter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Stdout carries only the JSON result, so logs go to stderr
    let default_filter = if cli.verbose {
        "pdf_splitter=debug"
    } else {
        "pdf_splitter=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let request = cli.into_request();
    let result = PdfSplitter::split(&request);

    let json = serde_json::to_string(&result).context("Failed to serialize split result")?;
    println!("{}", json);

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
