use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use docs_schema::site::publish_site;
use docs_schema::{MetadataPublisher, PublisherConfig};

/// Attach the FastMCP Runner JSON-LD descriptor to built documentation pages.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML files or site directories to process
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Do not append when an identical descriptor is already in the page
    #[arg(long)]
    skip_if_present: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Setup Logging (RUST_LOG controls verbosity)
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Build the publisher. Default config appends on every run,
    // --skip-if-present makes reruns over the same site a no-op.
    let config = PublisherConfig {
        skip_if_present: args.skip_if_present,
    };
    let publisher = MetadataPublisher::new(config);

    // 3. Walk the site. Pages without a <head> are logged and left alone;
    // only I/O failures make the exit status non-zero.
    let summary = publish_site(&args.paths, &publisher)?;
    tracing::info!("Processed {} page(s)", summary.pages());

    Ok(())
}
