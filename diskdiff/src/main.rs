// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use diskdiff::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so the console report stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    diskdiff::run(args)
}
