use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use lsr_harvest::run_with_config_path;

/// lsr-harvest - writes the current Local Storm Reports to a text file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a YAML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = Args::parse();

    run_with_config_path(args.config.as_deref())
        .await
        .context("harvest failed")?;
    Ok(())
}
