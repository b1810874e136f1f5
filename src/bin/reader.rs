use anyhow::{Context, Result};
use clap::Parser;
use credit_records::{logging, store};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(about = "Read the first credit record from a binary file and print it")]
struct Args {
    /// Input file path to read (written by credit_records)
    #[arg(long, short = 'i', env = "CREDIT_FILE", default_value = "credit.dat")]
    input: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let _ = dotenv();
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let client = store::read(&args.input).with_context(|| format!("read {:?}", args.input))?;
    info!(path = %args.input.display(), "record read");
    println!("{}", client);
    Ok(())
}
