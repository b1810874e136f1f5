use anyhow::{Context, Result};
use clap::Parser;
use credit_records::record::{Credit, LastName, RECORD_SIZE};
use credit_records::{logging, store};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Write one fixed-layout credit record to a binary file")]
struct Args {
    /// Output file path; created or truncated
    #[arg(long, short = 'o', env = "CREDIT_FILE", default_value = "credit.dat")]
    out: PathBuf,

    /// Account number
    #[arg(long, default_value_t = 255, allow_negative_numbers = true)]
    account: i32,

    /// Last name (at most 16 bytes of UTF-8)
    #[arg(long, default_value = "Dow")]
    last_name: LastName,

    /// Account balance
    #[arg(long, default_value_t = 1000.10, allow_negative_numbers = true)]
    balance: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let client = Credit { account_number: args.account, last_name: args.last_name, balance: args.balance };
    store::write(&args.out, &client).with_context(|| format!("write {:?}", args.out))?;
    info!(path = %args.out.display(), "record written");

    println!("Size of the Credit type: {}", RECORD_SIZE);
    Ok(())
}
