//! Log setup shared by the writer and reader binaries.
use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Map a level name to a tracing level. Unknown names fall back to `WARN`.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install a global fmt subscriber on stderr, keeping stdout for program output.
pub fn init(level: &str) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
