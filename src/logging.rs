use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Reads `LOG_LEVEL`, falling back to `INFO` when unset or unparsable.
pub fn level_from_env() -> Level {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::INFO)
}
