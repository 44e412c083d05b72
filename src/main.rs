use anyhow::{Context, Result};
use create_favicon::config::Config;
use create_favicon::constants::{CONFIRMATION_MESSAGE, DEFAULT_LOG_FILTER};
use create_favicon::produce::produce;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    init_tracing();

    let produced = produce(&config).context("could not create favicon")?;
    tracing::info!(path = %produced.path.display(), bytes = produced.bytes, "favicon ready");

    println!("{CONFIRMATION_MESSAGE}");
    Ok(())
}
