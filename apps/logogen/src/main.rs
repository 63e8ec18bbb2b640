use anyhow::{bail, Result};
use logogen::{generate, Config};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging on stderr; stdout carries the progress lines
fn init_logging() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(console_layer)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::default();
    debug!("Config: {}", serde_json::to_string(&config)?);

    let stdout = std::io::stdout();
    let report = generate(&config, &mut stdout.lock())?;

    if !report.is_success() {
        bail!("{} icon(s) could not be created", report.failed().count());
    }

    Ok(())
}
