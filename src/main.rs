mod config;
mod dispatcher;
mod extractor;
mod host;
mod model;
mod mpris;
mod page;
mod runtime;

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting volumio-bridge v{}", env!("CARGO_PKG_VERSION"));
    runtime::run()?;
    Ok(())
}
