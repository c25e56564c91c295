mod application;
mod presentation;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zipfast_core::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    application::run().await
}
