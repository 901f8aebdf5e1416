//! Locale URL server.
//!
//! Serves an echo application behind the locale middleware: every request
//! is split into locale + bare path, non-canonical paths are redirected, and
//! the response reports the locale context and alternate-locale links.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use localeurl::config::{load_config, LocaleUrlConfig};
use localeurl::lifecycle::shutdown_signal;
use localeurl::observability::logging::init_logging;
use localeurl::LocaleServer;

#[derive(Parser)]
#[command(name = "localeurl")]
#[command(about = "Locale-prefixed URL server", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "LOCALEURL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address from the configuration.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => LocaleUrlConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.server.bind_address,
        locales = ?config.locales.supported,
        default_locale = %config.locales.default,
        mount_prefix = %config.mount.prefix,
        "localeurl v0.1.0 starting"
    );

    let server = LocaleServer::new(&config)?;

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
