use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use localeurl::config::{load_config, LocaleUrlConfig};
use localeurl::LocaleRouter;

#[derive(Parser)]
#[command(name = "localeurl-cli")]
#[command(about = "Inspect locale URL decisions for a configuration", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "LOCALEURL_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the locale prefix off a path
    Split { path: String },
    /// Compose the locale path for a bare path
    Compose {
        path: String,
        #[arg(short, long, default_value = "")]
        locale: String,
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        routing_key: Option<String>,
    },
    /// Build the full URL (mount prefix included) for a bare path
    Url {
        path: String,
        #[arg(short, long, default_value = "")]
        locale: String,
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        routing_key: Option<String>,
    },
    /// Re-target a URL to another locale
    Chlocale {
        url: String,
        locale: String,
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        routing_key: Option<String>,
    },
    /// Remove the locale segment from a URL
    Rmlocale { url: String },
    /// Validate the configuration and print a summary
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LocaleUrlConfig::default(),
    };
    let router = LocaleRouter::from_config(&config)?;

    let output = match cli.command {
        Commands::Split { path } => {
            let (locale, rest) = router.split_locale(&path);
            json!({ "locale": locale, "path": rest })
        }
        Commands::Compose {
            path,
            locale,
            host,
            routing_key,
        } => {
            let result = router.localize(&path, &locale, host.as_deref(), routing_key.as_deref());
            json!({
                "path": result.path,
                "locale": result.locale,
                "decision": result.decision.as_str(),
            })
        }
        Commands::Url {
            path,
            locale,
            host,
            routing_key,
        } => {
            let url = router.build_localized_url(
                &path,
                &locale,
                host.as_deref(),
                None,
                routing_key.as_deref(),
            );
            json!({ "url": url })
        }
        Commands::Chlocale {
            url,
            locale,
            host,
            routing_key,
        } => {
            let url = router.change_locale(&url, &locale, host.as_deref(), routing_key.as_deref())?;
            json!({ "url": url })
        }
        Commands::Rmlocale { url } => {
            json!({ "url": router.remove_locale(&url)? })
        }
        Commands::Check => json!({
            "supported": router.registry().supported(),
            "default_locale": router.registry().default_locale(),
            "prefix_default_locale": router.prefix_default_locale(),
            "mount_prefix": router.mount_prefix().as_str(),
            "restrict_mode": router.exemptions().restrict_mode(),
        }),
    };

    print_output(&output, cli.json)
}

fn print_output(output: &Value, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }

    if let Value::Object(fields) = output {
        for (key, value) in fields {
            match value {
                Value::String(s) => println!("{key}: {s}"),
                Value::Null => println!("{key}: -"),
                other => println!("{key}: {other}"),
            }
        }
    }
    Ok(())
}
