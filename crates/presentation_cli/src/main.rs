//! GeoAddr CLI
//!
//! Resolves a location through the Google Geocoding API and prints the
//! formatted address, coordinates or individual address parts.

#![allow(clippy::print_stdout)]

mod commands;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use integration_geocoding::{GoogleGeocodingClient, NameForm};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Field;
use crate::settings::CliConfig;

/// GeoAddr CLI
#[derive(Parser)]
#[command(name = "geoaddr-cli")]
#[command(author, version, about = "Address lookups via the Google Geocoding API", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./geoaddr.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Google Maps Platform API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the formatted address, coordinates and every address part
    Lookup {
        /// Free-form location, e.g. "1600 Amphitheatre Parkway"
        location: String,

        /// Print abbreviated component names
        #[arg(short, long)]
        short: bool,
    },

    /// Print a single field
    ///
    /// Fields: address, coordinates, street-number, street, city, state,
    /// country, postal-code
    Get {
        /// Free-form location
        location: String,

        /// Field to print
        field: Field,

        /// Print the abbreviated component name
        #[arg(short, long)]
        short: bool,
    },

    /// Print the parsed API response as JSON
    Raw {
        /// Free-form location
        location: String,
    },
}

/// Map verbosity level to log filter string
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn init_tracing(verbose: u8, configured: &str) {
    let filter = log_filter_from_verbosity(verbose).map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        EnvFilter::new,
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.api_key, cli.timeout);

    init_tracing(cli.verbose, &config.log_filter);
    debug!(?config, "Configuration loaded");

    let client = GoogleGeocodingClient::new(&config.geocoding)?;

    let output = match cli.command {
        Commands::Lookup { location, short } => {
            commands::lookup(&client, &location, NameForm::from_short_flag(short)).await?
        },
        Commands::Get {
            location,
            field,
            short,
        } => commands::get(&client, &location, field, NameForm::from_short_flag(short)).await?,
        Commands::Raw { location } => commands::raw(&client, &location).await?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
