mod catalog;
mod rank;
mod schedule;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use concierge_core::{load_app_config, Venue};
use tracing_subscriber::EnvFilter;

use crate::rank::RankArgs;

#[derive(Debug, Parser)]
#[command(name = "concierge-cli")]
#[command(about = "Venue catalog, ranking and booking-slot tools")]
struct Cli {
    /// Print JSON instead of aligned text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List venues from the venue table
    Venues {
        /// Only venues whose location contains this text
        #[arg(long)]
        area: Option<String>,
        /// Hide venues saved or binned in this profile (JSON file)
        #[arg(long)]
        profile: Option<std::path::PathBuf>,
    },
    /// Show the dishes served at a venue
    Menu {
        /// Venue id or name
        venue: String,
        /// Only dishes carrying this dietary tag, e.g. "Vegetarian"
        #[arg(long)]
        tag: Option<String>,
    },
    /// Rank venues against preferences
    Rank(RankArgs),
    /// Show reservation time slots for a venue
    Slots {
        /// Venue id or name
        venue: String,
        /// Include slots that are already too close to book today
        #[arg(long)]
        all: bool,
    },
    /// Show two-hour booking windows for a venue
    Windows {
        /// Venue id or name
        venue: String,
    },
    /// Show open/closed status for every venue
    Status,
}

fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("concierge-cli ready; run with --help for commands");
        return Ok(());
    };

    let venues = load_venues(&config.venues_path)?;
    match command {
        Commands::Venues { area, profile } => {
            catalog::run_venues(&venues, area.as_deref(), profile.as_deref(), cli.json)
        }
        Commands::Menu { venue, tag } => {
            catalog::run_menu(&config, &venues, &venue, tag.as_deref(), cli.json)
        }
        Commands::Rank(args) => rank::run_rank(&config, &venues, &args, cli.json),
        Commands::Slots { venue, all } => {
            schedule::run_slots(&config, &venues, &venue, all, cli.json)
        }
        Commands::Windows { venue } => schedule::run_windows(&venues, &venue, cli.json),
        Commands::Status => schedule::run_status(&config, &venues, cli.json),
    }
}

fn read_table(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_venues(path: &Path) -> anyhow::Result<Vec<Venue>> {
    Ok(concierge_ingest::parse_venues(&read_table(path)?))
}

/// Looks a venue up by exact id, then by case-insensitive name.
fn find_venue<'a>(venues: &'a [Venue], key: &str) -> anyhow::Result<&'a Venue> {
    venues
        .iter()
        .find(|v| v.id == key)
        .or_else(|| venues.iter().find(|v| v.name.eq_ignore_ascii_case(key)))
        .ok_or_else(|| anyhow::anyhow!("venue '{key}' not found"))
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
