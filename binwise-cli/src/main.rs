//! Command-line assistant that finds a resident's collection zone, lists pickup days,
//! and explains how to dispose of household items.
#![allow(
    clippy::print_stdout,
    reason = "command results are written to stdout, logs go to stderr"
)]

mod data;
mod output;
mod store;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use binwise_core::{
    BinwiseService, Coordinates, DateRange, ItemId, LocationStore, MaterialCategory, TownId,
    TownRegistry, ZoneMatch, ZoneQuery,
};
use binwise_town_oradell as oradell;
use binwise_town_paramus as paramus;
use chrono::{Days, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::data::ReferenceData;
use crate::output::{DisposalReport, Format, ZoneReport};
use crate::store::JsonFileLocationStore;

const DEFAULT_LOG_FILTER: &str = "binwise_core=info,binwise=info";

#[derive(Parser)]
#[command(name = "binwise", version)]
#[command(about = "Find your collection zone, pickup days, and how to dispose of items")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra towns, items, and rules as JSON
    #[arg(long, env = "BINWISE_DATA", global = true)]
    data: Option<PathBuf>,

    /// File holding the saved location
    #[arg(
        long,
        env = "BINWISE_LOCATION_FILE",
        default_value = "binwise-location.json",
        global = true
    )]
    location_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// List towns, optionally filtered by name or county
    Towns {
        /// Part of a town or county name
        query: Option<String>,
    },

    /// Find the collection zone of an address without saving it
    Zone {
        /// Town identifier, e.g. oradell-nj
        #[arg(long)]
        town: String,

        #[command(flatten)]
        position: Position,

        /// Show every zone that could hold the address
        #[arg(long)]
        all: bool,

        /// Street address, e.g. "650 Oradell Ave"
        address: String,
    },

    /// Pick the town (and address) you live at and remember it
    Locate {
        /// Town identifier, e.g. oradell-nj
        #[arg(long)]
        town: String,

        /// Street address used to find the collection zone
        #[arg(long)]
        address: Option<String>,

        #[command(flatten)]
        position: Position,
    },

    /// Show the saved location
    Whereami,

    /// Forget the saved location
    Forget,

    /// List known items
    Items {
        /// Only items of this material category, e.g. plastic or paper_cardboard
        #[arg(long, value_parser = parse_category)]
        category: Option<MaterialCategory>,
    },

    /// Explain how to dispose of an item at the saved location
    Disposal {
        /// Item identifier, e.g. item-plastic-bag
        item: String,

        /// Only consider rules in effect on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Upcoming pickups for the saved location
    Schedule {
        /// Number of days to look ahead, up to a year
        #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u32).range(1..=366))]
        days: u32,
    },
}

#[derive(Args)]
struct Position {
    /// Latitude of the address
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the address
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
}

impl Position {
    fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.lat?, self.lng?))
    }
}

fn parse_category(raw: &str) -> Result<MaterialCategory, String> {
    serde_json::from_value(Value::String(raw.trim().to_lowercase()))
        .map_err(|_err| format!("unknown category `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let service = build_service(cli.data.as_deref()).await?;
    let store = JsonFileLocationStore::new(cli.location_file);

    let output = run(cli.command, &service, &store, cli.format).await?;
    println!("{output}");
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_err) => EnvFilter::try_new(DEFAULT_LOG_FILTER)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

async fn build_service(data: Option<&Path>) -> Result<BinwiseService> {
    let mut plugins = vec![oradell::plugin(), paramus::plugin()];
    let mut catalog = binwise_catalog::catalog();

    if let Some(path) = data {
        let extra = ReferenceData::load(path).await?;
        info!(
            path = %path.display(),
            towns = extra.towns.len(),
            items = extra.catalog.items().len(),
            "loaded extra reference data"
        );
        plugins.extend(extra.towns);
        catalog.extend(extra.catalog);
    }

    let registry = Arc::new(TownRegistry::new(plugins));
    Ok(BinwiseService::new(registry, catalog))
}

async fn run(
    command: Commands,
    service: &BinwiseService,
    store: &dyn LocationStore,
    format: Format,
) -> Result<String> {
    let rendered = match command {
        Commands::Towns { query } => {
            let towns = service.search_towns(query.as_deref().unwrap_or_default());
            format.render(towns.as_slice(), output::town_lines)?
        }
        Commands::Zone {
            town,
            position,
            all,
            address,
        } => {
            let town = TownId(town);
            let coordinates = position.coordinates();
            let matches: Vec<ZoneMatch<'_>> = if all {
                let query = ZoneQuery::new(&address, coordinates);
                service
                    .possible_zones(&town, &address, coordinates)?
                    .into_iter()
                    .filter_map(|zone| {
                        query
                            .strategy_for(zone)
                            .map(|strategy| ZoneMatch { zone, strategy })
                    })
                    .collect()
            } else {
                service
                    .find_zone(&town, &address, coordinates)?
                    .into_iter()
                    .collect()
            };
            let reports: Vec<ZoneReport<'_>> = matches.into_iter().map(ZoneReport::from).collect();
            format.render(reports.as_slice(), |reports| {
                output::zone_lines(&address, reports)
            })?
        }
        Commands::Locate {
            town,
            address,
            position,
        } => {
            let location =
                service.locate(&TownId(town), address.as_deref(), position.coordinates())?;
            store
                .save(&location)
                .await
                .context("Failed to save location")?;
            format.render(&location, |location| {
                output::location_lines(Some(location))
            })?
        }
        Commands::Whereami => {
            let location = store.load().await.context("Failed to read saved location")?;
            format.render(&location, |location| {
                output::location_lines(location.as_ref())
            })?
        }
        Commands::Forget => {
            store.clear().await.context("Failed to clear saved location")?;
            format.render(&Value::Null, |_nothing| {
                vec!["Saved location cleared.".to_owned()]
            })?
        }
        Commands::Items { category } => {
            let items: Vec<_> = match category {
                Some(category) => service.catalog().items_by_category(category).collect(),
                None => service.catalog().items().iter().collect(),
            };
            format.render(items.as_slice(), output::item_lines)?
        }
        Commands::Disposal { item, date } => {
            let item_id = ItemId(item);
            let location = store.load().await.context("Failed to read saved location")?;
            let item = service.item(&item_id)?;
            let info = match date {
                Some(date) => service.disposal_for_on(&item_id, location.as_ref(), date)?,
                None => service.disposal_for(&item_id, location.as_ref())?,
            };
            let report = DisposalReport::new(item, info);
            format.render(&report, output::disposal_lines)?
        }
        Commands::Schedule { days } => {
            let location = store
                .load()
                .await
                .context("Failed to read saved location")?
                .context("No saved location. Run `binwise locate --town <ID>` first")?;
            let today = Local::now().date_naive();
            let end = today
                .checked_add_days(Days::new(days.into()))
                .context("Look-ahead window ends past the supported calendar")?;
            let range = DateRange { start: today, end };
            let pickups = service.schedule_for(&location, range)?;
            format.render(pickups.as_slice(), |pickups| {
                output::pickup_lines(pickups, today)
            })?
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use std::iter;

    use binwise_core::MemoryLocationStore;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn run_text(store: &MemoryLocationStore, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(iter::once("binwise").chain(args.iter().copied()))?;
        let service = build_service(None).await?;
        run(cli.command, &service, store, Format::Text).await
    }

    #[test]
    fn category_names_follow_data_format() {
        assert_eq!(parse_category("paper_cardboard"), Ok(MaterialCategory::PaperCardboard));
        assert_eq!(parse_category(" Plastic "), Ok(MaterialCategory::Plastic));
        assert!(parse_category("wood").is_err());
    }

    #[test]
    fn latitude_requires_longitude() {
        let without_lng = [
            "binwise", "zone", "--town", "paramus-nj", "--lat", "40.9", "1 Main St",
        ];
        assert!(Cli::try_parse_from(without_lng).is_err());

        let with_both = [
            "binwise",
            "zone",
            "--town",
            "paramus-nj",
            "--lat",
            "40.945",
            "--lng",
            "-74.07",
            "999 Unknown St",
        ];
        assert!(Cli::try_parse_from(with_both).is_ok());
    }

    #[tokio::test]
    async fn zone_command_reports_strategy() {
        let store = MemoryLocationStore::new();
        let text = run_text(&store, &["zone", "--town", "paramus-nj", "124 Main St"])
            .await
            .expect("zone command");
        assert_eq!(text, "Zone 2 - South Side (paramus-zone-2) matched by address range");
    }

    #[tokio::test]
    async fn locate_then_ask_for_disposal() {
        let store = MemoryLocationStore::new();
        run_text(
            &store,
            &["locate", "--town", "oradell-nj", "--address", "650 Oradell Ave"],
        )
        .await
        .expect("locate command");

        let saved = store.load().await.expect("load").expect("location saved");
        assert_eq!(saved.zone_id.map(|zone| zone.to_string()), Some("oradell-zone-1".to_owned()));

        let text = run_text(&store, &["disposal", "item-styrofoam"])
            .await
            .expect("disposal command");
        assert!(text.starts_with("Styrofoam: Curbside Trash"), "{text}");
        assert!(text.contains("Rule: oradell-nj (rule-oradell-styrofoam)"), "{text}");
    }

    #[test]
    fn look_ahead_is_limited_to_a_year() {
        assert!(Cli::try_parse_from(["binwise", "schedule", "--days", "366"]).is_ok());
        assert!(Cli::try_parse_from(["binwise", "schedule", "--days", "367"]).is_err());
        assert!(Cli::try_parse_from(["binwise", "schedule", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["binwise", "schedule", "--days", "4000000000"]).is_err());
    }

    #[tokio::test]
    async fn year_long_schedule_renders() {
        let store = MemoryLocationStore::new();
        run_text(
            &store,
            &["locate", "--town", "oradell-nj", "--address", "650 Oradell Ave"],
        )
        .await
        .expect("locate command");

        let text = run_text(&store, &["schedule", "--days", "366"])
            .await
            .expect("schedule command");
        assert!(text.contains("Garbage"), "{text}");
    }

    #[tokio::test]
    async fn schedule_needs_a_saved_location() {
        let store = MemoryLocationStore::new();
        assert!(run_text(&store, &["schedule"]).await.is_err());
    }

    #[tokio::test]
    async fn forget_clears_the_store() {
        let store = MemoryLocationStore::new();
        run_text(&store, &["locate", "--town", "paramus-nj"])
            .await
            .expect("locate command");
        run_text(&store, &["forget"]).await.expect("forget command");
        assert_eq!(store.load().await.expect("load"), None);
    }
}
