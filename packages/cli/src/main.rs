#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the brønd map.
//!
//! ```text
//! broend_map groups  --input wells.geojson [--search vej] [--min-size 3] [--status Gældende]
//! broend_map summary --input wells.geojson [--search vej] [--min-size 3] [--status Gældende]
//! broend_map hulls   --input wells.geojson
//! broend_map points  --input wells.geojson
//! ```
//!
//! Output is pretty-printed JSON on stdout. A file that fails to load
//! yields the empty view, followed by a non-zero exit.

use std::path::PathBuf;

use broend_map_dashboard::{Dashboard, DashboardConfig};
use broend_map_grouping_models::FilterUpdate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "broend_map",
    about = "Group wells by street and build cluster hulls"
)]
struct Cli {
    /// Wells `GeoJSON` `FeatureCollection`
    #[arg(long, global = true, default_value = "broende.geojson")]
    input: PathBuf,

    /// TOML file overriding the default configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Street groups passing the filter
    Groups(FilterArgs),
    /// Group and well totals passing the filter
    Summary(FilterArgs),
    /// Cluster hull polygons as a `FeatureCollection`
    Hulls,
    /// Wells as a point `FeatureCollection`
    Points,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Case-insensitive street name search
    #[arg(long)]
    search: Option<String>,
    /// Minimum number of wells per street
    #[arg(long)]
    min_size: Option<usize>,
    /// Keep streets with any well in this status (repeatable)
    #[arg(long = "status")]
    statuses: Vec<String>,
}

impl FilterArgs {
    fn into_update(self) -> FilterUpdate {
        let mut update = FilterUpdate::default();
        if let Some(search) = self.search {
            update = update.text_search(search);
        }
        if let Some(min_size) = self.min_size {
            update = update.min_size(min_size);
        }
        if !self.statuses.is_empty() {
            update = update.status_allow_list(self.statuses);
        }
        update
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = DashboardConfig::load(cli.config.as_deref())?;
    let mut dashboard = Dashboard::new(config);
    dashboard.set_load_state(broend_map_source::load_state_from_path(&cli.input));

    let json = match cli.command {
        Commands::Groups(filter) => {
            dashboard.update_filter(filter.into_update());
            serde_json::to_string_pretty(&dashboard.groups())?
        }
        Commands::Summary(filter) => {
            dashboard.update_filter(filter.into_update());
            serde_json::to_string_pretty(&dashboard.summary())?
        }
        Commands::Hulls => serde_json::to_string_pretty(&dashboard.hull_collection())?,
        Commands::Points => serde_json::to_string_pretty(&dashboard.point_collection())?,
    };

    println!("{json}");

    if let Some(error) = dashboard.error() {
        return Err(format!("Failed to load {}: {error}", cli.input.display()).into());
    }

    log::debug!("Done at revision {}", dashboard.revision());
    Ok(())
}
