// CreatorScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration and logging initialisation (debug mode support)
// 3. Catalog snapshot loading
// 4. Query evaluation, result listing, and optional export

use clap::Parser;
use creatorscope::app::state::AppState;
use creatorscope::core::export::{export_csv, export_json};
use creatorscope::core::filter::QueryState;
use creatorscope::core::format::format_number;
use creatorscope::core::model::CreatorRecord;
use creatorscope::core::range::NumericRange;
use creatorscope::core::sort::SortKey;
use creatorscope::platform;
use creatorscope::platform::config::AppConfig;
use creatorscope::util;
use creatorscope::util::error::{CreatorScopeError, ExportError, FilterError};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// CreatorScope - creator directory search.
///
/// Loads a creator catalog snapshot and lists the creators matching a search
/// term, genre, platform, location, price range and follower range.
#[derive(Parser, Debug)]
#[command(name = "creatorscope", version, about)]
struct Cli {
    /// Catalog JSON file (array of creators, or {"creators": [...]}).
    catalog: PathBuf,

    /// Free-text search over name, tags and genre.
    #[arg(short = 's', long)]
    search: Option<String>,

    /// Genre pre-filter.
    #[arg(short = 'g', long, default_value = util::constants::ALL_GENRES)]
    genre: String,

    /// Exact platform name.
    #[arg(short = 'p', long)]
    platform: Option<String>,

    /// Location substring (case-insensitive).
    #[arg(short = 'l', long)]
    location: Option<String>,

    /// Minimum price in currency units.
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum price in currency units.
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum followers, in thousands.
    #[arg(long)]
    min_followers: Option<f64>,

    /// Maximum followers, in thousands.
    #[arg(long)]
    max_followers: Option<f64>,

    /// Sort key: followers, views, price, name, or original.
    #[arg(short = 'o', long)]
    sort: Option<String>,

    /// Print the platform, location and genre options and exit.
    #[arg(long)]
    options: bool,

    /// Write the visible result to a CSV file.
    #[arg(long = "export-csv")]
    export_csv: Option<PathBuf>,

    /// Write the visible result to a JSON file.
    #[arg(long = "export-json")]
    export_json: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Override one or both bounds of `base`.
fn override_range(
    base: NumericRange,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<NumericRange, FilterError> {
    NumericRange::new(min.unwrap_or(base.min()), max.unwrap_or(base.max()))
}

/// Build the query state from config defaults plus CLI overrides.
fn build_query(cli: &Cli, defaults: &QueryState) -> Result<QueryState, FilterError> {
    let mut query = defaults.clone();
    if let Some(ref term) = cli.search {
        query.set_search(term);
    }
    if let Some(ref platform) = cli.platform {
        query.platform = platform.clone();
    }
    if let Some(ref location) = cli.location {
        query.location = location.clone();
    }
    if let Some(ref sort) = cli.sort {
        if !SortKey::is_known(sort) {
            tracing::warn!(sort = %sort, "Unknown sort key; keeping original order");
        }
        query.sort_key = SortKey::parse(sort);
    }
    query.price_range = override_range(query.price_range, cli.min_price, cli.max_price)?;
    query.followers_range =
        override_range(query.followers_range, cli.min_followers, cli.max_followers)?;
    Ok(query)
}

fn print_options(state: &AppState) {
    println!("Platforms: {}", state.catalog.platform_options().join(", "));
    println!("Locations: {}", state.catalog.location_options().join(", "));
    println!("Genres:    {}", state.catalog.genre_options().join(", "));
}

fn print_results(state: &AppState) {
    println!("{} - {}", state.active_genre, state.status_message);
    let labels = state.query.active_filter_labels(&state.default_query);
    if !labels.is_empty() {
        println!("Active filters: {}", labels.join(", "));
    }
    let visible = state.visible();
    if visible.is_empty() {
        println!("No creators found. Try adjusting your search or filters.");
        return;
    }
    for (rank, creator) in visible.iter().enumerate() {
        println!("{}", describe(rank + 1, creator));
    }
}

fn describe(rank: usize, creator: &CreatorRecord) -> String {
    let platform = match creator.platform() {
        "" => "-",
        p => p,
    };
    format!(
        "{rank:>4}. {} ({}) [{platform}] {} | {} followers | {} views | {} avg | {}",
        creator.name,
        creator.genre,
        creator.location_label(),
        format_number(creator.followers()),
        format_number(creator.total_views()),
        format_number(creator.average_views()),
        creator.pricing().unwrap_or("-"),
    )
}

fn create_export_file(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

fn run_exports(cli: &Cli, state: &AppState, max_entries: usize) -> Result<(), CreatorScopeError> {
    let visible = state.visible();
    if let Some(ref path) = cli.export_csv {
        let count = export_csv(&visible, create_export_file(path)?, path, max_entries)?;
        tracing::info!(path = %path.display(), count, "Exported CSV");
        eprintln!("Exported {count} creators to {}", path.display());
    }
    if let Some(ref path) = cli.export_json {
        let count = export_json(&visible, create_export_file(path)?, path, max_entries)?;
        tracing::info!(path = %path.display(), count, "Exported JSON");
        eprintln!("Exported {count} creators to {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging is initialised so [logging] applies.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "CreatorScope starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
        eprintln!("Warning: {warning}");
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!(error = %e, "CreatorScope failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Build the query, load the catalog, then list or export the result.
fn run(cli: &Cli, config: &AppConfig) -> Result<(), CreatorScopeError> {
    let query = build_query(cli, &config.default_query)?;

    let mut state = AppState::new(config.default_query.clone());
    state.query = query;
    state.active_genre = cli.genre.clone();

    match platform::fs::load_catalog(&cli.catalog) {
        Ok(records) => state.set_catalog(records),
        Err(e) => {
            state.set_load_failed(e.to_string());
            return Err(e.into());
        }
    }
    for warning in &state.warnings {
        eprintln!("Warning: {warning}");
    }

    if cli.options {
        print_options(&state);
        return Ok(());
    }

    print_results(&state);
    run_exports(cli, &state, config.max_export_entries)
}
