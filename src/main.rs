//! Nestfind CLI application entry point
//!
//! Runs a one-shot search over a catalog file and prints the matching
//! listings as cards.
//!
//! # Usage
//!
//! ```bash
//! # Every rental in the catalog
//! nestfind search --catalog listings.json
//!
//! # Two-bedroom, pet-friendly rentals in Seattle
//! nestfind search -c listings.json -Q seattle --min-beds 2 --pets
//!
//! # Stays that sleep four over a holiday week
//! nestfind s -c listings.json -m stays -g 4 --check-in 2026-12-20 --check-out 2026-12-27
//!
//! # Open the detail view for a listing
//! nestfind search -c listings.json -m buy --open 103
//!
//! # Show effective configuration
//! nestfind config show
//! ```
//!
//! # Configuration
//!
//! Settings are read from `~/.config/nestfind/config.toml` on Linux when the
//! file exists, then from `NESTFIND_*` environment variables.

use nestfind::{
    NestfindError,
    cli::{Cli, Commands, ConfigCommands, SearchArgs},
    config::EngineConfig,
    listing::Catalog,
    output,
    search::{ResultsView, SearchMode, SearchSession},
    telemetry,
};
use std::time::Instant;

type Result<T> = std::result::Result<T, NestfindError>;

fn handle_search_command(config: EngineConfig, args: &SearchArgs, quiet: bool) -> Result<()> {
    let catalog = Catalog::load(&args.catalog)?;
    let mode = SearchMode::from(args.mode);
    let filters = args.filter_state()?;

    let started = Instant::now();
    let mut session = SearchSession::builder()
        .catalog(catalog)
        .config(config)
        .initial_mode(mode)
        .build(started)?;

    session.set_query(args.query.as_str());
    session.set_filters(filters);

    // Nothing is animated here; jump straight past the loading phase.
    session.tick(started + session.config().loading_delay());

    match session.results() {
        ResultsView::Ready { listings } => {
            if !quiet {
                println!("{}", output::result_count(mode, listings.len()));
            }
            for view in session.cards() {
                println!("{}", output::card(&view, quiet));
            }
        }
        ResultsView::Empty { can_clear_filters } => {
            if !quiet {
                println!("{}", output::empty_state(mode, can_clear_filters));
            }
        }
        ResultsView::Loading { .. } => {
            tracing::warn!("results still loading after delay elapsed");
        }
    }

    if let Some(id) = args.open_id() {
        match session.click(id) {
            Some(view) => {
                if let Some(listing) = session.selected() {
                    println!("{}", output::detail_header(view, listing));
                }
            }
            None => {
                return Err(NestfindError::InvalidInput(format!(
                    "Listing {id} is not among the {mode} results"
                )));
            }
        }
    }

    Ok(())
}

fn handle_config_command(config: &EngineConfig, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => println!("{}", EngineConfig::config_path()?.display()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = EngineConfig::load_from(cli.config.as_deref())?;
    telemetry::init(&config)?;

    match &cli.command {
        Commands::Search(args) => handle_search_command(config, args, cli.quiet),
        Commands::Config { command } => handle_config_command(&config, command),
    }
}
