//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for nestfind using the `clap` crate.
//!
//! # Commands
//!
//! - **search**: Filter a catalog file and print matching listings as cards
//! - **config**: Show the effective configuration or where it is read from
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use nestfind::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["nestfind", "search", "--catalog", "listings.json", "--min-beds", "2"]);
//! assert!(matches!(cli.command, Commands::Search(_)));
//! ```

use crate::NestfindError;
use crate::filters::{FilterState, PriceRange};
use crate::listing::{DateRange, ListingId};
use crate::search::SearchMode;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Catalog to search
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeArg {
    /// Long-term rentals
    #[default]
    Rent,
    /// Homes for sale
    Buy,
    /// Short-term stays
    Stays,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Rent => Self::Rent,
            ModeArg::Buy => Self::Buy,
            ModeArg::Stays => Self::Stays,
        }
    }
}

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog JSON file with `rentals`, `properties` and `stays`
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: PathBuf,

    /// Catalog to search
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = ModeArg::Rent)]
    pub mode: ModeArg,

    /// Location text to match (case-insensitive substring)
    #[arg(short = 'Q', long = "query", default_value = "")]
    pub query: String,

    /// Lowest acceptable price
    #[arg(long = "price-min", value_name = "USD")]
    pub price_min: Option<u64>,

    /// Highest acceptable price
    #[arg(long = "price-max", value_name = "USD")]
    pub price_max: Option<u64>,

    /// Minimum number of bedrooms
    #[arg(short = 'b', long = "min-beds")]
    pub min_beds: Option<u32>,

    /// Only show pet-friendly listings
    #[arg(short = 'p', long = "pets")]
    pub pets: bool,

    /// Required amenity (can be specified multiple times)
    #[arg(short = 'a', long = "amenity", value_name = "AMENITY")]
    pub amenities: Vec<String>,

    /// Acceptable property type (can be specified multiple times)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub property_types: Vec<String>,

    /// Minimum number of guests the stay must sleep
    #[arg(short = 'g', long = "min-guests")]
    pub min_guests: Option<u32>,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long = "check-in", requires = "check_out")]
    pub check_in: Option<NaiveDate>,

    /// Checkout day (YYYY-MM-DD)
    #[arg(long = "check-out", requires = "check_in")]
    pub check_out: Option<NaiveDate>,

    /// Open the detail view for a listing id after filtering
    #[arg(short = 'o', long = "open", value_name = "ID")]
    pub open: Option<u32>,
}

impl SearchArgs {
    /// Build the filter state described by the flags
    ///
    /// # Errors
    ///
    /// Returns `NestfindError::InvalidInput` if check-out precedes check-in.
    pub fn filter_state(&self) -> Result<FilterState, NestfindError> {
        let price_range = match (self.price_min, self.price_max) {
            (None, None) => None,
            (min, max) => Some(PriceRange::new(min.unwrap_or(0), max.unwrap_or(u64::MAX))),
        };

        let date_range = match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if end < start => {
                return Err(NestfindError::InvalidInput(format!(
                    "check-out {end} is before check-in {start}"
                )));
            }
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };

        Ok(FilterState {
            price_range,
            min_beds: self.min_beds,
            pets_allowed: self.pets.then_some(true),
            amenities: (!self.amenities.is_empty()).then(|| self.amenities.clone()),
            property_type: (!self.property_types.is_empty()).then(|| self.property_types.clone()),
            min_guests: self.min_guests,
            date_range,
        })
    }

    #[must_use]
    pub fn open_id(&self) -> Option<ListingId> {
        self.open.map(ListingId)
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default config file location
    Path,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Filter a catalog and print matching listings
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Property listing search
#[derive(Parser, Debug)]
#[command(name = "nestfind", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read settings from this TOML file instead of the default location
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
