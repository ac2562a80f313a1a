//! CLI definition using clap

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use haulfleet_types::OutputFormat;
use std::path::PathBuf;

/// Smallest and largest fleet the CLI will create
const MIN_TRUCKS: u64 = 1;
const MAX_TRUCKS: u64 = 20;

fn fleet_size_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(MIN_TRUCKS..=MAX_TRUCKS)
}

#[derive(Parser)]
#[command(name = "haulfleet")]
#[command(version)]
#[command(about = "Haul truck availability, utilization and productivity calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Fleet file to use instead of the configured one
    #[arg(long, global = true)]
    pub fleet: Option<PathBuf>,

    /// Duration table (TOML) to use instead of the configured one
    #[arg(long, global = true)]
    pub durations: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new fleet, replacing the saved one
    Init {
        /// Number of trucks (1-20). Uses config value if not specified.
        #[arg(long, short = 'n', value_parser = fleet_size_parser())]
        trucks: Option<usize>,

        /// Start every truck with zero counts instead of the reference plan
        #[arg(long)]
        blank: bool,
    },

    /// Show the saved fleet records
    Show,

    /// Edit one truck's record
    Set {
        /// Truck label (e.g., "CM-003")
        truck: String,

        /// Field assignments (e.g., qty_250h=35 corrective_rate=0.25)
        #[arg(required = true)]
        assignments: Vec<String>,
    },

    /// Grow or shrink the fleet, keeping existing edits
    Resize {
        /// New number of trucks (1-20)
        #[arg(value_parser = fleet_size_parser())]
        trucks: usize,
    },

    /// Replace the fleet with records from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,

        /// Validate the file without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the fleet records to a CSV file
    Export {
        /// Output CSV file path
        file: PathBuf,
    },

    /// Compute DF, available hours, lost time and utilization
    Evaluate {
        /// Evaluate only this truck
        #[arg(long, short = 't')]
        truck: Option<String>,

        /// Print a DF bar chart after the table
        #[arg(long)]
        chart: bool,
    },

    /// Estimate hourly tonnage for a haul cycle
    Productivity(ProductivityArgs),

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the number of trucks used when no fleet is saved (1-20)
        #[arg(long, value_parser = fleet_size_parser())]
        set_fleet_size: Option<usize>,

        /// Set the fleet file path
        #[arg(long)]
        set_fleet_file: Option<PathBuf>,

        /// Set the duration table (TOML) path
        #[arg(long)]
        set_durations_file: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Haul cycle inputs. Each segment distance applies to both the loaded and
/// the empty leg.
#[derive(Args, Debug, Clone, Default)]
pub struct ProductivityArgs {
    /// Read the whole cycle from a TOML file; flags given alongside override it
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Horizontal segment distance (m)
    #[arg(long)]
    pub horizontal_m: Option<f64>,

    /// Horizontal loaded speed (km/h)
    #[arg(long)]
    pub horizontal_loaded_kmh: Option<f64>,

    /// Horizontal empty speed (km/h)
    #[arg(long)]
    pub horizontal_empty_kmh: Option<f64>,

    /// Uphill segment distance (m)
    #[arg(long)]
    pub uphill_m: Option<f64>,

    /// Uphill loaded speed (km/h)
    #[arg(long)]
    pub uphill_loaded_kmh: Option<f64>,

    /// Uphill empty speed (km/h)
    #[arg(long)]
    pub uphill_empty_kmh: Option<f64>,

    /// Downhill segment distance (m)
    #[arg(long)]
    pub downhill_m: Option<f64>,

    /// Downhill loaded speed (km/h)
    #[arg(long)]
    pub downhill_loaded_kmh: Option<f64>,

    /// Downhill empty speed (km/h)
    #[arg(long)]
    pub downhill_empty_kmh: Option<f64>,

    /// Truck capacity (t)
    #[arg(long, short = 'c')]
    pub capacity: Option<f64>,

    /// Fill factor (%)
    #[arg(long)]
    pub fill_factor: Option<f64>,
}
