//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weighcheck_domain::model::VehicleType;
use weighcheck_types::OutputFormat;

#[derive(Parser)]
#[command(name = "weighcheck")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Truck axle and gross weight compliance checker")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Use an alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single vehicle
    Check {
        /// Path to a vehicle JSON file
        #[arg(long, conflicts_with_all = ["weights", "spacing", "gross", "length"])]
        file: Option<PathBuf>,

        /// Axle weights in pounds, front to rear (e.g. 12000,17000,17000)
        #[arg(long, value_delimiter = ',')]
        weights: Vec<f64>,

        /// Spacing between consecutive axles in feet (e.g. 14,4.5)
        #[arg(long, value_delimiter = ',')]
        spacing: Vec<f64>,

        /// Gross weight in pounds. Defaults to the sum of the axle weights.
        #[arg(long)]
        gross: Option<f64>,

        /// Overall vehicle length in feet. Defaults to the summed spacing.
        #[arg(long)]
        length: Option<f64>,

        /// Vehicle type (semi, dump, tanker, flatbed, box, other)
        #[arg(long, default_value = "semi")]
        vehicle_type: VehicleType,

        /// Jurisdiction code (e.g. "TX"). Uses config default, then federal.
        #[arg(long, short = 's')]
        state: Option<String>,
    },

    /// Check every weigh ticket in a CSV file
    Batch {
        /// Path to CSV file containing weigh tickets
        #[arg(long)]
        csv: PathBuf,

        /// Jurisdiction for tickets that do not record one
        #[arg(long, short = 's')]
        state: Option<String>,

        /// Also export results to this Excel file
        #[arg(long)]
        excel: Option<PathBuf>,
    },

    /// Compute the bridge formula maximum for an axle group
    Bridge {
        /// Span between the outer axles in feet
        #[arg(long)]
        length: f64,

        /// Number of axles in the group
        #[arg(long)]
        axles: usize,
    },

    /// Show weight limit profiles
    Limits {
        /// Show a single jurisdiction instead of all
        #[arg(long, short = 's')]
        state: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default jurisdiction
        #[arg(long)]
        set_jurisdiction: Option<String>,

        /// Clear default jurisdiction (use federal limits)
        #[arg(long, conflicts_with = "set_jurisdiction")]
        clear_jurisdiction: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default Excel export directory
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
