// ⚙️ Configuration - Command-line flags with environment fallbacks
// Paths only; the cleaning rules themselves are fixed.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "data/raw/sales_data_raw.csv";
pub const DEFAULT_OUTPUT: &str = "data/processed/sales_data_clean.csv";

/// Clean a raw sales CSV export into a canonical CSV
#[derive(Debug, Clone, Parser)]
#[command(name = "sales-cleaner", version, about)]
pub struct Config {
    /// Raw CSV to read
    #[arg(long, env = "SALES_CLEANER_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where the cleaned CSV is written
    #[arg(long, env = "SALES_CLEANER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Rows of the cleaned table to print after a successful run
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
