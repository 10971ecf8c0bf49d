use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "martgen",
    about = "Generate a synthetic retail star-schema data mart with injected data-quality defects",
    version,
    after_help = "Examples:\n  martgen generate --out-dir ./data --seed 64648\n  martgen generate --customers 500 --transactions 100000\n  martgen generate --start-date 2023-01-01 --end-date 2023-12-31\n  martgen preview --rows 5"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the five CSV tables
    Generate(GenerateArgs),

    /// Preview sample rows of each table without writing files
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Customer dimension row count (default 100)
    #[arg(long)]
    pub customers: Option<usize>,

    /// Product dimension row count (default 80)
    #[arg(long)]
    pub products: Option<usize>,

    /// Sales fact row count (default 20000)
    #[arg(long)]
    pub transactions: Option<usize>,

    /// First day of the date dimension, YYYY-MM-DD (default 2022-01-01)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the date dimension, YYYY-MM-DD (default 2024-12-31)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Random seed for deterministic generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for the generated CSV files
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Number of sample rows to display per table
    #[arg(long, default_value = "5")]
    pub rows: usize,
}
