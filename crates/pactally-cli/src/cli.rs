//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pactally::{DateRange, FilterPreference, ScoreSort};

#[derive(Parser)]
#[command(name = "pactally")]
#[command(about = "Arcade score tracker and statistics", version)]
pub struct Args {
    /// Config file (TOML)
    #[arg(short, long, env = "PACTALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Score table, overriding the config
    #[arg(short, long, env = "PACTALLY_DATA")]
    pub data: Option<PathBuf>,

    /// Treat this date as today (MM/DD/YY or YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import `date,score,level` rows from a file
    Import {
        file: PathBuf,
    },
    /// Record a game
    Add {
        score: u32,
        level: i32,
        /// Defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a game
    Delete {
        score: u32,
        level: i32,
        #[arg(long)]
        date: String,
    },
    /// List scores
    List {
        /// Plain sorted view
        #[arg(short, long, conflicts_with_all = ["filter", "range", "percent"])]
        sort: Option<ScoreSort>,
        /// Selection, defaults to the configured preference
        #[arg(short, long)]
        filter: Option<FilterPreference>,
        /// Date range, defaults to the configured range
        #[arg(short, long)]
        range: Option<DateRange>,
        /// Keep this many scores (unspecified range)
        #[arg(long)]
        count: Option<usize>,
        /// Keep this percentage of scores (unspecified range)
        #[arg(long)]
        percent: Option<f64>,
    },
    /// Headline statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Statistics for one day
    Day {
        date: String,
    },
    /// Current and longest play streaks
    Streak,
    /// Level scoring table
    Levels {
        #[arg(long, default_value_t = 20)]
        max: u32,
    },
    /// Export all scores
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
