mod cli;
mod commands;
mod format;
mod paths;

use anyhow::{Context, Result};
use clap::Parser;
use pactally::{FixedClock, StatManager, TrackerConfig, parse_date};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("pactally=info".parse()?))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    debug!("Using score table {}", config.data_file.display());

    let mut manager = StatManager::open(config)
        .context("Failed to open score table")?;
    if let Some(today) = &args.today {
        let today = parse_date(today).context("Invalid --today")?;
        info!("Treating {} as today", today);
        manager = manager.with_clock(FixedClock(today));
    }

    match args.command {
        Command::Import { file } => commands::import::run(&mut manager, &file),
        Command::Add { score, level, date } => {
            commands::add::run(&mut manager, score, level, date.as_deref())
        }
        Command::Delete { score, level, date } => {
            commands::delete::run(&mut manager, score, level, &date)
        }
        Command::List {
            sort,
            filter,
            range,
            count,
            percent,
        } => commands::list::run(&mut manager, sort, filter, range, count, percent),
        Command::Stats { json } => commands::stats::run(&mut manager, json),
        Command::Day { date } => commands::day::run(&mut manager, &date),
        Command::Streak => commands::streak::run(&mut manager),
        Command::Levels { max } => commands::levels::run(max),
        Command::Export { format, output } => {
            commands::export::run(&mut manager, format, output.as_deref())
        }
    }
}

fn load_config(args: &Args) -> Result<TrackerConfig> {
    let path = args
        .config
        .clone()
        .unwrap_or_else(paths::default_config_path);

    let mut config = match TrackerConfig::load(&path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) if e.is_not_found() && args.config.is_none() => TrackerConfig::builder()
            .data_file(paths::default_data_file())
            .build(),
        Err(e) => return Err(e).with_context(|| format!("Failed to load {}", path.display())),
    };

    if let Some(data) = &args.data {
        config.data_file = data.clone();
    }
    Ok(config)
}
