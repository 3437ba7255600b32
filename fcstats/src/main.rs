use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use analysis::RecordSet;
use fcstats::storage::FightStorage;

#[derive(Parser)]
#[command(name = "fcstats")]
#[command(about = "Parse fight history and build skill statistics", long_about = None)]
struct Cli {
    /// SQLite database, falls back to DATABASE_URL and then fcstats.db
    #[arg(long, global = true)]
    database: Option<String>,

    /// Show debug output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a history file and list what was dropped
    Parse {
        #[arg(long)]
        input: PathBuf,

        /// Reference time for relative dates, "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_now)]
        now: Option<NaiveDateTime>,
    },

    /// Parse a history file and replace the player's stored fights
    Import {
        #[arg(long)]
        player: String,

        #[arg(long)]
        input: PathBuf,

        /// Reference time for relative dates, "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_now)]
        now: Option<NaiveDateTime>,
    },

    /// Build the JSON report from the player's stored fights
    Report {
        #[arg(long)]
        player: String,

        /// Defaults to Fights_<player>.json
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("fcstats") || meta.target().contains("analysis")
        }))
        .with(level);
    tracing::subscriber::set_global_default(registry)?;

    match cli.command {
        Commands::Parse { input, now } => {
            let set = read_history(&input, now)?;

            print!("{}", fcstats::report::parse_listing(&set));
            require_usable(&input, &set)?;
        }
        Commands::Import { player, input, now } => {
            let set = read_history(&input, now)?;
            require_usable(&input, &set)?;

            let mut storage = fcstats::db_connection(cli.database.as_deref())?;
            storage
                .store(&player, &set)
                .with_context(|| format!("storing fights of {}", player))?;

            println!(
                "Imported {} fights for {} ({} dropped lines)",
                set.len(),
                player,
                set.dropped_count()
            );
        }
        Commands::Report { player, output } => {
            let mut storage = fcstats::db_connection(cli.database.as_deref())?;
            let set = storage
                .load(&player)
                .with_context(|| format!("loading fights of {}", player))?;
            if set.is_empty() {
                anyhow::bail!("no usable data stored for {}", player);
            }

            let report = fcstats::report::build(&player, &set);
            let output =
                output.unwrap_or_else(|| PathBuf::from(fcstats::report::output_file_name(&player)));

            let content = serde_json::to_string_pretty(&report)?;
            std::fs::write(&output, content)
                .with_context(|| format!("writing {}", output.display()))?;

            tracing::info!("Wrote report to {}", output.display());
        }
    };

    Ok(())
}

fn read_history(input: &Path, now: Option<NaiveDateTime>) -> anyhow::Result<RecordSet> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let now = now.unwrap_or_else(|| chrono::Local::now().naive_local());
    Ok(analysis::recordset::parse(&text, now))
}

fn require_usable(input: &Path, set: &RecordSet) -> anyhow::Result<()> {
    if set.is_empty() {
        anyhow::bail!(
            "no usable data in {} ({} dropped lines)",
            input.display(),
            set.dropped_count()
        );
    }

    Ok(())
}
