//! Makani - Main entrypoint.
//!
//! This is the main entry point for the Makani flight delay analytics
//! tool. It initializes the logging system, loads configuration, ingests
//! the delay dataset, and dispatches to the query surface.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use makani_lib::analytics::{top_n, yearly_trend};
use makani_lib::config::{self, LogConfig, MakaniConfig};
use makani_lib::data_structures::{build_index, AirportIndex, IndexError, IndexKind};
use makani_lib::error::{
    report_error, set_error_reporter, ErrorContext, MakaniError, MakaniResult,
    TracingErrorReporter,
};
use makani_lib::ingest;
use makani_lib::model::{normalize_month, DelayRecord};
use makani_lib::report;

/// Command line arguments for Makani.
#[derive(Parser, Debug)]
#[clap(name = "Makani", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the delay dataset, overriding the configured path
    #[clap(short, long, value_parser)]
    data: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive delay-breakdown queries
    Query,

    /// Ranked list of the worst airports by delay rate
    Top {
        /// How many airports to list
        #[clap(short = 'n', long)]
        count: Option<usize>,

        /// Emit the list as JSON instead of a table
        #[clap(long)]
        json: bool,

        /// Index backend to build
        #[clap(long, value_enum)]
        index: Option<IndexKind>,
    },

    /// By-year average delay rate for one airport
    Trend {
        /// 3-letter airport code
        code: String,

        /// Index backend to build
        #[clap(long, value_enum)]
        index: Option<IndexKind>,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> MakaniResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| MakaniError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> MakaniResult<()> {
    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // gen-config needs no configuration or dataset of its own
    if let Some(Command::GenConfig { output }) = args.command.as_ref() {
        init_logging(&LogConfig::default())?;
        info!("Generating default configuration");
        return write_default_config(output);
    }

    // Load and validate configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };
    init_logging(&config.log)?;

    // Initialize global configuration
    config::init_global_config(config);
    let global = config::get_global_config();
    let config = global.get();

    // Full ingestion pass before any query; a malformed row aborts here
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.dataset.path.clone());
    let records = match ingest::load_records(&data_path, config.dataset.delimiter_byte()) {
        Ok(records) => records,
        Err(e) => {
            report_error(
                ErrorContext::new(e.into(), "ingest")
                    .with_details(format!("dataset: {}", data_path.display())),
            );
            process::exit(1);
        }
    };

    match args.command.unwrap_or(Command::Query) {
        Command::Query => run_interactive(records, config.query.index),
        Command::Top { count, json, index } => run_top(
            records,
            index.unwrap_or(config.query.index),
            count.unwrap_or(config.query.top_n),
            json,
        ),
        Command::Trend { code, index } => {
            run_trend(records, index.unwrap_or(config.query.index), &code)
        }
        // Handled before configuration loading.
        Command::GenConfig { .. } => Ok(()),
    }
}

/// Prints a prompt and reads one trimmed input line.
///
/// Returns `None` on end of input.
fn prompt_line(text: &str) -> MakaniResult<Option<String>> {
    print!("{text}");
    io::stdout().flush().map_err(MakaniError::Io)?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line).map_err(MakaniError::Io)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for the index backend until a valid choice (or end of input).
fn prompt_index_kind(default: IndexKind) -> MakaniResult<Option<IndexKind>> {
    loop {
        let prompt = format!("Index backend: 1) trie 2) hash [{default}]: ");
        let Some(choice) = prompt_line(&prompt)? else {
            return Ok(None);
        };
        if choice.is_empty() {
            return Ok(Some(default));
        }
        match IndexKind::from_choice(&choice) {
            Ok(kind) => return Ok(Some(kind)),
            Err(e) => {
                warn!(input = %choice, "rejected index choice");
                println!("{e}");
            }
        }
    }
}

/// Interactive query session: one index, sequential breakdown queries.
fn run_interactive(records: Vec<DelayRecord>, default_kind: IndexKind) -> MakaniResult<()> {
    let Some(kind) = prompt_index_kind(default_kind)? else {
        return Ok(());
    };
    let index = build_index(kind, records)?;
    info!(backend = %kind, "interactive session ready");

    loop {
        let Some(code) = prompt_line("Airport code (blank to quit): ")? else {
            break;
        };
        if code.is_empty() {
            break;
        }
        let code = code.to_uppercase();

        let Some(raw_month) = prompt_line("Month: ")? else {
            break;
        };
        let month = match normalize_month(&raw_month) {
            Ok(month) => month,
            Err(e) => {
                warn!(input = %raw_month, "rejected month");
                println!("{e}");
                continue;
            }
        };

        match index.lookup(&code) {
            Ok(rows) => print!("{}", report::breakdown(&code, &rows[0].name, rows, month)),
            Err(IndexError::NotFound(_)) => println!("No data for airport code {code}"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Ranked list of the worst airports, as a table or JSON.
fn run_top(records: Vec<DelayRecord>, kind: IndexKind, count: usize, json: bool) -> MakaniResult<()> {
    let index = build_index(kind, records)?;
    let airports = index.traverse_all();
    let ranked = top_n(&airports, count);

    if json {
        println!("{}", report::rankings_json(&ranked)?);
    } else {
        print!("{}", report::top_table(&ranked));
    }
    Ok(())
}

/// By-year trend table for one airport.
fn run_trend(records: Vec<DelayRecord>, kind: IndexKind, code: &str) -> MakaniResult<()> {
    let index = build_index(kind, records)?;
    let code = code.trim().to_uppercase();

    match index.lookup(&code) {
        Ok(rows) => {
            let trend = yearly_trend(rows);
            print!("{}", report::trend_table(&code, &trend));
        }
        Err(IndexError::NotFound(_)) => println!("No data for airport code {code}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Writes the default configuration to a TOML file.
fn write_default_config(output: &Path) -> MakaniResult<()> {
    let default_config = MakaniConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(MakaniError::Io)?;
    }

    // Serialize to TOML
    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| MakaniError::Custom(format!("Failed to serialize config: {e}")))?;

    // Write to file
    std::fs::write(output, toml).map_err(MakaniError::Io)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
