// sqlinsertgen command-line front end: resolve the target from flags and saved
// settings, generate the INSERT, write it out, and remember what was used.

use clap::Parser;
use sqlinsertgen::config::{default_config_path, AppConfig};
use sqlinsertgen::source::SqliteSource;
use sqlinsertgen::{generate, logger, Error, GenerateRequest, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

// Command-line flags. Omitted values fall back to the last-used ones in the config.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Configuration file (defaults to config.json next to the executable).
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQLite database file to read the schema (and data) from.
    #[arg(long, short)]
    database: Option<String>,

    /// Target table of the INSERT statement.
    #[arg(long, short)]
    table: Option<String>,

    /// Predicate selecting rows to fill the statement with. Pass "" to clear the saved one.
    #[arg(long = "where", short)]
    where_clause: Option<String>,

    /// Output file. If omitted, prints to stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::set_debug(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let start = Instant::now();
    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config = AppConfig::load(&config_path)?;
    let saved = &config.generator;

    let database = args
        .database
        .or_else(|| saved.database.clone())
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingArgument("database"))?;
    let table = args
        .table
        .or_else(|| saved.table.clone())
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingArgument("table"))?;
    let where_clause = args.where_clause.or_else(|| saved.where_clause.clone());

    logger::debug(&format!("main: database {}", database));
    logger::debug(&format!("main: table {}", table));
    if let Some(w) = &where_clause {
        logger::debug(&format!("main: where {}", w));
    }

    let source = SqliteSource::open(&database)?;
    let request = GenerateRequest::new(table.clone(), where_clause.clone());
    let insert = generate(&source, &request, &config.generator.column_blacklist)?;

    // Output target.
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    writeln!(out, "{}", insert)?;
    out.flush()?;

    config.generator.database = Some(database);
    config.generator.table = Some(table);
    config.generator.where_clause = where_clause;
    config.last_insert_command = Some(insert);
    config.save(&config_path)?;

    if let Some(path) = &args.output {
        logger::info(&format!("Insert command written to {}", path.display()));
    }
    if logger::is_debug() {
        logger::debug(&format!("Timing: generation took {:?}", start.elapsed()));
    }
    Ok(())
}
