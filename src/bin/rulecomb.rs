use clap::{Parser, ValueEnum};
use rulecomb::{Error, GrammarReader, InternalResult, ReaderConfig};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON syntax tree
    Json,
    /// Canonical rule syntax, one rule per line
    Text,
}

#[derive(Parser)]
#[command(author, version, about = "Reads a grammar file and prints its rules", long_about = None)]
struct Cli {
    /// Path to the grammar file
    grammar: PathBuf,

    /// Path to a JSON reader config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> InternalResult<()> {
    let config = match &cli.config {
        Some(path) => ReaderConfig::from_file(path)?,
        None => ReaderConfig::default(),
    };
    debug!("config: {:?}", config);

    let grammar = GrammarReader::new(config).read_file(&cli.grammar)?;
    grammar.check_patterns()?;
    info!(rules = grammar.len(), "grammar loaded from {:?}", cli.grammar);

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&grammar)
                .map_err(|e| Error::internal(format!("Failed to serialize grammar: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", grammar),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
