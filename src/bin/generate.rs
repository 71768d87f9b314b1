use anyhow::Context;
use clap::{ArgAction, Parser};
use inmem_1brc::generator::{self, DEFAULT_ROWS};
use inmem_1brc::logging;
use std::fs::File;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;

/// Writes random `station;temperature` records for testing.
#[derive(Parser, Debug)]
#[command(name = "generate", version, about)]
struct Cli {
    /// Output file
    output: PathBuf,

    /// Number of records
    #[arg(default_value_t = DEFAULT_ROWS)]
    rows: u64,

    /// PRNG seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let begin = Instant::now();
    let cli = Cli::parse();
    logging::init(logging::level(cli.verbose, cli.quiet));

    let seed = match cli.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default(),
    };
    info!(output = %cli.output.display(), rows = cli.rows, seed, "generating sample data");

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    generator::generate(file, cli.rows, seed)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!("done, took {:?}", begin.elapsed());
    Ok(())
}
