use anyhow::Context;
use clap::{ArgAction, Parser};
use inmem_1brc::{logging, Config, LoadMode, NumberMode};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Prints `{Station=min/mean/max, ...}` for a `station;temperature` file.
#[derive(Parser, Debug)]
#[command(name = "inmem-1brc", version, about)]
struct Cli {
    /// Measurements file, one `station;temperature` record per line
    #[arg(default_value = "./measurements.txt")]
    file: PathBuf,

    /// Worker threads; 1 scans on the main thread
    #[arg(short, long, default_value_t = num_cpus::get())]
    threads: usize,

    /// How temperatures are parsed
    #[arg(long, value_enum, default_value_t = NumberMode::Trusted)]
    numbers: NumberMode,

    /// Fail on the first malformed temperature (needs `--numbers validated`)
    #[arg(long)]
    strict: bool,

    /// How the file is brought into memory
    #[arg(long, value_enum, default_value_t = LoadMode::Read)]
    load: LoadMode,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_workers(self.threads)
            .with_number_mode(self.numbers)
            .with_strict(self.strict)
            .with_load_mode(self.load)
    }
}

fn main() -> anyhow::Result<()> {
    let begin = Instant::now();
    let cli = Cli::parse();
    logging::init(logging::level(cli.verbose, cli.quiet));

    let summary = inmem_1brc::process_file(&cli.file, &cli.config())
        .with_context(|| format!("failed to process {}", cli.file.display()))?;

    let mut stdout = io::stdout().lock();
    summary.write_to(&mut stdout)?;
    writeln!(stdout)?;
    stdout.flush()?;

    info!("took {:?}", begin.elapsed());
    Ok(())
}
