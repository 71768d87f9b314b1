#![deny(
    clippy::all,
    clippy::nursery,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::missing_const_for_fn
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Computes min/mean/max per station over `station;temperature` records held
//! completely in memory, and renders them as
//! `{Abha=-23.0/18.0/59.2, Abidjan=-16.2/26.0/67.3, ...}`.
//!
//! The input buffer is split into line-aligned shards ([`ChunkIter`]), every
//! shard is scanned on its own thread into a private [`AggregationTable`],
//! and the tables are merged in shard order afterwards.

pub mod chunk_iter;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod lines;
pub mod loader;
pub mod logging;
pub mod number;
pub mod record;
pub mod registry;
pub mod scan;
pub mod station_stats;
pub mod table;

pub use chunk_iter::ChunkIter;
pub use config::Config;
pub use error::{ProcessingError, RecordError, Result};
pub use loader::{Input, LoadMode};
pub use number::NumberMode;
pub use scan::{scan_shard, ScanReport, Summary};
pub use station_stats::StationStats;
pub use table::AggregationTable;

use std::path::Path;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Aggregates `input` according to `config`.
pub fn process(input: &[u8], config: &Config) -> Result<Summary> {
    config.validate()?;

    let begin = Instant::now();
    let summary = if config.workers == 1 {
        process_single_threaded(input, config)?
    } else {
        process_multi_threaded(input, config)?
    };

    info!(
        bytes = input.len(),
        stations = summary.table.len(),
        records = summary.report.records,
        "scanned in {:?}",
        begin.elapsed()
    );
    if summary.report.dropped() > 0 {
        warn!(
            missing_delimiter = summary.report.missing_delimiter,
            malformed_number = summary.report.malformed_number,
            "dropped records"
        );
    }
    Ok(summary)
}

/// Loads `path` completely, then aggregates it. Load failures are reported
/// before any scanning happens.
pub fn process_file(path: impl AsRef<Path>, config: &Config) -> Result<Summary> {
    let path = path.as_ref();
    config.validate()?;

    let begin = Instant::now();
    let input = loader::load(path, config.load_mode)?;
    info!(
        path = %path.display(),
        bytes = input.len(),
        "loaded in {:?}",
        begin.elapsed()
    );

    process(&input, config)
}

/// One pass over the whole buffer on the calling thread.
pub fn process_single_threaded(input: &[u8], config: &Config) -> Result<Summary> {
    scan_shard(input, 0..input.len(), config)
}

/// Scans `config.workers` line-aligned shards in parallel and merges the
/// per-shard results in shard order.
pub fn process_multi_threaded(input: &[u8], config: &Config) -> Result<Summary> {
    let shards = ChunkIter::new(input, config.workers).collect::<Vec<_>>();
    debug!(shards = shards.len(), "spawning workers");

    let results = thread::scope(|scope| {
        let handles = shards
            .into_iter()
            .map(|range| scope.spawn(move || scan_shard(input, range, config)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or(Err(ProcessingError::WorkerPanicked))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    Ok(results
        .into_iter()
        .reduce(Summary::merged)
        .unwrap_or_default())
}
