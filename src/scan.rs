use crate::config::Config;
use crate::error::{ProcessingError, RecordError, Result};
use crate::format;
use crate::lines::LineScanner;
use crate::record::parse_record;
use crate::table::AggregationTable;
use std::io::{self, Write};
use std::ops::Range;
use tracing::{debug, trace};

/// Record counts of a scan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Records that updated the table.
    pub records: u64,
    pub missing_delimiter: u64,
    pub malformed_number: u64,
}

impl ScanReport {
    pub fn merge(&mut self, other: &Self) {
        self.records += other.records;
        self.missing_delimiter += other.missing_delimiter;
        self.malformed_number += other.malformed_number;
    }

    pub const fn dropped(&self) -> u64 {
        self.missing_delimiter + self.malformed_number
    }
}

/// Frozen result of a run, or of one shard of it.
#[derive(Debug, Default)]
pub struct Summary {
    pub table: AggregationTable,
    pub report: ScanReport,
}

impl Summary {
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.table.merge(&other.table);
        self.report.merge(&other.report);
        self
    }

    /// `{Name=min/mean/max, ...}` without trailing newline.
    pub fn render(&self) -> Vec<u8> {
        format::render(&self.table)
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        format::write_summary(&self.table, out)
    }
}

/// Scans `range` of `buf` into a fresh table.
///
/// Records without `;` are dropped. Malformed numbers (only detectable with
/// [`NumberMode::Validated`](crate::number::NumberMode::Validated)) are
/// dropped too, or abort the scan if `config.strict` is set.
pub fn scan_shard(buf: &[u8], range: Range<usize>, config: &Config) -> Result<Summary> {
    let mut table = AggregationTable::new();
    let mut report = ScanReport::default();

    for span in LineScanner::new(buf, range.clone()) {
        match parse_record(&buf[span.clone()], config.number_mode) {
            Ok((station, measurement)) => {
                table.record(station, measurement);
                report.records += 1;
            }
            Err(RecordError::MissingDelimiter) => {
                trace!(offset = span.start, "skipping record without delimiter");
                report.missing_delimiter += 1;
            }
            Err(RecordError::MalformedNumber) => {
                if config.strict {
                    return Err(ProcessingError::MalformedNumber {
                        offset: span.start,
                        record: String::from_utf8_lossy(&buf[span]).into_owned(),
                    });
                }
                debug!(offset = span.start, "skipping record with malformed number");
                report.malformed_number += 1;
            }
        }
    }

    debug!(
        start = range.start,
        end = range.end,
        stations = table.len(),
        records = report.records,
        "shard scanned"
    );
    Ok(Summary { table, report })
}
