//! Rendering of the final `{Name=min/mean/max, ...}` summary.
//!
//! Numbers are printed with `{:.1}`, which rounds the exact binary value to
//! one decimal and resolves exact ties to even (`0.25` -> `0.2`).

use crate::station_stats::StationStats;
use crate::table::AggregationTable;
use std::cmp::Ordering;
use std::io::{self, Write};
use std::sync::Arc;

/// Lower case of a byte read as an ISO-8859-1 character.
fn fold_case(byte: u8) -> u16 {
    match byte {
        // latin capitals, except the multiplication sign
        0xC0..=0xDE if byte != 0xD7 => u16::from(byte) + 0x20,
        // micro sign lowers to the greek small mu
        0xB5 => 0x03BC,
        _ => u16::from(byte.to_ascii_lowercase()),
    }
}

/// Case-insensitive order over bytes taken as ISO-8859-1 characters. Names
/// that only differ in case are ordered by their raw bytes, so the order is
/// total.
pub fn compare_station_names(a: &[u8], b: &[u8]) -> Ordering {
    let folded = a
        .iter()
        .map(|&byte| fold_case(byte))
        .cmp(b.iter().map(|&byte| fold_case(byte)));
    folded.then_with(|| a.cmp(b))
}

fn sorted_entries(table: &AggregationTable) -> Vec<(&Arc<[u8]>, &StationStats)> {
    // sort in a vec: quicker than in a btreemap
    let mut entries = table.iter().collect::<Vec<_>>();
    entries.sort_unstable_by(|(a, _), (b, _)| compare_station_names(a, b));
    entries
}

pub fn write_summary(table: &AggregationTable, out: &mut impl Write) -> io::Result<()> {
    let entries = sorted_entries(table);
    let n = entries.len();

    out.write_all(b"{")?;
    for (index, (station, stats)) in entries.into_iter().enumerate() {
        out.write_all(station)?;
        write!(
            out,
            "={:.1}/{:.1}/{:.1}",
            stats.min,
            stats.mean(),
            stats.max
        )?;
        if index != n - 1 {
            out.write_all(b", ")?;
        }
    }
    out.write_all(b"}")
}

/// Station names are written as raw bytes; no decoding takes place.
pub fn render(table: &AggregationTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(table.len() * 32 + 2);
    write_summary(table, &mut out).expect("writing to a Vec cannot fail");
    out
}
