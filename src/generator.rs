//! Synthetic `station;temperature` input.

use std::io::{self, BufWriter, Write};
use tracing::info;

pub const STATIONS: &[&str] = &[
    "Abha", "Abidjan", "Abéché", "Accra", "Addis Ababa", "Adelaide", "Amsterdam", "Ankara",
    "Athens", "Auckland", "Bangkok", "Barcelona", "Beijing", "Belgrade", "Berlin", "Bogotá",
    "Boston", "Brisbane", "Brussels", "Bucharest", "Budapest", "Buenos Aires", "Cairo",
    "Cape Town", "Casablanca", "Chicago", "Copenhagen", "Dallas", "Delhi", "Dubai", "Dublin",
    "Frankfurt", "Geneva", "Helsinki", "Hong Kong", "Istanbul", "Jakarta", "Johannesburg",
    "Kiev", "Kuala Lumpur", "Lagos", "Lima", "Lisbon", "London", "Los Angeles", "Madrid",
    "Manila", "Mexico City", "Milan", "Moscow", "Mumbai", "Munich", "Nairobi", "New York",
    "Oslo", "Paris", "Prague", "Rio de Janeiro", "Rome", "San Francisco", "Santiago", "Seoul",
    "Singapore", "Stockholm", "Sydney", "Taipei", "Tokyo", "Toronto", "Vienna", "Warsaw",
    "Zurich",
];

/// Measurements are uniform in `[MIN_TEMPERATURE, MIN_TEMPERATURE + TEMPERATURE_RANGE)`.
pub const MIN_TEMPERATURE: f64 = -20.0;
pub const TEMPERATURE_RANGE: f64 = 70.0;

pub const DEFAULT_ROWS: u64 = 1_000_000;
const PROGRESS_INTERVAL: u64 = 10_000_000;
const WRITE_BUFFER_SIZE: usize = 0x100000 /* 1 MiB */;

/// Writes `rows` newline-terminated records to `out`. The same seed always
/// produces the same bytes.
pub fn generate(out: impl Write, rows: u64, seed: u64) -> io::Result<()> {
    let mut out = BufWriter::with_capacity(WRITE_BUFFER_SIZE, out);
    let mut rng = Xoshiro256::new(seed);

    for row in 0..rows {
        let station = STATIONS[rng.below(STATIONS.len())];
        let temperature = MIN_TEMPERATURE + rng.next_f64() * TEMPERATURE_RANGE;
        writeln!(out, "{station};{temperature:.1}")?;

        if row > 0 && row % PROGRESS_INTERVAL == 0 {
            info!(rows = row, "generated rows");
        }
    }
    out.flush()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct Xoshiro256 {
    state: [u64; 4],
}

impl Xoshiro256 {
    fn new(seed: u64) -> Self {
        // splitmix64 to spread the seed over the state
        let mut x = seed;
        let mut state = [0u64; 4];
        for slot in &mut state {
            x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            *slot = z ^ (z >> 31);
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let result = self.state[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        ((u128::from(self.next_u64()) * n as u128) >> 64) as usize
    }
}
