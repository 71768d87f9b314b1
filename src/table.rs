use crate::registry::{StationId, StationRegistry};
use crate::station_stats::StationStats;
use likely_stable::unlikely;
use std::sync::Arc;

/// Roughly the number of distinct stations in a realistic input.
const EXPECTED_STATIONS: usize = 1024;

/// Station id to [`StationStats`], stored as an arena indexed by
/// [`StationId`]. Each table owns the registry its ids come from.
#[derive(Debug, Default)]
pub struct AggregationTable {
    registry: StationRegistry,
    stats: Vec<StationStats>,
}

impl AggregationTable {
    pub fn new() -> Self {
        Self::with_capacity(EXPECTED_STATIONS)
    }

    pub fn with_capacity(stations: usize) -> Self {
        Self {
            registry: StationRegistry::with_capacity(stations),
            stats: Vec::with_capacity(stations),
        }
    }

    #[inline]
    pub fn intern(&mut self, station: &[u8]) -> StationId {
        self.registry.intern(station)
    }

    /// Adds one measurement. The entry of `id` is created on first use.
    #[inline]
    pub fn update(&mut self, id: StationId, measurement: f64) {
        self.entry(id).update(measurement);
    }

    /// Interns `station` and adds `measurement` to it.
    #[inline]
    pub fn record(&mut self, station: &[u8], measurement: f64) {
        let id = self.intern(station);
        self.update(id, measurement);
    }

    #[inline]
    fn entry(&mut self, id: StationId) -> &mut StationStats {
        let index = id.index();
        if unlikely(index >= self.stats.len()) {
            self.stats.resize(index + 1, StationStats::default());
        }
        &mut self.stats[index]
    }

    /// Folds `other` into `self`. Stations are matched by name, so the two
    /// tables may come from different registries.
    pub fn merge(&mut self, other: &Self) {
        for (name, stats) in other.iter() {
            let id = self.registry.intern_shared(name);
            let entry = self.entry(id);
            *entry = entry.merge(*stats);
        }
    }

    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.merge(&other);
        self
    }

    /// `None` until `station` received its first measurement.
    pub fn get(&self, station: &[u8]) -> Option<&StationStats> {
        let id = self.registry.get(station)?;
        self.stats.get(id.index()).filter(|stats| !stats.is_empty())
    }

    /// Number of stations with at least one measurement.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.iter().all(StationStats::is_empty)
    }

    /// Entries in id order, i.e. order of first appearance. Stations that
    /// were interned but never updated are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<[u8]>, &StationStats)> {
        self.registry
            .names()
            .zip(&self.stats)
            .filter(|(_, stats)| !stats.is_empty())
    }
}
