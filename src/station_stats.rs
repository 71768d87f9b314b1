use likely_stable::unlikely;

/// Running min/max/sum/count of one station.
///
/// `count == 0` means no measurement was seen yet; `min` and `max` then hold
/// `+inf`/`-inf`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StationStats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl Default for StationStats {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl StationStats {
    pub const fn new(min: f64, max: f64, sum: f64, count: u64) -> Self {
        Self {
            min,
            max,
            sum,
            count,
        }
    }

    #[allow(clippy::collapsible_else_if)]
    #[inline]
    pub fn update(&mut self, measurement: f64) -> &mut Self {
        if unlikely(self.is_empty()) {
            self.min = measurement;
            self.max = measurement;
        } else {
            if measurement < self.min {
                self.min = measurement
            } else if measurement > self.max {
                self.max = measurement
            }
        }

        self.sum += measurement;
        self.count += 1;
        self
    }

    /// Combines two aggregates. Commutative and associative, so shards can be
    /// merged in any order.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            count: self.count + other.count,
        }
    }

    /// `0.0` for a station without measurements.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Hasn't received a data point so far.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}
