//! Summary statistics over a numeric projection of a stream.

use serde::{Deserialize, Serialize};

/// Count, sum, average, minimum and maximum of a series of `f64` values.
///
/// An empty series has `count == 0`, `sum == 0.0`, `average == 0.0`, and no
/// `min` or `max`. A NaN anywhere in the series makes every derived value NaN,
/// `min` and `max` included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: u64,
    pub sum: f64,
    pub average: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SummaryStatistics {
    /// Fold one value in.
    #[allow(clippy::cast_precision_loss)]
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.average = self.sum / self.count as f64;
        self.min = Some(self.min.map_or(value, |m| min_f64(m, value)));
        self.max = Some(self.max.map_or(value, |m| max_f64(m, value)));
    }

    /// Merge statistics gathered over another series.
    #[allow(clippy::cast_precision_loss)]
    pub fn combine(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        self.count += other.count;
        self.sum += other.sum;
        self.average = self.sum / self.count as f64;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(min_f64(a, b)),
            (a, b) => a.or(b),
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(max_f64(a, b)),
            (a, b) => a.or(b),
        };
    }
}

// `f64::min`/`f64::max` skip NaN operands; these propagate them instead.
fn min_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl FromIterator<f64> for SummaryStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::default();
        for v in iter {
            stats.accept(v);
        }
        stats
    }
}
