//! Statistical combiners: `AverageF64`, `Summarize`

use super::CombineFn;
use crate::stats::SummaryStatistics;

/* ===================== AverageF64 ===================== */

/// Average of values as `f64`.
///
/// Values must be convertible into `f64` via `Into<f64>`.
///
/// - Accumulator: `(sum_f64, count_u64)`
/// - Output: `f64`
///
/// Empty sequences produce `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> CombineFn<V, (f64, u64), f64> for AverageF64
where
    V: Into<f64>,
{
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.into();
        acc.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> f64 {
        if acc.1 == 0 {
            0.0
        } else {
            acc.0 / (acc.1 as f64)
        }
    }
}

/* ===================== Summarize ===================== */

/// Count, sum, average, min and max in one pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct Summarize;

impl<V> CombineFn<V, SummaryStatistics, SummaryStatistics> for Summarize
where
    V: Into<f64>,
{
    fn create(&self) -> SummaryStatistics {
        SummaryStatistics::default()
    }

    fn add_input(&self, acc: &mut SummaryStatistics, v: V) {
        acc.accept(v.into());
    }

    fn finish(&self, acc: SummaryStatistics) -> SummaryStatistics {
        acc
    }
}
