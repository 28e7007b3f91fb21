//! Reductions over simulated trajectories
//!
//! Percentiles are taken per year column across all trajectories: the P10
//! series at year 5 is the 10th percentile of every trajectory's year-5
//! value, not the path of any single trajectory.

use crate::model::{
    HorizonStats, PercentileKey, PercentileSeries, SimulationResult, SummaryStats,
};

/// Sentinel annualized return when the compound rate is undefined.
pub const WIPEOUT_ANNUALIZED_RETURN: f64 = -100.0;

/// Percentile `p` (in `[0, 100]`) of an ascending slice, linearly
/// interpolated between neighbouring order statistics.
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let rank = (p.clamp(0.0, 100.0) / 100.0) * (n as f64 - 1.0);
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            if lower == upper {
                sorted[lower]
            } else {
                let weight = rank - lower as f64;
                let (low, high) = (sorted[lower], sorted[upper]);
                (low + (high - low) * weight).min(high)
            }
        }
    }
}

#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-year percentile bands and mean of a `[simulation][year]` matrix.
///
/// The matrix is expected to be rectangular; for ragged input the series
/// stops at the shortest row.
#[must_use]
pub fn percentile_series(matrix: &[Vec<f64>]) -> PercentileSeries {
    let num_years = matrix.iter().map(Vec::len).min().unwrap_or(0);
    let mut series = PercentileSeries::default();
    for key in PercentileKey::ALL {
        series.get_mut(key).reserve_exact(num_years);
    }

    for year in 0..num_years {
        let mut column = SimulationResult::column(matrix, year);
        column.sort_by(f64::total_cmp);
        for key in PercentileKey::ALL {
            let value = match key.rank() {
                Some(rank) => percentile(&column, rank),
                None => mean(&column),
            };
            series.get_mut(key).push(value);
        }
    }

    series
}

impl SimulationResult {
    #[must_use]
    pub fn nominal_series(&self) -> PercentileSeries {
        percentile_series(&self.nominal)
    }

    #[must_use]
    pub fn real_series(&self) -> PercentileSeries {
        percentile_series(&self.real)
    }

    #[must_use]
    pub fn reported_series(&self) -> PercentileSeries {
        percentile_series(self.reported())
    }
}

/// Horizon statistics for one final value.
#[must_use]
pub fn horizon_stats(final_value: f64, initial_value: f64, years: u32) -> HorizonStats {
    let gain = final_value - initial_value;
    let gain_pct = if initial_value > 0.0 {
        (final_value / initial_value - 1.0) * 100.0
    } else {
        0.0
    };
    let annualized_return = if initial_value <= 0.0 || final_value <= 0.0 || years == 0 {
        WIPEOUT_ANNUALIZED_RETURN
    } else {
        ((final_value / initial_value).powf(1.0 / f64::from(years)) - 1.0) * 100.0
    };

    HorizonStats {
        final_value,
        gain,
        gain_pct,
        annualized_return,
    }
}

/// Summarize the last year of `series` against the starting net worth.
#[must_use]
pub fn summarize(series: &PercentileSeries, initial_value: f64, years: u32) -> SummaryStats {
    let stats = |key: PercentileKey| {
        let final_value = series.get(key).last().copied().unwrap_or(initial_value);
        horizon_stats(final_value, initial_value, years)
    };

    SummaryStats {
        p10: stats(PercentileKey::P10),
        p25: stats(PercentileKey::P25),
        p50: stats(PercentileKey::P50),
        p75: stats(PercentileKey::P75),
        p90: stats(PercentileKey::P90),
        mean: stats(PercentileKey::Mean),
    }
}

/// Share of trajectories ending below their starting net worth, measured on
/// the reported (real when inflation is on) matrix.
#[must_use]
pub fn loss_probability(result: &SimulationResult) -> f64 {
    let matrix = result.reported();
    if matrix.is_empty() {
        return 0.0;
    }
    let losses = matrix
        .iter()
        .filter_map(|row| row.last())
        .filter(|&&final_value| final_value < result.initial_value)
        .count();
    losses as f64 / matrix.len() as f64
}
