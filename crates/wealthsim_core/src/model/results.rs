//! Simulation outputs
//!
//! Every value here is created fresh by a single call and never mutated
//! afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::market::MarketRegime;

/// Raw Monte Carlo output: one row per trajectory, one column per year
/// (`0..=years`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Net worth in nominal currency units
    pub nominal: Vec<Vec<f64>>,
    /// Net worth deflated by each trajectory's cumulative inflation
    pub real: Vec<Vec<f64>>,
    pub initial_value: f64,
    pub years: u32,
    pub include_inflation: bool,
    pub include_fees: bool,
}

impl SimulationResult {
    #[must_use]
    pub fn num_simulations(&self) -> usize {
        self.nominal.len()
    }

    /// The matrix reports are built from: real values when inflation was
    /// simulated, nominal values otherwise.
    #[must_use]
    pub fn reported(&self) -> &[Vec<f64>] {
        if self.include_inflation {
            &self.real
        } else {
            &self.nominal
        }
    }

    /// Values of every trajectory at `year`. Rows too short to reach
    /// `year` are skipped.
    pub(crate) fn column(matrix: &[Vec<f64>], year: usize) -> Vec<f64> {
        matrix.iter().filter_map(|row| row.get(year).copied()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentileKey {
    P10,
    P25,
    P50,
    P75,
    P90,
    Mean,
}

impl PercentileKey {
    pub const ALL: [PercentileKey; 6] = [
        PercentileKey::P10,
        PercentileKey::P25,
        PercentileKey::P50,
        PercentileKey::P75,
        PercentileKey::P90,
        PercentileKey::Mean,
    ];

    /// Percentile rank in `[0, 100]`, `None` for the mean.
    #[must_use]
    pub fn rank(self) -> Option<f64> {
        match self {
            Self::P10 => Some(10.0),
            Self::P25 => Some(25.0),
            Self::P50 => Some(50.0),
            Self::P75 => Some(75.0),
            Self::P90 => Some(90.0),
            Self::Mean => None,
        }
    }
}

impl fmt::Display for PercentileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::P10 => "p10",
            Self::P25 => "p25",
            Self::P50 => "p50",
            Self::P75 => "p75",
            Self::P90 => "p90",
            Self::Mean => "mean",
        };
        f.write_str(label)
    }
}

/// Percentile bands indexed by year `0..=years`, ready for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentileSeries {
    pub p10: Vec<f64>,
    pub p25: Vec<f64>,
    pub p50: Vec<f64>,
    pub p75: Vec<f64>,
    pub p90: Vec<f64>,
    pub mean: Vec<f64>,
}

impl PercentileSeries {
    #[must_use]
    pub fn get(&self, key: PercentileKey) -> &[f64] {
        match key {
            PercentileKey::P10 => &self.p10,
            PercentileKey::P25 => &self.p25,
            PercentileKey::P50 => &self.p50,
            PercentileKey::P75 => &self.p75,
            PercentileKey::P90 => &self.p90,
            PercentileKey::Mean => &self.mean,
        }
    }

    pub(crate) fn get_mut(&mut self, key: PercentileKey) -> &mut Vec<f64> {
        match key {
            PercentileKey::P10 => &mut self.p10,
            PercentileKey::P25 => &mut self.p25,
            PercentileKey::P50 => &mut self.p50,
            PercentileKey::P75 => &mut self.p75,
            PercentileKey::P90 => &mut self.p90,
            PercentileKey::Mean => &mut self.mean,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.p50.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.p50.is_empty()
    }

    /// Value of every key at one year, in `PercentileKey::ALL` order.
    #[must_use]
    pub fn at_year(&self, year: usize) -> [(PercentileKey, f64); 6] {
        PercentileKey::ALL.map(|key| (key, self.get(key)[year]))
    }

    /// Values at the last year of the series.
    #[must_use]
    pub fn at_horizon(&self) -> [(PercentileKey, f64); 6] {
        self.at_year(self.len().saturating_sub(1))
    }
}

/// Outcome of one percentile at the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonStats {
    pub final_value: f64,
    pub gain: f64,
    /// Total gain in percent of the initial value
    pub gain_pct: f64,
    /// Compound yearly rate in percent; `-100.0` when it is undefined
    pub annualized_return: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub p10: HorizonStats,
    pub p25: HorizonStats,
    pub p50: HorizonStats,
    pub p75: HorizonStats,
    pub p90: HorizonStats,
    pub mean: HorizonStats,
}

impl SummaryStats {
    #[must_use]
    pub fn get(&self, key: PercentileKey) -> &HorizonStats {
        match key {
            PercentileKey::P10 => &self.p10,
            PercentileKey::P25 => &self.p25,
            PercentileKey::P50 => &self.p50,
            PercentileKey::P75 => &self.p75,
            PercentileKey::P90 => &self.p90,
            PercentileKey::Mean => &self.mean,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PercentileKey, &HorizonStats)> {
        PercentileKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

/// Year-by-year record of a single trajectory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryTrace {
    /// Regime of each simulated year (`years` entries, starting at year 1)
    pub regimes: Vec<MarketRegime>,
    /// Combined return applied to each asset, per year: `[year - 1][asset]`
    pub asset_returns: Vec<Vec<f64>>,
    /// Cumulative inflation factor at the end of each year
    pub inflation_factors: Vec<f64>,
    /// Outstanding debt at the end of each year
    pub remaining_debt: Vec<f64>,
    /// Nominal net worth, `years + 1` entries including year 0
    pub nominal: Vec<f64>,
    /// Real net worth, `years + 1` entries including year 0
    pub real: Vec<f64>,
}
