use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::category::{AssetCategory, AssetReturnParams, DistributionShape};
use crate::random::RandomSource;

/// Worst single-asset single-year return the engine will ever record.
pub const RETURN_FLOOR: f64 = -0.95;

/// Market state shared by every asset within one simulated year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketRegime {
    Normal,
    Correction,
    Crisis,
}

/// Additive return shock, as fractions (`-0.30` is a 30 point drop).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShockParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl ShockParams {
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub fn sample<S: RandomSource + ?Sized>(&self, source: &mut S) -> f64 {
        source.next_normal(self.mean, self.std_dev)
    }
}

/// Systemic drawdown model: yearly crisis/correction probabilities and the
/// per-category shocks applied while one is in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisModel {
    pub crisis_probability: f64,
    pub correction_probability: f64,
    #[serde(default)]
    pub crisis_impact: FxHashMap<AssetCategory, ShockParams>,
    #[serde(default)]
    pub correction_impact: FxHashMap<AssetCategory, ShockParams>,
}

impl CrisisModel {
    /// Map a uniform draw in `[0, 1)` to the regime for the year.
    #[must_use]
    pub fn regime_for(&self, uniform: f64) -> MarketRegime {
        if uniform < self.crisis_probability {
            MarketRegime::Crisis
        } else if uniform < self.crisis_probability + self.correction_probability {
            MarketRegime::Correction
        } else {
            MarketRegime::Normal
        }
    }

    #[must_use]
    pub fn shock(&self, regime: MarketRegime, category: AssetCategory) -> Option<ShockParams> {
        match regime {
            MarketRegime::Normal => None,
            MarketRegime::Correction => self.correction_impact.get(&category).copied(),
            MarketRegime::Crisis => self.crisis_impact.get(&category).copied(),
        }
    }

    /// A model in which no crisis or correction ever happens.
    #[must_use]
    pub fn calm() -> Self {
        Self {
            crisis_probability: 0.0,
            correction_probability: 0.0,
            crisis_impact: FxHashMap::default(),
            correction_impact: FxHashMap::default(),
        }
    }
}

/// Yearly inflation assumptions, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationModel {
    pub mean_pct: f64,
    pub std_dev_pct: f64,
    /// One-sided cap on a single year's draw.
    pub max_pct: f64,
}

impl InflationModel {
    /// Draw one year of inflation in percent, capped at `max_pct`.
    pub fn sample<S: RandomSource + ?Sized>(&self, source: &mut S) -> f64 {
        source
            .next_normal(self.mean_pct, self.std_dev_pct)
            .min(self.max_pct)
    }
}

/// Annual management fees per category, as fractions of the asset value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTable {
    #[serde(default)]
    pub by_category: FxHashMap<AssetCategory, f64>,
    pub default_fee: f64,
}

impl FeeTable {
    #[must_use]
    pub fn fee_for(&self, category: AssetCategory) -> f64 {
        self.by_category
            .get(&category)
            .copied()
            .unwrap_or(self.default_fee)
    }
}

impl AssetReturnParams {
    /// Draw one year of return as a fraction.
    ///
    /// Log-normal draws are parameterized so their arithmetic mean matches
    /// `mean_annual_return_pct`, keeping them comparable with normal assets.
    pub fn sample<S: RandomSource + ?Sized>(&self, source: &mut S) -> f64 {
        let mean = self.mean_fraction();
        let std_dev = self.std_dev_fraction();
        match self.distribution {
            DistributionShape::Normal => source.next_normal(mean, std_dev),
            DistributionShape::LogNormal => {
                let mu = (1.0 + mean).ln() - 0.5 * std_dev * std_dev;
                source.next_normal(mu, std_dev).exp() - 1.0
            }
        }
    }
}
