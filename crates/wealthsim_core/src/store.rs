//! Reference data for projections
//!
//! A `ParameterStore` is built once (from the built-in tables or a loaded
//! override) and then passed by reference to the classifier and the engine.
//! Nothing in the crate keeps it in global state.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{
    AssetCategory, AssetReturnParams, CrisisModel, DistributionShape, FeeTable, InflationModel,
    ShockParams,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterStore {
    /// Historical return assumptions keyed by instrument name or category label
    pub returns: BTreeMap<String, AssetReturnParams>,
    pub fees: FeeTable,
    pub crisis: CrisisModel,
    pub inflation: InflationModel,
}

impl ParameterStore {
    /// Exact, case-sensitive lookup in the return table.
    #[must_use]
    pub fn returns_for(&self, key: &str) -> Option<&AssetReturnParams> {
        self.returns.get(key)
    }

    /// Same store with crisis and correction regimes switched off.
    #[must_use]
    pub fn without_market_shocks(mut self) -> Self {
        self.crisis.crisis_probability = 0.0;
        self.crisis.correction_probability = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, params) in &self.returns {
            check_finite(name, params.mean_annual_return_pct)?;
            check_std_dev(name, params.std_dev_annual_return_pct)?;
            if params.distribution == DistributionShape::LogNormal
                && params.mean_annual_return_pct <= -100.0
            {
                return Err(ConfigError::InvalidLogNormalMean {
                    context: name.clone(),
                    value: params.mean_annual_return_pct,
                });
            }
        }

        for (category, fee) in &self.fees.by_category {
            check_fee(category.label(), *fee)?;
        }
        check_fee("default", self.fees.default_fee)?;

        let crisis = &self.crisis;
        check_probability("crisis_probability", crisis.crisis_probability)?;
        check_probability("correction_probability", crisis.correction_probability)?;
        let total = crisis.crisis_probability + crisis.correction_probability;
        if total > 1.0 {
            return Err(ConfigError::ProbabilitiesExceedOne { total });
        }
        for (regime, impacts) in [
            ("crisis", &crisis.crisis_impact),
            ("correction", &crisis.correction_impact),
        ] {
            for (category, shock) in impacts {
                let context = format!("{regime} shock on {category}");
                check_finite(&context, shock.mean)?;
                check_std_dev(&context, shock.std_dev)?;
            }
        }

        check_finite("inflation mean", self.inflation.mean_pct)?;
        check_std_dev("inflation", self.inflation.std_dev_pct)?;
        check_finite("inflation cap", self.inflation.max_pct)?;

        Ok(())
    }
}

fn check_finite(context: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            context: context.to_string(),
            value,
        })
    }
}

fn check_std_dev(context: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidStdDev {
            context: context.to_string(),
            value,
        })
    }
}

fn check_fee(context: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFee {
            context: context.to_string(),
            value,
        })
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        use AssetCategory::*;

        let returns = [
            // Cash and savings accounts
            ("Cash", AssetReturnParams::normal(2.0, 0.5)),
            ("Savings", AssetReturnParams::normal(2.5, 0.5)),
            ("Livret A", AssetReturnParams::normal(3.0, 0.3)),
            // Equities
            ("Equity", AssetReturnParams::normal(7.0, 18.0)),
            ("Stocks", AssetReturnParams::normal(7.0, 18.0)),
            ("CAC 40", AssetReturnParams::normal(6.5, 20.0)),
            ("ETF", AssetReturnParams::normal(7.0, 15.0)),
            ("S&P 500", AssetReturnParams::log_normal(10.0, 18.0)),
            ("MSCI World", AssetReturnParams::log_normal(8.0, 16.0)),
            // Real estate
            ("Real Estate", AssetReturnParams::normal(5.0, 10.0)),
            ("SCPI", AssetReturnParams::normal(4.5, 6.0)),
            ("REIT", AssetReturnParams::normal(7.0, 19.0)),
            // Fixed income
            ("Bonds", AssetReturnParams::normal(3.0, 5.0)),
            // Crypto-assets
            ("Crypto", AssetReturnParams::log_normal(20.0, 60.0)),
            ("Bitcoin", AssetReturnParams::log_normal(25.0, 70.0)),
            ("Ethereum", AssetReturnParams::log_normal(25.0, 80.0)),
            // Commodities
            ("Gold", AssetReturnParams::normal(6.0, 15.0)),
        ]
        .into_iter()
        .map(|(key, params)| (key.to_string(), params))
        .collect();

        let fees = FeeTable {
            by_category: FxHashMap::from_iter([
                (Cash, 0.0),
                (Equity, 0.0),
                (Etf, 0.002),
                (RealEstate, 0.01),
                (Bonds, 0.005),
                (Crypto, 0.01),
                (Gold, 0.004),
            ]),
            default_fee: 0.005,
        };

        let crisis = CrisisModel {
            crisis_probability: 0.05,
            correction_probability: 0.15,
            crisis_impact: FxHashMap::from_iter([
                (Equity, ShockParams::new(-0.30, 0.10)),
                (Etf, ShockParams::new(-0.25, 0.08)),
                (Crypto, ShockParams::new(-0.50, 0.15)),
                (RealEstate, ShockParams::new(-0.10, 0.05)),
                (Bonds, ShockParams::new(0.02, 0.03)),
                (Gold, ShockParams::new(0.05, 0.08)),
                (Other, ShockParams::new(-0.15, 0.08)),
            ]),
            correction_impact: FxHashMap::from_iter([
                (Equity, ShockParams::new(-0.10, 0.05)),
                (Etf, ShockParams::new(-0.08, 0.04)),
                (Crypto, ShockParams::new(-0.25, 0.10)),
                (RealEstate, ShockParams::new(-0.03, 0.02)),
                (Bonds, ShockParams::new(0.0, 0.01)),
                (Gold, ShockParams::new(0.02, 0.04)),
                (Other, ShockParams::new(-0.05, 0.04)),
            ]),
        };

        let inflation = InflationModel {
            mean_pct: 2.0,
            std_dev_pct: 1.0,
            max_pct: 10.0,
        };

        Self {
            returns,
            fees,
            crisis,
            inflation,
        }
    }
}
