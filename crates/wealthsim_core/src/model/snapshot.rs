//! Portfolio input records
//!
//! `Holding` is what the portfolio collaborator hands over; `PortfolioSnapshot`
//! is the normalized form the engine consumes, one uniform record per asset.

use serde::{Deserialize, Serialize};

use super::category::{AssetCategory, AssetReturnParams};

/// A raw position as known by the portfolio model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
}

impl Holding {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            type_label: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = Some(type_label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotAsset {
    pub name: String,
    pub value: f64,
    pub category: AssetCategory,
    pub params: AssetReturnParams,
}

/// Holdings frozen at projection time, plus the outstanding debt balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub assets: Vec<SnapshotAsset>,
    pub total_debt: f64,
}

impl PortfolioSnapshot {
    #[must_use]
    pub fn new(assets: Vec<SnapshotAsset>, total_debt: f64) -> Self {
        Self { assets, total_debt }
    }

    #[must_use]
    pub fn total_assets(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// Net worth at year 0: total asset value minus outstanding debt.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.total_assets() - self.total_debt
    }
}
