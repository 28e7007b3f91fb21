use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Return-distribution category a holding is simulated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetCategory {
    Cash,
    Equity,
    #[serde(rename = "ETF")]
    Etf,
    RealEstate,
    Bonds,
    Crypto,
    Gold,
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 8] = [
        AssetCategory::Cash,
        AssetCategory::Equity,
        AssetCategory::Etf,
        AssetCategory::RealEstate,
        AssetCategory::Bonds,
        AssetCategory::Crypto,
        AssetCategory::Gold,
        AssetCategory::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Equity => "Equity",
            Self::Etf => "ETF",
            Self::RealEstate => "Real Estate",
            Self::Bonds => "Bonds",
            Self::Crypto => "Crypto",
            Self::Gold => "Gold",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetCategory {
    type Err = ();

    /// Matches the display label or the variant name, ignoring case and
    /// separators (`"real estate"`, `"RealEstate"`, `"real_estate"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        AssetCategory::ALL
            .into_iter()
            .find(|category| {
                let label: String = category
                    .label()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .collect();
                label == normalized
            })
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistributionShape {
    #[default]
    Normal,
    LogNormal,
}

/// Historical annual return assumptions for one instrument or category.
///
/// Both moments are expressed in percent (`7.0` means 7 % per year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetReturnParams {
    pub mean_annual_return_pct: f64,
    pub std_dev_annual_return_pct: f64,
    #[serde(default)]
    pub distribution: DistributionShape,
}

impl AssetReturnParams {
    /// Fallback used for instruments the store knows nothing about.
    pub const DEFAULT: AssetReturnParams = AssetReturnParams::normal(5.5, 15.0);

    #[must_use]
    pub const fn normal(mean_pct: f64, std_dev_pct: f64) -> Self {
        Self {
            mean_annual_return_pct: mean_pct,
            std_dev_annual_return_pct: std_dev_pct,
            distribution: DistributionShape::Normal,
        }
    }

    #[must_use]
    pub const fn log_normal(mean_pct: f64, std_dev_pct: f64) -> Self {
        Self {
            mean_annual_return_pct: mean_pct,
            std_dev_annual_return_pct: std_dev_pct,
            distribution: DistributionShape::LogNormal,
        }
    }

    #[must_use]
    pub fn mean_fraction(&self) -> f64 {
        self.mean_annual_return_pct / 100.0
    }

    #[must_use]
    pub fn std_dev_fraction(&self) -> f64 {
        self.std_dev_annual_return_pct / 100.0
    }
}

impl Default for AssetReturnParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
