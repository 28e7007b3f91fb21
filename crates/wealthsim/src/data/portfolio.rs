use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use wealthsim_core::Holding;

/// A portfolio as exported by the tracking dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioFile {
    #[serde(default)]
    pub investments: Vec<Holding>,
    #[serde(default)]
    pub credits: Vec<CreditData>,
}

/// An outstanding loan. Only the balance feeds the projection; debt is
/// amortized linearly over the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditData {
    pub name: String,
    pub remaining_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,
}

impl PortfolioFile {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read portfolio {}", path.display()))?;
        let portfolio = Self::from_yaml(&content)
            .wrap_err_with(|| format!("Failed to parse portfolio {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            investments = portfolio.investments.len(),
            credits = portfolio.credits.len(),
            "Loaded portfolio"
        );
        Ok(portfolio)
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.investments
    }

    pub fn total_debt(&self) -> f64 {
        self.credits.iter().map(|c| c.remaining_balance).sum()
    }
}
