//! Holding classification
//!
//! Turns heterogeneous upstream holdings into uniform snapshot records. An
//! unknown instrument is never an error: it falls back to default return
//! assumptions and the Equity category.

use std::str::FromStr;

use crate::model::{AssetCategory, AssetReturnParams, Holding, PortfolioSnapshot, SnapshotAsset};
use crate::store::ParameterStore;

/// Keyword sets checked in order against the lowercased name and type label.
const CATEGORY_KEYWORDS: &[(AssetCategory, &[&str])] = &[
    (
        AssetCategory::Crypto,
        &["crypto", "bitcoin", "btc", "ethereum", "solana"],
    ),
    (AssetCategory::Equity, &["equity", "stock"]),
    (AssetCategory::Etf, &["etf", "tracker", "ucits"]),
    (
        AssetCategory::RealEstate,
        &["real estate", "real-estate", "immobilier", "scpi", "reit", "property"],
    ),
    (
        AssetCategory::Bonds,
        &["bond", "obligation", "treasury", "fonds euro"],
    ),
    (
        AssetCategory::Cash,
        &["cash", "savings", "livret", "deposit", "current account"],
    ),
    (AssetCategory::Gold, &["gold", "bullion"]),
];

/// Where the return assumptions of a classified holding came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsSource {
    ExactName,
    NameContains(String),
    TypeLabel,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: AssetCategory,
    pub params: AssetReturnParams,
    pub source: ParamsSource,
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    store: &'a ParameterStore,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(store: &'a ParameterStore) -> Self {
        Self { store }
    }

    /// Category and return assumptions for a holding.
    #[must_use]
    pub fn classify(&self, name: &str, type_label: Option<&str>) -> Classification {
        let (params, source) = self.resolve_params(name, type_label);
        let category = categorize(name, type_label);
        if source == ParamsSource::Default {
            tracing::debug!(
                holding = name,
                type_label = ?type_label,
                %category,
                "No return assumptions found, using defaults"
            );
        }
        Classification {
            category,
            params,
            source,
        }
    }

    fn resolve_params(
        &self,
        name: &str,
        type_label: Option<&str>,
    ) -> (AssetReturnParams, ParamsSource) {
        if let Some(params) = self.store.returns_for(name) {
            return (*params, ParamsSource::ExactName);
        }

        let lowered = name.to_lowercase();
        let contained = self
            .store
            .returns
            .iter()
            .filter(|(key, _)| !key.is_empty() && lowered.contains(&key.to_lowercase()))
            // Longest key is the most specific; BTreeMap order breaks ties
            .fold(None::<(&String, &AssetReturnParams)>, |best, (key, params)| {
                match best {
                    Some((best_key, _)) if best_key.len() >= key.len() => best,
                    _ => Some((key, params)),
                }
            });
        if let Some((key, params)) = contained {
            return (*params, ParamsSource::NameContains(key.clone()));
        }

        if let Some(params) = type_label.and_then(|label| self.store.returns_for(label)) {
            return (*params, ParamsSource::TypeLabel);
        }

        (AssetReturnParams::DEFAULT, ParamsSource::Default)
    }

    /// Normalize holdings into the record the engine consumes.
    #[must_use]
    pub fn snapshot(&self, holdings: &[Holding], total_debt: f64) -> PortfolioSnapshot {
        let assets = holdings
            .iter()
            .map(|holding| {
                let classification = self.classify(&holding.name, holding.type_label.as_deref());
                SnapshotAsset {
                    name: holding.name.clone(),
                    value: holding.value,
                    category: classification.category,
                    params: classification.params,
                }
            })
            .collect();
        PortfolioSnapshot::new(assets, total_debt)
    }
}

/// Category from keywords in the name and type label.
///
/// When no keyword matches, a type label that is itself a category name
/// (`"Other"`, `"Real Estate"`) is used; otherwise the holding is Equity.
#[must_use]
pub fn categorize(name: &str, type_label: Option<&str>) -> AssetCategory {
    let haystack = match type_label {
        Some(label) => format!("{name} {label}").to_lowercase(),
        None => name.to_lowercase(),
    };

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(category, _)| *category)
        .or_else(|| type_label.and_then(|label| AssetCategory::from_str(label).ok()))
        .unwrap_or(AssetCategory::Equity)
}
