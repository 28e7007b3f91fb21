//! One-call projection: classify, simulate, reduce.

use serde::Serialize;

use crate::classify::Classifier;
use crate::error::Result;
use crate::model::{Holding, PercentileSeries, PortfolioSnapshot, SimulationResult, SummaryStats};
use crate::simulation::{SimulationOptions, simulate};
use crate::statistics::{loss_probability, summarize};
use crate::store::ParameterStore;

/// Everything the charting and reporting collaborators consume.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub snapshot: PortfolioSnapshot,
    pub options: SimulationOptions,
    pub nominal: PercentileSeries,
    pub real: PercentileSeries,
    /// Horizon statistics on real values when inflation is included,
    /// nominal values otherwise
    pub summary: SummaryStats,
    pub loss_probability: f64,
    #[serde(skip)]
    pub result: SimulationResult,
}

impl Projection {
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.result.initial_value
    }

    /// Bands matching the basis `summary` was computed on.
    #[must_use]
    pub fn reported(&self) -> &PercentileSeries {
        if self.options.include_inflation {
            &self.real
        } else {
            &self.nominal
        }
    }
}

/// Classify raw holdings and project them.
pub fn project(
    holdings: &[Holding],
    total_debt: f64,
    store: &ParameterStore,
    options: &SimulationOptions,
) -> Result<Projection> {
    let snapshot = Classifier::new(store).snapshot(holdings, total_debt);
    project_snapshot(snapshot, store, options)
}

pub fn project_snapshot(
    snapshot: PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
) -> Result<Projection> {
    let result = simulate(&snapshot, store, options)?;
    let nominal = result.nominal_series();
    let real = result.real_series();
    let reported = if result.include_inflation { &real } else { &nominal };
    let summary = summarize(reported, result.initial_value, result.years);
    let loss_probability = loss_probability(&result);

    tracing::debug!(
        initial_value = result.initial_value,
        median_final = summary.p50.final_value,
        loss_probability,
        "Projection summarized"
    );

    Ok(Projection {
        snapshot,
        options: *options,
        nominal,
        real,
        summary,
        loss_probability,
        result,
    })
}
