//! Monte Carlo wealth projection
//!
//! Each trajectory steps a portfolio snapshot forward one year at a time:
//! a market regime shared by every asset, an inflation draw, then one return
//! per asset (base draw, regime shock, fees, floor). Trajectories are
//! independent and each one consumes its own random stream, so a fixed seed
//! gives the same matrices whether they run serially or on the rayon pool.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::{
    MarketRegime, PortfolioSnapshot, RETURN_FLOOR, SimulationResult, SnapshotAsset,
    TrajectoryTrace,
};
use crate::random::{RandomSource, RngSource, trajectory_seed};
use crate::store::ParameterStore;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Call-time knobs for one projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    pub years: u32,
    pub num_simulations: usize,
    pub include_inflation: bool,
    pub include_fees: bool,
    /// Base seed; trajectory `i` draws from `trajectory_seed(seed, i)`
    pub seed: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            years: 10,
            num_simulations: 1_000,
            include_inflation: true,
            include_fees: true,
            seed: 42,
        }
    }
}

impl SimulationOptions {
    #[must_use]
    pub fn new(years: u32, num_simulations: usize) -> Self {
        Self {
            years,
            num_simulations,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn inflation(mut self, include: bool) -> Self {
        self.include_inflation = include;
        self
    }

    #[must_use]
    pub fn fees(mut self, include: bool) -> Self {
        self.include_fees = include;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Nominal and real net worth of one trajectory, year 0 included.
struct TrajectoryPath {
    nominal: Vec<f64>,
    real: Vec<f64>,
}

/// Run `num_simulations` seeded trajectories.
pub fn simulate(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
) -> Result<SimulationResult> {
    validate(snapshot, store, options)?;
    let initial_value = snapshot.initial_value();

    tracing::debug!(
        assets = snapshot.assets.len(),
        years = options.years,
        simulations = options.num_simulations,
        seed = options.seed,
        "Starting wealth projection"
    );

    let paths = run_seeded(snapshot, store, options, initial_value);
    let result = collect_result(paths, initial_value, options);

    tracing::debug!(
        simulations = result.num_simulations(),
        "Wealth projection complete"
    );
    Ok(result)
}

/// Run every trajectory serially from a single injected stream.
///
/// Trajectories consume `source` one after the other, so the same stream
/// always produces bit-identical matrices.
pub fn simulate_with_source<S: RandomSource + ?Sized>(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
    source: &mut S,
) -> Result<SimulationResult> {
    validate(snapshot, store, options)?;
    let initial_value = snapshot.initial_value();

    let paths = (0..options.num_simulations)
        .map(|_| run_trajectory(snapshot, store, options, initial_value, &mut *source, None))
        .collect();

    Ok(collect_result(paths, initial_value, options))
}

/// Run a single trajectory and record every intermediate quantity.
pub fn trace_trajectory<S: RandomSource + ?Sized>(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
    source: &mut S,
) -> Result<TrajectoryTrace> {
    validate(snapshot, store, options)?;
    let initial_value = snapshot.initial_value();

    let mut trace = TrajectoryTrace::default();
    let path = run_trajectory(
        snapshot,
        store,
        options,
        initial_value,
        source,
        Some(&mut trace),
    );
    trace.nominal = path.nominal;
    trace.real = path.real;
    Ok(trace)
}

/// Outstanding debt after `year` years of linear amortization over `years`.
#[must_use]
pub fn remaining_debt(total_debt: f64, years: u32, year: u32) -> f64 {
    if year >= years {
        return 0.0;
    }
    let yearly_repayment = total_debt / f64::from(years);
    (total_debt - yearly_repayment * f64::from(year)).max(0.0)
}

fn validate(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
) -> Result<()> {
    if options.years < 1 {
        return Err(SimulationError::invalid_argument(
            "years",
            "at least one year must be simulated",
        ));
    }
    if options.num_simulations < 1 {
        return Err(SimulationError::invalid_argument(
            "num_simulations",
            "at least one trajectory must be simulated",
        ));
    }
    if let Some(asset) = snapshot
        .assets
        .iter()
        .find(|a| !a.value.is_finite() || a.value < 0.0)
    {
        return Err(SimulationError::invalid_argument(
            "value",
            format!(
                "holding `{}` must be finite and non-negative, got {}",
                asset.name, asset.value
            ),
        ));
    }
    if !snapshot.total_debt.is_finite() || snapshot.total_debt < 0.0 {
        return Err(SimulationError::invalid_argument(
            "total_debt",
            format!(
                "must be finite and non-negative, got {}",
                snapshot.total_debt
            ),
        ));
    }
    store.validate()?;
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_seeded(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
    initial_value: f64,
) -> Vec<TrajectoryPath> {
    (0..options.num_simulations)
        .into_par_iter()
        .map(|i| {
            let mut source = RngSource::seeded(trajectory_seed(options.seed, i as u64));
            run_trajectory(snapshot, store, options, initial_value, &mut source, None)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_seeded(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
    initial_value: f64,
) -> Vec<TrajectoryPath> {
    (0..options.num_simulations)
        .map(|i| {
            let mut source = RngSource::seeded(trajectory_seed(options.seed, i as u64));
            run_trajectory(snapshot, store, options, initial_value, &mut source, None)
        })
        .collect()
}

fn collect_result(
    paths: Vec<TrajectoryPath>,
    initial_value: f64,
    options: &SimulationOptions,
) -> SimulationResult {
    let (nominal, real) = paths.into_iter().map(|p| (p.nominal, p.real)).unzip();
    SimulationResult {
        nominal,
        real,
        initial_value,
        years: options.years,
        include_inflation: options.include_inflation,
        include_fees: options.include_fees,
    }
}

/// Step one trajectory through every year.
///
/// Draw order per year: one uniform (regime), one normal (inflation, taken
/// even when inflation is off), then for each asset in snapshot order its
/// base draw followed by its shock draw when the regime has one.
fn run_trajectory<S: RandomSource + ?Sized>(
    snapshot: &PortfolioSnapshot,
    store: &ParameterStore,
    options: &SimulationOptions,
    initial_value: f64,
    source: &mut S,
    mut trace: Option<&mut TrajectoryTrace>,
) -> TrajectoryPath {
    let years = options.years as usize;
    let mut values: Vec<f64> = snapshot.assets.iter().map(|a| a.value).collect();
    let mut inflation_factor = 1.0;

    let mut nominal = Vec::with_capacity(years + 1);
    let mut real = Vec::with_capacity(years + 1);
    nominal.push(initial_value);
    real.push(initial_value);

    for year in 1..=options.years {
        let regime = store.crisis.regime_for(source.next_uniform());

        let inflation_pct = store.inflation.sample(source);
        if options.include_inflation {
            inflation_factor *= 1.0 + inflation_pct / 100.0;
        }

        let mut year_returns = trace
            .as_ref()
            .map(|_| Vec::with_capacity(snapshot.assets.len()));
        let mut year_total = 0.0;
        for (asset, value) in snapshot.assets.iter().zip(values.iter_mut()) {
            let asset_return =
                draw_asset_return(asset, regime, store, options.include_fees, source);
            *value *= 1.0 + asset_return;
            year_total += *value;
            if let Some(returns) = year_returns.as_mut() {
                returns.push(asset_return);
            }
        }

        let debt = remaining_debt(snapshot.total_debt, options.years, year);
        let nominal_net_worth = year_total - debt;
        nominal.push(nominal_net_worth);
        real.push(nominal_net_worth / inflation_factor);

        if let Some(trace) = trace.as_deref_mut() {
            trace.regimes.push(regime);
            trace.asset_returns.push(year_returns.unwrap_or_default());
            trace.inflation_factors.push(inflation_factor);
            trace.remaining_debt.push(debt);
        }
    }

    TrajectoryPath { nominal, real }
}

/// Combined yearly return of one asset, floored at `RETURN_FLOOR`.
fn draw_asset_return<S: RandomSource + ?Sized>(
    asset: &SnapshotAsset,
    regime: MarketRegime,
    store: &ParameterStore,
    include_fees: bool,
    source: &mut S,
) -> f64 {
    let mut asset_return = asset.params.sample(source);
    if let Some(shock) = store.crisis.shock(regime, asset.category) {
        asset_return += shock.sample(source);
    }
    if include_fees {
        asset_return -= store.fees.fee_for(asset.category);
    }
    asset_return.max(RETURN_FLOOR)
}
