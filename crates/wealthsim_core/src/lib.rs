//! Wealth projection library
//!
//! This crate provides a Monte Carlo engine that projects a portfolio
//! snapshot forward in time. It supports:
//! - Classification of arbitrary holdings into return-distribution categories
//! - Normal and log-normal yearly returns per asset
//! - Crisis and correction regimes shared by all assets within a year
//! - Stochastic inflation, management fees and linear debt amortization
//! - Per-year percentile bands and horizon statistics
//!
//! # Example
//!
//! ```ignore
//! use wealthsim_core::{Holding, ParameterStore, SimulationOptions, project};
//!
//! let store = ParameterStore::default();
//! let holdings = vec![
//!     Holding::new("Livret A", 10_000.0),
//!     Holding::new("MSCI World ETF", 25_000.0),
//! ];
//! let projection = project(&holdings, 0.0, &store, &SimulationOptions::new(20, 5_000))?;
//! println!("median in 20 years: {:.0}", projection.summary.p50.final_value);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod classify;
pub mod error;
pub mod projection;
pub mod random;
pub mod simulation;
pub mod statistics;
pub mod store;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use classify::{Classification, Classifier, ParamsSource, categorize};
pub use error::{ConfigError, SimulationError};
pub use model::{
    AssetCategory, AssetReturnParams, Holding, HorizonStats, PercentileKey, PercentileSeries,
    PortfolioSnapshot, SimulationResult, SummaryStats,
};
pub use projection::{Projection, project, project_snapshot};
pub use random::{RandomSource, RngSource};
pub use simulation::{SimulationOptions, simulate, simulate_with_source, trace_trajectory};
pub use store::ParameterStore;
