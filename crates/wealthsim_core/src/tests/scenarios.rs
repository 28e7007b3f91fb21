//! End-to-end projection scenarios
//!
//! These tests verify that:
//! - A one-year, one-trajectory run matches the closed-form value of the
//!   drawn returns
//! - Forcing a crisis every year materially lowers the median outcome
//! - `project` wires classification, simulation and reduction together

use super::{ScriptedSource, assert_close};
use crate::classify::Classifier;
use crate::model::{AssetCategory, Holding, PercentileKey};
use crate::projection::project;
use crate::random::RngSource;
use crate::simulation::{SimulationOptions, simulate, simulate_with_source};
use crate::statistics::summarize;
use crate::store::ParameterStore;

#[test]
fn test_one_year_closed_form() {
    let store = ParameterStore::default().without_market_shocks();
    let holdings = vec![
        Holding::new("Cash", 10_000.0),
        Holding::new("Global ETF", 20_000.0).with_type("ETF"),
    ];
    let snapshot = Classifier::new(&store).snapshot(&holdings, 0.0);
    assert_eq!(snapshot.assets[0].category, AssetCategory::Cash);
    assert_eq!(snapshot.assets[1].category, AssetCategory::Etf);

    let options = SimulationOptions::new(1, 1).fees(false);
    let mut source = ScriptedSource::new(0.42, &[0.3, -0.7, 1.1]);
    let result = simulate_with_source(&snapshot, &store, &options, &mut source).unwrap();

    // Draw order: inflation, then each asset's base return
    assert_eq!(source.normals.len(), 3);
    let cash_return = source.normals[1];
    let etf_return = source.normals[2];
    assert_close(cash_return, 0.02 + 0.005 * -0.7, 1e-12);
    assert_close(etf_return, 0.07 + 0.15 * 1.1, 1e-12);

    let expected = 10_000.0 * (1.0 + cash_return) + 20_000.0 * (1.0 + etf_return);
    assert_close(result.nominal[0][1], expected, 1e-6);

    let inflation_factor = 1.0 + source.normals[0] / 100.0;
    assert_close(result.real[0][1], expected / inflation_factor, 1e-6);
}

#[test]
fn test_one_year_closed_form_with_fees() {
    let store = ParameterStore::default().without_market_shocks();
    let holdings = vec![Holding::new("Cash", 10_000.0), Holding::new("Global ETF", 20_000.0)];
    let snapshot = Classifier::new(&store).snapshot(&holdings, 0.0);

    let options = SimulationOptions::new(1, 1).inflation(false);
    let mut source = ScriptedSource::new(0.9, &[0.0, 0.25, -0.5]);
    let result = simulate_with_source(&snapshot, &store, &options, &mut source).unwrap();

    let cash_return = source.normals[1] - store.fees.fee_for(AssetCategory::Cash);
    let etf_return = source.normals[2] - store.fees.fee_for(AssetCategory::Etf);
    let expected = 10_000.0 * (1.0 + cash_return) + 20_000.0 * (1.0 + etf_return);
    assert_close(result.nominal[0][1], expected, 1e-6);
    assert_eq!(result.real[0][1], result.nominal[0][1]);
}

#[test]
fn test_forced_crisis_lowers_median_return() {
    let holdings = vec![Holding::new("Equity", 100_000.0)];
    let options = SimulationOptions::new(10, 2_000)
        .inflation(false)
        .fees(false)
        .seed(2_024);

    let mut crisis_store = ParameterStore::default();
    crisis_store.crisis.crisis_probability = 1.0;
    crisis_store.crisis.correction_probability = 0.0;
    let control_store = ParameterStore::default().without_market_shocks();

    let crisis = project(&holdings, 0.0, &crisis_store, &options).unwrap();
    let control = project(&holdings, 0.0, &control_store, &options).unwrap();

    let crisis_median = crisis.summary.p50.annualized_return;
    let control_median = control.summary.p50.annualized_return;
    assert!(
        crisis_median < control_median - 10.0,
        "crisis median {crisis_median:.2}% should be far below control {control_median:.2}%"
    );
    assert!(control_median > 0.0);
    assert!(crisis.loss_probability > control.loss_probability);
}

#[test]
fn test_projection_reports_real_values_when_inflation_included() {
    let store = ParameterStore::default();
    let holdings = vec![
        Holding::new("Livret A", 15_000.0),
        Holding::new("Amundi MSCI World ETF", 40_000.0),
        Holding::new("Primovie", 20_000.0).with_type("SCPI"),
        Holding::new("Bitcoin", 3_000.0),
    ];
    let options = SimulationOptions::new(15, 500).seed(8);

    let projection = project(&holdings, 25_000.0, &store, &options).unwrap();

    assert_eq!(projection.initial_value(), 53_000.0);
    assert_eq!(projection.snapshot.assets.len(), 4);
    assert_eq!(projection.nominal.len(), 16);
    assert_eq!(projection.real.len(), 16);
    assert_eq!(projection.reported(), &projection.real);

    let expected = summarize(&projection.real, 53_000.0, 15);
    assert_eq!(projection.summary, expected);
    for (key, value) in projection.real.at_year(0) {
        assert_eq!(value, 53_000.0, "{key}");
    }
    assert!((0.0..=1.0).contains(&projection.loss_probability));
}

#[test]
fn test_projection_reports_nominal_values_without_inflation() {
    let store = ParameterStore::default();
    let holdings = vec![Holding::new("S&P 500", 10_000.0)];
    let options = SimulationOptions::new(5, 200).inflation(false);

    let projection = project(&holdings, 0.0, &store, &options).unwrap();

    assert_eq!(projection.reported(), &projection.nominal);
    assert_eq!(projection.nominal, projection.real);
    let horizon = projection.nominal.at_horizon();
    assert_eq!(horizon[2].0, PercentileKey::P50);
    assert_eq!(projection.summary.p50.final_value, horizon[2].1);
}

#[test]
fn test_projection_serializes_keyed_bands() {
    let store = ParameterStore::default();
    let holdings = vec![Holding::new("Cash", 1_000.0)];
    let projection = project(&holdings, 0.0, &store, &SimulationOptions::new(3, 20)).unwrap();

    let json = serde_json::to_value(&projection).unwrap();
    for key in ["p10", "p25", "p50", "p75", "p90", "mean"] {
        assert_eq!(json["real"][key].as_array().unwrap().len(), 4, "{key}");
        assert!(json["summary"][key]["annualized_return"].is_number(), "{key}");
    }
    // Raw matrices stay out of the serialized report
    assert!(json.get("result").is_none());
}

#[test]
fn test_unknown_holdings_still_project() {
    let store = ParameterStore::default();
    let holdings = vec![
        Holding::new("Grandma's paintings", 8_000.0).with_type("Other"),
        Holding::new("ZZZ Unlisted Startup", 12_000.0),
    ];
    let result = simulate(
        &Classifier::new(&store).snapshot(&holdings, 0.0),
        &store,
        &SimulationOptions::new(5, 100),
    )
    .unwrap();
    assert_eq!(result.num_simulations(), 100);

    let mut source = RngSource::seeded(1);
    let snapshot = Classifier::new(&store).snapshot(&holdings, 0.0);
    assert_eq!(snapshot.assets[0].category, AssetCategory::Other);
    assert_eq!(snapshot.assets[1].category, AssetCategory::Equity);
    assert!(
        simulate_with_source(&snapshot, &store, &SimulationOptions::new(2, 3), &mut source)
            .is_ok()
    );
}
