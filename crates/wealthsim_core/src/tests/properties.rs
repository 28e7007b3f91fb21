//! Property-based invariants over random seeds and small portfolios

use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

use super::assert_close;
use crate::classify::Classifier;
use crate::model::{Holding, PercentileKey, RETURN_FLOOR};
use crate::random::RngSource;
use crate::simulation::{SimulationOptions, remaining_debt, simulate, trace_trajectory};
use crate::statistics::{mean, percentile_series};
use crate::store::ParameterStore;

fn sample_holdings(cash: u32, etf: u32, crypto: u32) -> Vec<Holding> {
    vec![
        Holding::new("Livret A", f64::from(cash)),
        Holding::new("MSCI World ETF", f64::from(etf)),
        Holding::new("Ethereum", f64::from(crypto)),
    ]
}

fn crisis_store() -> ParameterStore {
    let mut store = ParameterStore::default();
    store.crisis.crisis_probability = 1.0;
    store.crisis.correction_probability = 0.0;
    store
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(32))]

    #[test]
    fn prop_percentile_bands_are_ordered(
        seed in any::<u64>(),
        years in 1u32..12,
        simulations in 1usize..60,
        cash in 0u32..50_000,
        etf in 0u32..200_000,
        crypto in 0u32..20_000,
        debt in 0u32..100_000,
    ) {
        let store = ParameterStore::default();
        let snapshot = Classifier::new(&store)
            .snapshot(&sample_holdings(cash, etf, crypto), f64::from(debt));
        let options = SimulationOptions::new(years, simulations).seed(seed);
        let result = simulate(&snapshot, &store, &options).unwrap();

        for matrix in [&result.nominal, &result.real] {
            let series = percentile_series(matrix);
            prop_assert_eq!(series.len(), years as usize + 1);
            for year in 0..series.len() {
                let bands = series.at_year(year);
                for pair in bands[..5].windows(2) {
                    prop_assert!(
                        pair[0].1 <= pair[1].1,
                        "{} > {} at year {}", pair[0].0, pair[1].0, year
                    );
                }
            }
        }
    }

    #[test]
    fn prop_year_zero_is_initial_value(
        seed in any::<u64>(),
        years in 1u32..8,
        simulations in 1usize..40,
        cash in 0u32..50_000,
        etf in 0u32..200_000,
        debt in 0u32..300_000,
    ) {
        let store = ParameterStore::default();
        let snapshot = Classifier::new(&store)
            .snapshot(&sample_holdings(cash, etf, 0), f64::from(debt));
        let initial = snapshot.initial_value();
        let options = SimulationOptions::new(years, simulations).seed(seed);
        let result = simulate(&snapshot, &store, &options).unwrap();

        prop_assert_eq!(result.initial_value, initial);
        for (nominal, real) in result.nominal.iter().zip(&result.real) {
            prop_assert_eq!(nominal.len(), years as usize + 1);
            prop_assert_eq!(nominal[0], initial);
            prop_assert_eq!(real[0], initial);
        }
    }

    #[test]
    fn prop_mean_band_is_column_average(
        seed in any::<u64>(),
        simulations in 1usize..50,
        etf in 1u32..200_000,
    ) {
        let store = ParameterStore::default();
        let snapshot = Classifier::new(&store).snapshot(&sample_holdings(1_000, etf, 500), 0.0);
        let options = SimulationOptions::new(5, simulations).seed(seed);
        let result = simulate(&snapshot, &store, &options).unwrap();

        let series = result.nominal_series();
        for year in 0..=5 {
            let column: Vec<f64> = result.nominal.iter().map(|row| row[year]).collect();
            assert_close(series.get(PercentileKey::Mean)[year], mean(&column), 1e-6);
        }
    }

    #[test]
    fn prop_returns_never_below_floor(
        seed in any::<u64>(),
        years in 1u32..30,
        include_fees in any::<bool>(),
    ) {
        let store = crisis_store();
        let holdings = vec![
            Holding::new("Bitcoin", 10_000.0),
            Holding::new("Solana staking", 5_000.0),
            Holding::new("CAC 40 tracker", 20_000.0),
        ];
        let snapshot = Classifier::new(&store).snapshot(&holdings, 0.0);
        let options = SimulationOptions::new(years, 1).fees(include_fees);
        let mut source = RngSource::seeded(seed);
        let trace = trace_trajectory(&snapshot, &store, &options, &mut source).unwrap();

        prop_assert_eq!(trace.asset_returns.len(), years as usize);
        for year_returns in &trace.asset_returns {
            prop_assert_eq!(year_returns.len(), holdings.len());
            for &asset_return in year_returns {
                prop_assert!(asset_return >= RETURN_FLOOR);
            }
        }
        for value in &trace.nominal {
            prop_assert!(*value > 0.0);
        }
    }

    #[test]
    fn prop_remaining_debt_never_increases(
        total_debt in 0u32..2_000_000,
        years in 1u32..60,
    ) {
        let total_debt = f64::from(total_debt);
        let mut previous = remaining_debt(total_debt, years, 0);
        prop_assert_eq!(previous, total_debt);
        for year in 1..=years {
            let debt = remaining_debt(total_debt, years, year);
            prop_assert!(debt <= previous);
            prop_assert!(debt >= 0.0);
            previous = debt;
        }
        prop_assert_eq!(previous, 0.0);
    }

    #[test]
    fn prop_seeded_projection_is_deterministic(
        seed in any::<u64>(),
        simulations in 1usize..30,
    ) {
        let store = ParameterStore::default();
        let holdings = sample_holdings(5_000, 50_000, 2_000);
        let snapshot = Classifier::new(&store).snapshot(&holdings, 10_000.0);
        let options = SimulationOptions::new(6, simulations).seed(seed);

        let first = simulate(&snapshot, &store, &options).unwrap();
        let second = simulate(&snapshot, &store, &options).unwrap();
        prop_assert_eq!(&first, &second);

        // Inflation is drawn either way, so nominal paths do not move
        let without_inflation = simulate(&snapshot, &store, &options.inflation(false)).unwrap();
        prop_assert_eq!(&first.nominal, &without_inflation.nominal);
    }
}
