//! Plain-text and JSON rendering of projections

use std::fmt::Write;

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use wealthsim_core::model::{AssetReturnParams, DistributionShape};
use wealthsim_core::{Classification, ParamsSource, PercentileKey, Projection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render(projection: &Projection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(projection)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(projection).wrap_err("Failed to serialize projection")
        }
    }
}

pub fn render_table(projection: &Projection) -> String {
    let options = &projection.options;
    let basis = if options.include_inflation {
        "real (inflation-adjusted)"
    } else {
        "nominal"
    };

    let mut out = String::new();
    let _ = writeln!(out, "Wealth projection");
    let _ = writeln!(
        out,
        "  {} years, {} simulations, seed {}, fees {}",
        options.years,
        options.num_simulations,
        options.seed,
        if options.include_fees { "on" } else { "off" }
    );
    let _ = writeln!(
        out,
        "  Assets {}  Debt {}  Net worth {}",
        money(projection.snapshot.total_assets()),
        money(projection.snapshot.total_debt),
        money(projection.initial_value())
    );
    let _ = writeln!(out, "  Values are {basis}");
    out.push('\n');

    let _ = writeln!(out, "Holdings");
    for asset in &projection.snapshot.assets {
        let _ = writeln!(
            out,
            "  {:<28} {:>14}  {:<12} {}",
            asset.name,
            money(asset.value),
            asset.category.label(),
            describe_params(&asset.params)
        );
    }
    out.push('\n');

    let series = projection.reported();
    let _ = write!(out, "{:>5}", "Year");
    for key in PercentileKey::ALL {
        let _ = write!(out, " {:>14}", key.to_string().to_uppercase());
    }
    out.push('\n');
    for year in 0..series.len() {
        let _ = write!(out, "{year:>5}");
        for (_, value) in series.at_year(year) {
            let _ = write!(out, " {:>14}", money(value));
        }
        out.push('\n');
    }
    out.push('\n');

    let _ = writeln!(out, "At year {}", options.years);
    for (key, stats) in projection.summary.iter() {
        let _ = writeln!(
            out,
            "  {:<5} {:>14}  gain {:>14} ({:+.1}%)  annualized {:+.2}%",
            key.to_string().to_uppercase(),
            money(stats.final_value),
            money(stats.gain),
            stats.gain_pct,
            stats.annualized_return
        );
    }
    let _ = writeln!(
        out,
        "  Probability of ending below today's net worth: {:.1}%",
        projection.loss_probability * 100.0
    );

    out
}

pub fn render_classification(name: &str, classification: &Classification) -> String {
    let source = match &classification.source {
        ParamsSource::ExactName => "exact name match".to_string(),
        ParamsSource::NameContains(key) => format!("name contains \"{key}\""),
        ParamsSource::TypeLabel => "type label".to_string(),
        ParamsSource::Default => "default assumptions".to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{name}");
    let _ = writeln!(out, "  Category  {}", classification.category.label());
    let _ = writeln!(out, "  Returns   {}", describe_params(&classification.params));
    let _ = writeln!(out, "  Source    {source}");
    out
}

fn describe_params(params: &AssetReturnParams) -> String {
    let shape = match params.distribution {
        DistributionShape::Normal => "normal",
        DistributionShape::LogNormal => "lognormal",
    };
    format!(
        "{:.1}% ± {:.1}% {shape}",
        params.mean_annual_return_pct, params.std_dev_annual_return_pct
    )
}

/// Whole currency units with thousands separators.
fn money(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
