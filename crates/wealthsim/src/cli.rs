use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use wealthsim_core::{Classifier, SimulationOptions, project};

use crate::data::{PortfolioFile, default_data_dir, resolve_store, store_to_yaml};
use crate::report::{OutputFormat, render, render_classification};

#[derive(Parser, Debug)]
#[command(name = "wealthsim")]
#[command(about = "Monte Carlo projection of a personal portfolio")]
pub struct Cli {
    /// Path to the data directory (default: ~/.wealthsim/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project a portfolio file forward
    Project(ProjectArgs),
    /// Show how a holding name is classified
    Classify {
        name: String,
        /// Optional type label from the tracking dashboard
        #[arg(short = 't', long = "type")]
        type_label: Option<String>,
    },
    /// Print the effective parameter store as YAML
    Params {
        /// Parameter file to print instead of the data directory one
        #[arg(long)]
        params: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Portfolio YAML file
    #[arg(short, long)]
    pub portfolio: PathBuf,

    #[arg(short, long, default_value_t = 10)]
    pub years: u32,

    #[arg(short, long, default_value_t = 1_000)]
    pub simulations: usize,

    /// Report nominal values instead of inflation-adjusted ones
    #[arg(long)]
    pub no_inflation: bool,

    /// Ignore management fees
    #[arg(long)]
    pub no_fees: bool,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Parameter store override (default: <data_dir>/params.yaml if present)
    #[arg(long)]
    pub params: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ProjectArgs {
    pub fn options(&self) -> SimulationOptions {
        SimulationOptions::new(self.years, self.simulations)
            .inflation(!self.no_inflation)
            .fees(!self.no_fees)
            .seed(self.seed)
    }
}

impl Cli {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Execute a parsed command and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let data_dir = cli.data_dir();

    match &cli.command {
        Command::Project(args) => {
            let store = resolve_store(args.params.as_deref(), &data_dir)?;
            let portfolio = PortfolioFile::load(&args.portfolio)?;
            let options = args.options();

            tracing::info!(
                years = options.years,
                simulations = options.num_simulations,
                include_inflation = options.include_inflation,
                include_fees = options.include_fees,
                "Running projection"
            );
            let projection =
                project(portfolio.holdings(), portfolio.total_debt(), &store, &options)?;
            render(&projection, args.format)
        }
        Command::Classify { name, type_label } => {
            let store = resolve_store(None, &data_dir)?;
            let classification = Classifier::new(&store).classify(name, type_label.as_deref());
            Ok(render_classification(name, &classification))
        }
        Command::Params { params } => {
            let store = resolve_store(params.as_deref(), &data_dir)?;
            store_to_yaml(&store)
        }
    }
}
