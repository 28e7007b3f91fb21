//! YAML files read by the command line front end
//!
//! Directory structure:
//! ~/.wealthsim/
//!   params.yaml          # Optional parameter store override

pub mod params;
pub mod portfolio;

pub use params::{PARAMS_FILE, default_data_dir, load_store, resolve_store, store_to_yaml};
pub use portfolio::{CreditData, PortfolioFile};
