//! Command line front end for the wealthsim projection engine
//!
//! Reads a portfolio exported by the tracking dashboard, resolves the
//! parameter store (built-in or YAML override) and prints the projection
//! as a table or as JSON for charting.

pub mod cli;
pub mod data;
pub mod logging;
pub mod report;

pub use cli::{Cli, Command, run};
pub use logging::init_logging;
pub use report::OutputFormat;
