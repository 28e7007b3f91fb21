use clap::Parser;
use wealthsim::{Cli, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let output = run(&cli)?;
    print!("{output}");

    Ok(())
}
