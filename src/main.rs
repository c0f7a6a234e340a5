//! usersearch — find a user in a remote JSON collection.
//!
//! Entry point and error handling boundary. Uses `anyhow` for setup
//! errors; fetch failures are part of the report and still exit 0.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::args::Cli;
use usersearch::config::Config;
use usersearch::env::Env;
use usersearch::orchestrator::SearchOrchestrator;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    cli::init_logging(cli.verbose, &env);

    let cwd = std::env::current_dir().ok();
    let mut config = Config::load(cli.config.as_deref(), cwd.as_deref(), &env)
        .context("failed to load configuration")?;
    cli.apply(&mut config);

    let orchestrator = SearchOrchestrator::from_config(&config);
    tracing::info!(
        version = usersearch::constants::VERSION,
        endpoint = %config.users_endpoint(),
        target = %orchestrator.target(),
        "starting search"
    );

    let report = orchestrator.run().await;
    print!("{}", config.output.format.render(&report));

    Ok(())
}
