use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::Cli;
pub use domain::models::{Report, SampleRange};
pub use services::generator::{generate, RngSource, SampleSource, ScriptedSource};
pub use services::output::print_report;
pub use services::stats::summarize;

fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::handle_run(&cli, &mut out)
}
