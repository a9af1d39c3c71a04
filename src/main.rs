use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod core;
mod distance;
mod scripts;
mod simulate;
mod utils;
mod variants;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("edit_scripts=debug,info")
    } else {
        EnvFilter::new("edit_scripts=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Distance(args) => {
            cli::distance::run_distance(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Align(args) => {
            cli::distance::run_align(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Overlaps(args) => {
            cli::distance::run_overlaps(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Scripts(args) => {
            cli::scripts::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Score(args) => {
            cli::score::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Apply(args) => {
            cli::apply::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Simulate(args) => {
            cli::simulate::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
