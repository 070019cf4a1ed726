mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{generate, redistrict};
use tracing_subscriber::EnvFilter;

/// Install the log subscriber; `RUST_LOG` overrides the `-v` count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => generate::run(&cli, args),
        Commands::Redistrict(args) => redistrict::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
