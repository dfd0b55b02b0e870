mod application;
mod classification;
mod cli;
mod data;
mod domain;
mod extraction;
mod infra;
mod retrieval;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_directive().parse()?),
        )
        .init();

    cli.run()
}
