//! Venue Tools - ダッシュボードプロジェクト用の補助ツール

mod cli;
mod commit;
mod config;
mod error;
mod fetch;
mod logging;
mod snapshot;
mod verify;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    cli::run(cli)
}
