//! `taxreg` entry point.

use clap::Parser;
use taxreg_cli::{execute, Cli};
use taxreg_core::StoreConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = StoreConfig::from_env();
    let stdout = std::io::stdout();
    execute(cli, &config, &mut stdout.lock())
}
