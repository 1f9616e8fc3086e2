use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use harness::config::Args;
use harness::runner::run_all;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.run_config().context("invalid query arguments")?;
    let stdout = io::stdout();
    run_all(&config, &mut stdout.lock())
}
