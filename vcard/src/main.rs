// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use vcard::logging::init_logging;
use vcard::{Args, load_config, report, run_with_config};

fn main() -> ExitCode {
    let args = Args::parse();
    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn try_main(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    init_logging(&config);
    run_with_config(args, &config)
}
