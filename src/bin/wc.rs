// src/bin/wc.rs
use std::{io, process::ExitCode};

use clap::Parser;
use wordtally::{app, cli::WcArgs, config::WcConfig, logging};

fn main() -> ExitCode {
    let config = WcConfig::from(WcArgs::parse());
    logging::init(config.verbose);

    match app::run_wc(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wc: {e}");
            ExitCode::FAILURE
        }
    }
}
