// src/bin/words.rs
use std::{io, process::ExitCode};

use clap::Parser;
use wordtally::{app, cli, logging};

fn main() -> ExitCode {
    let config = match cli::build_words_config(cli::WordsArgs::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("words: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.verbose);

    match app::run_words(&config, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("words: {e}");
            ExitCode::FAILURE
        }
    }
}
