// src/main.rs
use std::process::ExitCode;

use chord_kernel::{app, cli::Args, config::Config, logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.debug);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // ChordKernelError messages already embed their sources.
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
