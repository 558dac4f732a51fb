use std::process::ExitCode;

use clap::Parser;
use products2csv::{Config, convert, logger};

fn main() -> ExitCode {
    // Parse CLI arguments
    let config = Config::parse();

    logger::init_logger();
    tracing::debug!(?config, "starting conversion");

    if convert(&config) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
