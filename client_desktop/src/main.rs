use std::process::ExitCode;

use client_desktop::{logging, run, Settings};
use game_core::Config;

fn main() -> ExitCode {
    if let Err(e) = logging::setup_logging() {
        eprintln!("Failed to set up logging: {}", e);
    }

    ExitCode::from(run(Settings::new(), Config::new()))
}
