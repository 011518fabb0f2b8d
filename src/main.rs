use liveinfo::config::env_loader::load_config;
use liveinfo::tracing::setup_tracing;
use liveinfo::update::run_update;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    setup_tracing();

    let config = load_config();

    match run_update(&config) {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
