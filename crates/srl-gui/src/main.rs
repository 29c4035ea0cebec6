//! Student Record Lookup - Desktop GUI Application
//!
//! Looks up a student by numeric ID and shows every record category the
//! student payments API exposes.

use std::process::ExitCode;

use srl_fetch::ApiConfig;
use srl_gui::StartupError;
use srl_gui::logging::{LogConfig, init_logging};

/// Application entry point.
fn main() -> ExitCode {
    match launch() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "startup failed");
            eprintln!("error: {err}");
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn launch() -> Result<(), StartupError> {
    init_logging(&LogConfig::default())?;

    tracing::info!("Starting Student Record Lookup");

    let config = ApiConfig::from_env()?;
    srl_gui::run(&config)
}
