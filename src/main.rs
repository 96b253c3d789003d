//! registration - interactive console registration.
//!
//! Reads config from env vars (see `config::AppConfig`), e.g.:
//!   REGISTRATION__AGE__MIN_AGE         inclusive lower age bound (default: 16)
//!   REGISTRATION__FLOW__ON_EXHAUSTION  restart | terminate (default: restart)
//!   REGISTRATION__LOGGING__LEVEL       tracing filter (default: warn)
//!
//! Exit status is 0 when the user stops registering, 1 on cancellation,
//! on exhaustion under the terminate policy, and on any other error.

use std::process::ExitCode;

use registration_flow::adapters::StdioConsole;
use registration_flow::application::handlers::registration::messages;
use registration_flow::application::{FlowOutcome, FlowSettings, RegistrationFlow};
use registration_flow::config::AppConfig;
use registration_flow::ports::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }
    config.logging.init();

    let settings = match FlowSettings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid flow settings");
            return ExitCode::FAILURE;
        }
    };

    let flow = RegistrationFlow::new(settings);
    let mut console = StdioConsole::new();

    match flow.run(&mut console).await {
        Ok(FlowOutcome::Completed { registered }) => {
            tracing::info!(registered, "Exiting normally");
            ExitCode::SUCCESS
        }
        Ok(FlowOutcome::Exhausted { registered }) => {
            tracing::info!(registered, "Exiting after exhausted attempts");
            ExitCode::FAILURE
        }
        Err(e) if e.is_cancelled() => {
            // The prompt line is still open; start the notice on a new line.
            let _ = console.write_line("").await;
            let _ = console.write_line(messages::CANCELLED).await;
            tracing::info!("Registration cancelled by user");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
