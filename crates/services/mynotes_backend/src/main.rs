// File: services/mynotes_backend/src/main.rs
use mynotes_common::logging;
use mynotes_common::models::ReminderPayload;
use mynotes_config::load_config;
use mynotes_push::triggers::spawn_periodic;
use mynotes_push::PushState;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("Failed to load config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let state = match PushState::from_config(config.clone()) {
        Ok(state) => Arc::new(state),
        Err(err) => {
            error!("Failed to set up push delivery: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // Runs until the process exits.
    let _reminders = spawn_periodic(
        state.dispatcher.clone(),
        config.reminders.interval(),
        ReminderPayload::periodic(),
    );

    let app = mynotes_backend::app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Server listening on http://{}", addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
