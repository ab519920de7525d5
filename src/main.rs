mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::overdue_orders, startup, state::AppState,
    util::clock::{Clock, SystemClock},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Held for the lifetime of the server so the sweep keeps running
    let _overdue_scheduler = match &config.overdue_sweep_schedule {
        Some(schedule) => Some(
            overdue_orders::start_scheduler(db.clone(), clock.clone(), schedule).await?,
        ),
        None => {
            tracing::info!("Overdue order sweep disabled");
            None
        }
    };

    let state = AppState::new(db, clock, config.transition_policy);
    let app = router::router(state, session, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
