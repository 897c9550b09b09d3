use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use servicearea_core::resolution::EligibilityResolver;

use crate::{
    app::AppError,
    http::{routes, AppState},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/eligibility", post(routes::check_eligibility))
        .route("/geofences", get(routes::list_geofences))
        .route(
            "/geofences/{id}",
            get(routes::get_geofence)
                .put(routes::put_geofence)
                .delete(routes::delete_geofence),
        )
        .route("/health", get(routes::health))
        .with_state(state)
}

/// serves the API on `bind_address` until the process receives ctrl-c.
pub async fn serve(resolver: EligibilityResolver, bind_address: &str) -> Result<(), AppError> {
    let app = router(Arc::new(AppState::new(resolver)));
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| AppError::Server(format!("unable to bind {bind_address}: {e}")))?;
    log::info!("service area API listening on {bind_address}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;
    log::info!("service area API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("received ctrl-c, shutting down"),
        Err(e) => {
            log::error!("unable to listen for shutdown signal: {e}");
            std::future::pending::<()>().await
        }
    }
}
