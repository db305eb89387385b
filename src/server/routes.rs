use crate::config::AppConfig;
use crate::error::Result;
use crate::faultcenter::AlertSender;
use crate::sources::webhook;
use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub fn create_router(config: AppConfig, alert_tx: AlertSender) -> Result<Router> {
    let router = Router::new()
        .route("/-/healthz", get(health_check))
        .route("/-/ready", get(health_check));

    let router = webhook::register_webhook_routes(router, &config.datasources, alert_tx)?;

    Ok(router.layer(TraceLayer::new_for_http()))
}
