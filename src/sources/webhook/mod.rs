pub mod fingerprint;
pub mod handler;
pub mod hmac;
pub mod mapper;

use crate::config::DatasourceConfig;
use crate::error::Result;
use crate::faultcenter::AlertSender;
use axum::{routing::post, Router};
use handler::handle_webhook;
use self::hmac::HmacValidator;
use std::collections::HashMap;
use std::sync::Arc;

/// The datasource type tag accepted by the webhook ingestion route.
pub const WEBHOOK_DATASOURCE_TYPE: &str = "Webhook";

pub struct WebhookState {
    pub datasources: HashMap<String, WebhookDatasource>,
    pub alert_tx: AlertSender,
}

pub struct WebhookDatasource {
    pub config: DatasourceConfig,
    pub validator: Option<HmacValidator>,
}

pub fn register_webhook_routes(
    router: Router,
    datasources: &[DatasourceConfig],
    alert_tx: AlertSender,
) -> Result<Router> {
    let mut registry = HashMap::new();

    for config in datasources {
        let validator = match &config.webhook.authentication {
            Some(auth) => Some(HmacValidator::new(
                auth.secret.resolve()?,
                auth.header_name.clone(),
            )),
            None => None,
        };

        tracing::info!("Registered webhook datasource: {} ({})", config.id, config.kind);

        registry.insert(
            config.id.clone(),
            WebhookDatasource {
                config: config.clone(),
                validator,
            },
        );
    }

    let state = Arc::new(WebhookState {
        datasources: registry,
        alert_tx,
    });

    Ok(router.route(
        "/webhook/:datasource_id",
        post(handle_webhook).with_state(state),
    ))
}
