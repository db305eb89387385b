use super::{fingerprint, mapper, WebhookState, WEBHOOK_DATASOURCE_TYPE};
use crate::error::{AppError, Result};
use crate::faultcenter::event::AlertEvent;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;

/// POST /webhook/:datasource_id
///
/// Translates one third-party payload into an alert event and hands it to
/// the fault center queue. Request-level validation (datasource lookup,
/// type check, signature, `faultCenterId`) rejects here; past that point
/// the mapping, fingerprinting, and build steps are total and cannot fail.
pub async fn handle_webhook(
    State(state): State<Arc<WebhookState>>,
    Path(datasource_id): Path<String>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<impl IntoResponse> {
    // Step 1: Look up the datasource configuration
    let datasource = state
        .datasources
        .get(&datasource_id)
        .ok_or_else(|| AppError::DatasourceNotFound(datasource_id.clone()))?;

    if datasource.config.kind != WEBHOOK_DATASOURCE_TYPE {
        return Err(AppError::WrongDatasourceType(datasource_id));
    }

    // Step 2: Validate the signature when the datasource configures one
    if let Some(validator) = &datasource.validator {
        let signature = headers
            .get(validator.header_name())
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::MissingSignature)?;

        validator.validate(&body, signature)?;
    }

    // Step 3: Parse the JSON body
    let json_body: Value = serde_json::from_slice(&body)?;
    let payload = json_body.as_object().ok_or(AppError::PayloadNotObject)?;

    // Step 4: Require a non-empty faultCenterId
    let fault_center_id = payload
        .get("faultCenterId")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingRequiredField("faultCenterId"))?;

    // Step 5: Map fields and derive the fingerprint from the raw payload
    let webhook = &datasource.config.webhook;
    let mapped = mapper::map_fields(payload, &webhook.field_mapping);
    let fingerprint = fingerprint::generate_fingerprint(
        payload,
        &datasource.config.id,
        fault_center_id,
        &webhook.fingerprint_fields,
    );

    // Step 6: Build the event and publish to the fault center queue
    let event = AlertEvent::from_webhook(&datasource.config, &mapped, fault_center_id, fingerprint);

    state
        .alert_tx
        .send(event)
        .await
        .map_err(|_| AppError::QueueSend)?;

    tracing::info!("Accepted webhook alert for datasource {}", datasource_id);

    Ok(StatusCode::OK)
}
