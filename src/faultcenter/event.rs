use crate::config::DatasourceConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const DATASOURCE_TYPE_WEBHOOK: &str = "Webhook";

pub const DEFAULT_SEVERITY: &str = "P2";
pub const DEFAULT_RULE_NAME: &str = "Webhook Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Alerting,
    Resolved,
}

/// The canonical alert event record handed to the fault center queue.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub tenant_id: String,
    pub event_id: String,
    pub datasource_type: String,
    pub datasource_id: String,
    pub fingerprint: String,
    pub severity: String,
    pub rule_name: String,
    pub rule_id: String,
    pub labels: Map<String, Value>,
    pub annotations: String,
    pub fault_center_id: String,
    pub status: EventStatus,
    pub for_duration: i64,
    pub eval_interval: i64,
}

impl AlertEvent {
    /// Build the event snapshot from mapped webhook fields.
    ///
    /// Optional fields degrade to defaults rather than erroring: a missing or
    /// wrong-typed `severity`, `rule_name`, `annotations`, or `labels` must
    /// never prevent the event from being recorded. Webhook events alert
    /// immediately, so status is fixed and both durations are zero.
    pub fn from_webhook(
        datasource: &DatasourceConfig,
        mapped: &Map<String, Value>,
        fault_center_id: &str,
        fingerprint: String,
    ) -> Self {
        let labels = match mapped.get("labels") {
            Some(Value::Object(labels)) => labels.clone(),
            _ => Map::new(),
        };

        Self {
            tenant_id: datasource.tenant_id.clone(),
            event_id: Uuid::new_v4().as_simple().to_string(),
            datasource_type: DATASOURCE_TYPE_WEBHOOK.to_string(),
            datasource_id: datasource.id.clone(),
            fingerprint,
            severity: string_or(mapped, "severity", DEFAULT_SEVERITY),
            rule_name: string_or(mapped, "rule_name", DEFAULT_RULE_NAME),
            rule_id: format!("webhook_{}", datasource.id),
            labels,
            annotations: string_or(mapped, "annotations", ""),
            fault_center_id: fault_center_id.to_string(),
            status: EventStatus::Alerting,
            for_duration: 0,
            eval_interval: 0,
        }
    }
}

fn string_or(data: &Map<String, Value>, key: &str, default: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}
