pub mod secret;

use crate::error::Result;
use crate::faultcenter::sinks::SinkConfig;
use secret::SecretSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub datasources: Vec<DatasourceConfig>,
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

/// One configured webhook source. `kind` is the datasource type tag; only
/// `"Webhook"` datasources are accepted by the ingestion route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasourceConfig {
    pub id: String,

    #[serde(rename = "tenantId")]
    pub tenant_id: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    /// Source field name -> target field name. Targets prefixed with
    /// `labels.` land inside the event's `labels` sub-object.
    #[serde(default)]
    pub field_mapping: HashMap<String, String>,

    /// Fields participating in fingerprinting, in declaration order.
    /// Empty means "all payload fields except reserved metadata".
    #[serde(default)]
    pub fingerprint_fields: Vec<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<WebhookAuthentication>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookAuthentication {
    pub secret: SecretSource,

    #[serde(default = "default_header_name")]
    pub header_name: String,
}

fn default_header_name() -> String {
    "X-Webhook-Signature".to_string()
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let config_path = std::env::var("CONFIGURATION_PATH")
            .unwrap_or_else(|_| "config/config.json".to_string());
        Self::from_file(&config_path)
    }

    pub fn get_port() -> u16 {
        std::env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000)
    }
}
