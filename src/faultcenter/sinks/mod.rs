pub mod database;

use crate::config::secret::SecretSource;
use crate::error::Result;
use crate::faultcenter::event::AlertEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    Mongo {
        url: SecretSource,
        database: String,
        collection: String,
    },
}

#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    async fn write(&self, event: &AlertEvent) -> Result<()>;
}
