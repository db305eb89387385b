use crate::config::AppConfig;
use crate::error::Result;
use crate::faultcenter::sinks::{database::DatabaseSink, Sink, SinkConfig};
use crate::faultcenter::AlertReceiver;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Consumes alert events from the fault center queue and fans them out to
/// the configured sinks. Sink failures are logged and do not stop the loop;
/// delivery past the queue is the dispatcher's problem, never the
/// ingestion handler's.
pub struct FaultCenterDispatcher {
    sinks: Vec<Arc<dyn Sink>>,
}

impl FaultCenterDispatcher {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let mut sinks: Vec<Arc<dyn Sink>> = Vec::new();

        for sink_config in &config.sinks {
            match sink_config {
                SinkConfig::Mongo {
                    url,
                    database,
                    collection,
                } => {
                    let mongo_url = url.resolve()?;
                    let sink = DatabaseSink::new(&mongo_url, database, collection).await?;
                    sinks.push(Arc::new(sink));
                }
            }
        }

        Ok(Self { sinks })
    }

    pub async fn run(self, mut receiver: AlertReceiver) {
        info!("Fault center dispatcher started with {} sinks", self.sinks.len());

        while let Some(event) = receiver.recv().await {
            debug!(
                "Received alert event: id={}, fingerprint={}, fault_center={}",
                event.event_id, event.fingerprint, event.fault_center_id
            );

            for (idx, sink) in self.sinks.iter().enumerate() {
                if let Err(e) = sink.write(&event).await {
                    error!("Failed to write alert event to sink {}: {}", idx, e);
                    // Continue to other sinks even if one fails
                }
            }
        }

        info!("Fault center dispatcher stopped");
    }
}
