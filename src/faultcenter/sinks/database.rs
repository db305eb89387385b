use super::Sink;
use crate::error::{AppError, Result};
use crate::faultcenter::event::AlertEvent;
use mongodb::{
    bson::{self, doc},
    Client, Collection,
};

/// MongoDB sink storing one document per logical alert.
///
/// Documents are keyed by fault center id plus fingerprint, so repeated
/// reports of the same alert condition collapse into a single upserted
/// record instead of piling up.
pub struct DatabaseSink {
    client: Client,
    database: String,
    collection: String,
}

impl DatabaseSink {
    pub async fn new(connection_string: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(connection_string)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        Ok(Self {
            client,
            database: database.to_string(),
            collection: collection.to_string(),
        })
    }

    fn get_collection(&self) -> Collection<bson::Document> {
        self.client
            .database(&self.database)
            .collection(&self.collection)
    }

    fn event_to_document(&self, event: &AlertEvent) -> Result<bson::Document> {
        let bson_value = bson::to_bson(event)
            .map_err(|e| AppError::Database(format!("Failed to convert event to BSON: {}", e)))?;

        match bson_value {
            bson::Bson::Document(doc) => Ok(doc),
            _ => Err(AppError::Database(
                "Expected alert event to serialize as a BSON document".to_string(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl Sink for DatabaseSink {
    async fn write(&self, event: &AlertEvent) -> Result<()> {
        let collection = self.get_collection();

        let dedup_key = format!("{}:{}", event.fault_center_id, event.fingerprint);

        let mut document = self.event_to_document(event)?;
        document.insert("_id", &dedup_key);

        collection
            .replace_one(doc! { "_id": &dedup_key }, document)
            .upsert(true)
            .await
            .map_err(|e| AppError::Database(format!("Failed to write to MongoDB: {}", e)))?;

        Ok(())
    }
}
