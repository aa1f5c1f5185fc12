use async_trait::async_trait;
use lapin::{
    BasicProperties, Connection, ConnectionProperties,
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
};
use tracing::debug;

use crate::{error::PublishError, model::WeatherRecord};

use super::RecordPublisher;

/// Target queue, declared durable on every publish. The declare is
/// idempotent on the broker side, so repeating it each tick is safe.
pub const QUEUE_NAME: &str = "weather_data";

/// Messages marked persistent so they survive a broker restart.
const PERSISTENT: u8 = 2;

/// Publishes records to a RabbitMQ queue over a fresh connection per call.
///
/// No connection is reused across ticks: each publish pays full setup cost in
/// exchange for isolation from stale or broken connections lingering between
/// ticks. The connection is released whether or not the publish succeeds.
#[derive(Debug, Clone)]
pub struct RabbitMqPublisher {
    url: String,
}

impl RabbitMqPublisher {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    async fn publish_on(&self, conn: &Connection, payload: &[u8]) -> Result<(), PublishError> {
        let channel = conn.create_channel().await.map_err(PublishError::Channel)?;

        channel
            .queue_declare(
                QUEUE_NAME,
                QueueDeclareOptions { durable: true, ..QueueDeclareOptions::default() },
                FieldTable::default(),
            )
            .await
            .map_err(|source| PublishError::Declare { queue: QUEUE_NAME, source })?;

        channel
            .basic_publish(
                "",
                QUEUE_NAME,
                BasicPublishOptions::default(),
                payload,
                BasicProperties::default().with_delivery_mode(PERSISTENT),
            )
            .await
            .map_err(PublishError::Publish)?;

        Ok(())
    }
}

#[async_trait]
impl RecordPublisher for RabbitMqPublisher {
    async fn publish(&self, record: &WeatherRecord) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(record)?;

        let conn = Connection::connect(&self.url, ConnectionProperties::default())
            .await
            .map_err(PublishError::Connect)?;

        let result = self.publish_on(&conn, &payload).await;

        // Release the connection unconditionally; a close failure must not
        // mask the publish outcome.
        // 200 = reply-success
        if let Err(close_err) = conn.close(200, "").await {
            debug!("error closing broker connection: {close_err}");
        }

        result
    }
}
