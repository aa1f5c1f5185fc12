use crate::{error::PublishError, model::WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod rabbitmq;

/// Durable hand-off of one record to a message broker.
///
/// At-most-once semantics: a failed publish drops the record; callers do not
/// retry within the same tick.
#[async_trait]
pub trait RecordPublisher: Send + Sync + Debug {
    async fn publish(&self, record: &WeatherRecord) -> Result<(), PublishError>;
}
