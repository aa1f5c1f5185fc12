use crate::{error::FetchError, model::WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// A source of current weather observations.
///
/// One call produces one fully populated [`WeatherRecord`] or an error,
/// never a partial record. Implementations carry their own fixed location;
/// the pipeline does not pass any per-call input.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<WeatherRecord, FetchError>;
}
