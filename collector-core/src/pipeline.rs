use crate::{publisher::RecordPublisher, source::WeatherSource};
use tracing::{error, info};

/// One fetch → normalize → publish pass, with per-tick failure isolation.
///
/// Both failure classes are caught here and logged: a failed fetch skips the
/// publish for this tick, a failed publish drops this tick's record. Neither
/// propagates to the scheduler, so one bad tick never affects the next.
pub struct Pipeline {
    source: Box<dyn WeatherSource>,
    publisher: Box<dyn RecordPublisher>,
}

impl Pipeline {
    pub fn new(source: Box<dyn WeatherSource>, publisher: Box<dyn RecordPublisher>) -> Self {
        Self { source, publisher }
    }

    /// Run one tick to completion. Infallible by design: errors are logged
    /// and swallowed, never returned.
    pub async fn run_tick(&self) {
        let record = match self.source.fetch().await {
            Ok(record) => record,
            Err(e) => {
                error!("Error fetching weather, skipping publish for this tick: {e}");
                return;
            }
        };

        info!(
            "Fetched weather: {}°C, {}% humidity, {}",
            record.temperature, record.humidity, record.condition
        );

        match self.publisher.publish(&record).await {
            Ok(()) => info!("Sent weather record to queue"),
            Err(e) => error!("Error sending to queue, record dropped: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{FetchError, PublishError},
        model::{Condition, WeatherRecord},
    };
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    fn record() -> WeatherRecord {
        WeatherRecord {
            temperature: 21.7,
            humidity: 64,
            wind_speed: 5.0,
            condition: Condition::Clear,
            location: "São Paulo".to_string(),
            latitude: -23.5505,
            longitude: -46.6333,
            timestamp: "2026-08-23T12:00".to_string(),
        }
    }

    #[derive(Debug)]
    struct StubSource {
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl crate::source::WeatherSource for StubSource {
        async fn fetch(&self) -> Result<WeatherRecord, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(FetchError::EmptyHourlySeries)
            } else {
                Ok(record())
            }
        }
    }

    #[derive(Debug)]
    struct StubPublisher {
        fail: Arc<AtomicBool>,
        published: Arc<Mutex<Vec<WeatherRecord>>>,
        attempts: Arc<AtomicUsize>,
    }

    impl StubPublisher {
        fn new() -> Self {
            Self {
                fail: Arc::new(AtomicBool::new(false)),
                published: Arc::new(Mutex::new(Vec::new())),
                attempts: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl crate::publisher::RecordPublisher for StubPublisher {
        async fn publish(&self, record: &WeatherRecord) -> Result<(), PublishError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(PublishError::Serialize(serde_json::from_str::<()>("x").unwrap_err()));
            }
            self.published.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_tick_publishes_the_record() {
        let publisher = StubPublisher::new();
        let published = Arc::clone(&publisher.published);
        let pipeline = Pipeline::new(
            Box::new(StubSource { fail: false, calls: Arc::new(AtomicUsize::new(0)) }),
            Box::new(publisher),
        );

        pipeline.run_tick().await;

        let published = published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0], record());
    }

    #[tokio::test]
    async fn fetch_failure_skips_publish_entirely() {
        let publisher = StubPublisher::new();
        let attempts = Arc::clone(&publisher.attempts);
        let pipeline = Pipeline::new(
            Box::new(StubSource { fail: true, calls: Arc::new(AtomicUsize::new(0)) }),
            Box::new(publisher),
        );

        // Must complete without panicking and without touching the publisher.
        pipeline.run_tick().await;

        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn publish_failure_is_swallowed_and_next_tick_publishes() {
        let publisher = StubPublisher::new();
        let fail = Arc::clone(&publisher.fail);
        let attempts = Arc::clone(&publisher.attempts);
        let published = Arc::clone(&publisher.published);
        let pipeline = Pipeline::new(
            Box::new(StubSource { fail: false, calls: Arc::new(AtomicUsize::new(0)) }),
            Box::new(publisher),
        );

        fail.store(true, Ordering::SeqCst);
        pipeline.run_tick().await;
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(published.lock().unwrap().is_empty(), "failed publish must drop the record");

        // Broker back up: the next tick publishes normally.
        fail.store(false, Ordering::SeqCst);
        pipeline.run_tick().await;
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert_eq!(published.lock().unwrap().len(), 1);
    }
}
