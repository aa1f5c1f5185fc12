//! Binary crate for the weather collector daemon.
//!
//! This crate focuses on:
//! - Initializing logging
//! - Reading configuration from the environment
//! - Wiring the source, publisher, pipeline and scheduler, then running forever

use collector_core::{Config, OpenMeteoSource, Pipeline, RabbitMqPublisher, Scheduler};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;

    info!(
        "Scheduled weather collection for {} every {} minutes",
        config.location, config.interval_minutes
    );

    let source = OpenMeteoSource::new(config.latitude, config.longitude, config.location.clone());
    let publisher = RabbitMqPublisher::new(config.broker_url.clone());
    let pipeline = Pipeline::new(Box::new(source), Box::new(publisher));

    // Runs until the process is terminated externally.
    Scheduler::new(config.interval()).run(&pipeline).await;

    Ok(())
}
