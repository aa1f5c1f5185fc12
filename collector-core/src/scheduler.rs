use crate::pipeline::Pipeline;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Drives the pipeline at a fixed cadence: once immediately at startup, then
/// once per interval, strictly sequentially.
///
/// Invocations never overlap. If a tick's work runs longer than the interval,
/// the next invocation starts as soon as the current one completes and the
/// cadence is re-anchored from that point (`MissedTickBehavior::Delay`), so a
/// slow tick degrades the cadence instead of piling up work.
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run forever. The pipeline swallows its own errors, so this loop has no
    /// failure path; it ends only with the process.
    pub async fn run(&self, pipeline: &Pipeline) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // The first tick completes immediately.
            ticker.tick().await;
            debug!("Tick due, running pipeline");
            pipeline.run_tick().await;
        }
    }
}
