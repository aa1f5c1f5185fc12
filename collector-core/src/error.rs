use thiserror::Error;

/// Failures while fetching or normalizing weather data.
///
/// All variants are caught at the pipeline boundary: a fetch failure skips
/// publishing for that tick and never propagates past the invocation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure, including the 10 second request timeout.
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather source returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Malformed body or missing expected sections (e.g. no `current_weather`).
    #[error("failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The hourly humidity series came back empty, so there is no
    /// "most recent hour" to read humidity from.
    #[error("weather response contained no hourly humidity samples")]
    EmptyHourlySeries,
}

/// Failures while handing a record off to the broker.
///
/// Like fetch errors, these are logged and swallowed per tick: the record is
/// dropped (at-most-once delivery) and the next tick proceeds normally.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to connect to broker: {0}")]
    Connect(#[source] lapin::Error),

    #[error("failed to open broker channel: {0}")]
    Channel(#[source] lapin::Error),

    #[error("failed to declare queue '{queue}': {source}")]
    Declare {
        queue: &'static str,
        #[source]
        source: lapin::Error,
    },

    #[error("failed to publish record: {0}")]
    Publish(#[source] lapin::Error),

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
