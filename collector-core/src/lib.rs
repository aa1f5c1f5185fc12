//! Core library for the weather collector daemon.
//!
//! This crate defines:
//! - Configuration read once from the environment at startup
//! - The canonical `WeatherRecord` and its normalization rules
//! - Abstraction over the weather source and the record publisher
//! - The per-tick pipeline and the fixed-interval scheduler
//!
//! It is used by `collector-daemon`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod publisher;
pub mod scheduler;
pub mod source;

pub use config::Config;
pub use error::{FetchError, PublishError};
pub use model::{Condition, WeatherRecord};
pub use pipeline::Pipeline;
pub use publisher::{RecordPublisher, rabbitmq::RabbitMqPublisher};
pub use scheduler::Scheduler;
pub use source::{WeatherSource, openmeteo::OpenMeteoSource};
