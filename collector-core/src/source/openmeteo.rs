use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::FetchError,
    model::{Condition, WeatherRecord, round_to_tenth},
};

use super::WeatherSource;

const API_URL: &str = "https://api.open-meteo.com/v1/forecast";
const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation_probability";
const TIMEZONE: &str = "America/Sao_Paulo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches current conditions from the Open-Meteo forecast API.
///
/// Humidity is not part of Open-Meteo's current-conditions block, so it is
/// read from the last element of the hourly `relative_humidity_2m` series,
/// the most recent hour the source has data for. A lossy approximation of
/// "current humidity", kept deliberately.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    latitude: f64,
    longitude: f64,
    location: String,
    http: Client,
}

impl OpenMeteoSource {
    pub fn new(latitude: f64, longitude: f64, location: String) -> Self {
        Self { latitude, longitude, location, http: Client::new() }
    }

    async fn fetch_raw(&self) -> Result<OmResponse, FetchError> {
        let res = self
            .http
            .get(API_URL)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn record_from_response(&self, raw: OmResponse) -> Result<WeatherRecord, FetchError> {
        let humidity = *raw
            .hourly
            .relative_humidity_2m
            .last()
            .ok_or(FetchError::EmptyHourlySeries)?;

        Ok(WeatherRecord {
            temperature: round_to_tenth(raw.current_weather.temperature),
            humidity,
            wind_speed: round_to_tenth(raw.current_weather.windspeed),
            condition: Condition::from_code(raw.current_weather.weathercode),
            location: self.location.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            timestamp: raw.current_weather.time,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn fetch(&self) -> Result<WeatherRecord, FetchError> {
        let raw = self.fetch_raw().await?;
        self.record_from_response(raw)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u8,
    time: String,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    relative_humidity_2m: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current_weather: OmCurrentWeather,
    hourly: OmHourly,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Cut on a char boundary; a byte offset can land inside a multi-byte
    // UTF-8 sequence and slicing there panics.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
