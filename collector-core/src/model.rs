use serde::{Deserialize, Serialize};

/// Coarse sky condition derived from the source's integer weather code.
///
/// The upstream code space is much finer grained (fog, drizzle, snow, ...);
/// collapsing it to three buckets is an intentional lossy mapping, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
}

impl Condition {
    /// Total mapping: every code lands in exactly one bucket.
    pub fn from_code(code: u8) -> Self {
        if code < 3 {
            Condition::Clear
        } else if code < 50 {
            Condition::Cloudy
        } else {
            Condition::Rain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical record published once per tick.
///
/// Serialized field names are the wire contract with downstream consumers
/// (`windSpeed`, not `wind_speed`). Every field is required: the collector
/// either produces a fully populated record or fails before constructing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub condition: Condition,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Source-provided timestamp, passed through opaquely (never reparsed).
    pub timestamp: String,
}

/// Round to one fractional digit, e.g. `21.666` -> `21.7`.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
