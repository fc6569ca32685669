//! Adapter configuration.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::catalog;

/// Default NWS API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.weather.gov";

/// Seconds between alert polls.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Errors from validating a configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Latitude and Longitude are required")]
    MissingCoordinates,
    #[error("Zone ID is required")]
    MissingZoneId,
    #[error("Zone ID {0:?} must be alphanumeric")]
    InvalidZoneId(String),
    #[error("poll_interval_secs must be greater than zero")]
    InvalidPollInterval,
}

/// How the alert zone is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    /// Resolve the zone from latitude/longitude.
    #[default]
    #[serde(rename = "latlong")]
    LatLong,
    /// Use a configured zone id directly.
    #[serde(rename = "zoneid")]
    ZoneId,
}

impl LocationType {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::LatLong => "latlong",
            LocationType::ZoneId => "zoneid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsConfig {
    #[serde(default)]
    pub location_type: LocationType,

    #[serde(default, deserialize_with = "optional_coordinate")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "optional_coordinate")]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub zone_id: String,

    /// Catalog ids to track.
    #[serde(default = "default_event_types")]
    pub event_types: Vec<String>,

    /// Log every raw payload at debug level.
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// NWS rejects requests without a User-Agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Outbound request timeout. No timeout when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Coordinates arrive as numbers from YAML and as text from the host form.
/// Blank text means "not set".
fn optional_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Option::<Coordinate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Coordinate::Number(value)) => Ok(Some(value)),
        Some(Coordinate::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid coordinate {:?}", text)))
        }
    }
}

fn default_event_types() -> Vec<String> {
    vec![catalog::default_event_type().to_string()]
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            location_type: LocationType::default(),
            latitude: None,
            longitude: None,
            zone_id: String::new(),
            event_types: default_event_types(),
            verbose: false,
            poll_interval_secs: default_poll_interval(),
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

impl AlertsConfig {
    /// Check that the authoritative location fields are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidPollInterval);
        }
        match self.location_type {
            LocationType::LatLong => {
                self.coordinates().ok_or(ConfigError::MissingCoordinates)?;
            }
            LocationType::ZoneId => {
                let zone_id = self.zone_id.trim();
                if zone_id.is_empty() {
                    return Err(ConfigError::MissingZoneId);
                }
                // Interpolated into the request path.
                if !zone_id.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(ConfigError::InvalidZoneId(zone_id.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Latitude and longitude, when both are set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Selected ids that are not in the catalog.
    pub fn unknown_event_types(&self) -> Vec<&str> {
        self.event_types
            .iter()
            .map(String::as_str)
            .filter(|id| catalog::find(id).is_none())
            .collect()
    }
}
