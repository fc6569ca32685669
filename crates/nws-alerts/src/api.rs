//! Raw reqwest client for the NWS API.
//!
//! Two GET requests are used: the points lookup (once, to find a forecast
//! zone) and the active alerts for a zone (on every poll). Responses are
//! returned as untyped JSON; validation happens at the ingestion boundary.

use serde_json::Value;
use std::future::Future;

use crate::config::AlertsConfig;

/// GeoJSON media type requested from the API.
const ACCEPT: &str = "application/geo+json";

/// Errors from NWS API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Abstraction over the NWS endpoints.
///
/// The adapter only depends on this trait, so tests run against a mock.
pub trait AlertApi: Send + Sync + 'static {
    /// `GET /points/{lat},{lon}`
    fn points(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = ApiResult<Value>> + Send;

    /// `GET /alerts/active/zone/{zone_id}`
    fn active_alerts(&self, zone_id: &str) -> impl Future<Output = ApiResult<Value>> + Send;
}

/// reqwest-backed [`AlertApi`].
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NwsClient {
    /// Build a client from the adapter configuration.
    pub fn from_config(config: &AlertsConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", self.base_url, latitude, longitude)
    }

    fn alerts_url(&self, zone_id: &str) -> String {
        format!("{}/alerts/active/zone/{}", self.base_url, zone_id)
    }

    async fn get_json(&self, url: String) -> ApiResult<Value> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: Value = response.json().await?;
        Ok(body)
    }
}

impl AlertApi for NwsClient {
    async fn points(&self, latitude: f64, longitude: f64) -> ApiResult<Value> {
        self.get_json(self.points_url(latitude, longitude)).await
    }

    async fn active_alerts(&self, zone_id: &str) -> ApiResult<Value> {
        self.get_json(self.alerts_url(zone_id)).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_config() {
        let config = AlertsConfig {
            api_base_url: "https://api.weather.gov/".to_string(),
            ..AlertsConfig::default()
        };
        let client = NwsClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://api.weather.gov");
        assert_eq!(
            client.points_url(39.7456, -97.0892),
            "https://api.weather.gov/points/39.7456,-97.0892"
        );
        assert_eq!(
            client.alerts_url("KSZ009"),
            "https://api.weather.gov/alerts/active/zone/KSZ009"
        );
    }

    #[test]
    fn test_client_with_timeout_builds() {
        let config = AlertsConfig {
            request_timeout_secs: Some(5),
            ..AlertsConfig::default()
        };
        assert!(NwsClient::from_config(&config).is_ok());
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 503,
            url: "https://api.weather.gov/alerts/active/zone/KSZ009".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request to https://api.weather.gov/alerts/active/zone/KSZ009 failed with status 503"
        );
    }
}
