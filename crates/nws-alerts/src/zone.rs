//! Forecast zone resolution from latitude/longitude.

use serde::Deserialize;
use serde_json::Value;

use crate::api::AlertApi;

#[derive(Debug, Default, Deserialize)]
struct PointsResponse {
    #[serde(default)]
    properties: Option<PointsProperties>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointsProperties {
    #[serde(default)]
    forecast_zone: Option<String>,
}

/// Last path segment of a forecast zone URL.
///
/// `https://api.weather.gov/zones/forecast/KSZ009` → `KSZ009`
pub fn zone_from_forecast_url(url: &str) -> Option<String> {
    url.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Extract the zone id from a points response body.
pub fn zone_from_points(body: &Value) -> Option<String> {
    let response = PointsResponse::deserialize(body).ok()?;
    let url = response.properties?.forecast_zone?;
    zone_from_forecast_url(&url)
}

/// Resolve the forecast zone for a coordinate pair with a single request.
///
/// Returns `None` when the request fails or the response carries no zone;
/// the reason is logged here. No retry is attempted.
pub async fn resolve_zone<A: AlertApi>(api: &A, latitude: f64, longitude: f64) -> Option<String> {
    let body = match api.points(latitude, longitude).await {
        Ok(body) => body,
        Err(e) => {
            log::error!("Failed to resolve zone: {}", e);
            return None;
        }
    };

    let zone = zone_from_points(&body);
    if zone.is_none() {
        log::error!(
            "No forecast zone in points response for ({}, {})",
            latitude,
            longitude
        );
    }
    zone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[test]
    fn test_zone_from_forecast_url() {
        assert_eq!(
            zone_from_forecast_url("https://api.weather.gov/zones/forecast/ABC123").as_deref(),
            Some("ABC123")
        );
        assert_eq!(zone_from_forecast_url("KSZ009").as_deref(), Some("KSZ009"));
        assert_eq!(
            zone_from_forecast_url("https://api.weather.gov/zones/forecast/"),
            None
        );
        assert_eq!(zone_from_forecast_url(""), None);
    }

    #[test]
    fn test_zone_from_points() {
        let body = json!({
            "properties": {
                "gridId": "TOP",
                "forecastZone": "https://api.weather.gov/zones/forecast/ABC123"
            }
        });
        assert_eq!(zone_from_points(&body).as_deref(), Some("ABC123"));
    }

    #[test]
    fn test_zone_from_points_missing_field() {
        assert_eq!(zone_from_points(&json!({"properties": {}})), None);
        assert_eq!(zone_from_points(&json!({})), None);
        assert_eq!(zone_from_points(&json!({"properties": {"forecastZone": null}})), None);
        assert_eq!(zone_from_points(&json!({"properties": {"forecastZone": 7}})), None);
    }

    #[tokio::test]
    async fn test_resolve_zone_success() {
        let api = MockApi::new().with_points(Ok(json!({
            "properties": {"forecastZone": "https://api.weather.gov/zones/forecast/KSZ009"}
        })));
        assert_eq!(
            resolve_zone(&api, 39.7456, -97.0892).await.as_deref(),
            Some("KSZ009")
        );
        assert_eq!(api.points_calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_zone_http_failure() {
        let api = MockApi::new().with_points(Err(500));
        assert_eq!(resolve_zone(&api, 39.7456, -97.0892).await, None);
    }
}
