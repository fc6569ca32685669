//! End-to-end adapter tests against a scripted NWS API and the in-memory host.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use nws_alerts::api::ApiResult;
use nws_alerts::feedback::{EVENT_TYPE_EXISTS, EVENT_TYPE_OPTION};
use nws_alerts::plugin::{run_module_with, FeedbackRequest, Host, InstanceStatus, MemoryHost};
use nws_alerts::{AlertApi, AlertsConfig, AlertsInstance, ApiError, LocationType};
use serde_json::{json, Value};
use tokio::sync::watch;

// ── Scripted API ─────────────────────────────────────────────────────

/// Serves queued alert payloads in order; the last one repeats.
#[derive(Default)]
struct ScriptedApi {
    zone: Option<String>,
    alerts: Mutex<VecDeque<Option<Value>>>,
}

impl ScriptedApi {
    fn with_zone(zone: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            ..Self::default()
        }
    }

    fn then(self, payload: Option<Value>) -> Self {
        self.alerts.lock().unwrap().push_back(payload);
        self
    }

    fn next_alerts(&self) -> Option<Value> {
        let mut queue = self.alerts.lock().unwrap();
        if queue.len() > 1 {
            queue.pop_front().flatten()
        } else {
            queue.front().cloned().flatten()
        }
    }
}

fn unavailable(url: &str) -> ApiError {
    ApiError::Status {
        status: 503,
        url: url.to_string(),
    }
}

impl AlertApi for ScriptedApi {
    async fn points(&self, latitude: f64, longitude: f64) -> ApiResult<Value> {
        match &self.zone {
            Some(zone) => Ok(json!({
                "properties": {
                    "forecastZone": format!("https://api.weather.gov/zones/forecast/{}", zone)
                }
            })),
            None => Err(unavailable(&format!("/points/{},{}", latitude, longitude))),
        }
    }

    async fn active_alerts(&self, zone_id: &str) -> ApiResult<Value> {
        self.next_alerts()
            .ok_or_else(|| unavailable(&format!("/alerts/active/zone/{}", zone_id)))
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn feature(id: &str, event: &str, headline: &str) -> Value {
    json!({
        "properties": {
            "id": id,
            "event": event,
            "headline": headline,
            "severity": "Severe",
            "areaDesc": "Washington, KS"
        }
    })
}

fn exists(event_type: &str) -> FeedbackRequest {
    FeedbackRequest::new(EVENT_TYPE_EXISTS).with_option(EVENT_TYPE_OPTION, event_type)
}

fn instance(api: ScriptedApi) -> (AlertsInstance<ScriptedApi>, Arc<MemoryHost>) {
    let host = Arc::new(MemoryHost::new());
    let instance = AlertsInstance::with_api(Arc::new(api), host.clone() as Arc<dyn Host>);
    (instance, host)
}

async fn settle() {
    tokio::time::sleep(Duration::from_secs(1)).await;
}

// ── Scenarios ────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn alerts_appear_and_clear_across_polls() {
    let api = ScriptedApi::default()
        .then(Some(json!({
            "features": [feature("urn:1", "Tornado Warning", "Tornado Warning until 5 PM")]
        })))
        .then(Some(json!({"features": []})));
    let (mut instance, host) = instance(api);

    instance
        .start(AlertsConfig {
            location_type: LocationType::ZoneId,
            zone_id: " KSZ009 ".into(),
            event_types: vec!["TornadoWarning".into(), "FloodWarning".into()],
            ..AlertsConfig::default()
        })
        .await;
    settle().await;

    assert_eq!(host.status(), Some(InstanceStatus::Ok));
    assert_eq!(host.state().status_message.as_deref(), Some("Zone: KSZ009"));
    assert_eq!(host.variable("zoneid").as_deref(), Some("KSZ009"));
    assert_eq!(
        host.variable("alert_TornadoWarning_headline").as_deref(),
        Some("Tornado Warning until 5 PM")
    );
    assert_eq!(host.variable("alert_FloodWarning_id").as_deref(), Some(""));
    assert!(instance.evaluate_feedback(&exists("TornadoWarning")));
    assert!(!instance.evaluate_feedback(&exists("FloodWarning")));

    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(host.variable("alert_TornadoWarning_headline").as_deref(), Some(""));
    assert_eq!(host.variable("alert_TornadoWarning_areaDesc").as_deref(), Some(""));
    assert!(!instance.evaluate_feedback(&exists("TornadoWarning")));
    assert_eq!(host.status(), Some(InstanceStatus::Ok));
    assert!(host.state().feedback_checks >= 2);

    instance.shutdown().await;
    assert!(!instance.is_polling());
}

#[tokio::test(start_paused = true)]
async fn unselected_event_types_are_ignored_but_still_feed_back() {
    let api = ScriptedApi::with_zone("KSZ009").then(Some(json!({
        "features": [
            feature("urn:1", "Heat Advisory", "Hot"),
            feature("urn:2", "Tornado Warning", "Take cover")
        ]
    })));
    let (mut instance, host) = instance(api);

    instance
        .start(AlertsConfig {
            latitude: Some(39.7456),
            longitude: Some(-97.0892),
            event_types: vec!["TornadoWarning".into()],
            ..AlertsConfig::default()
        })
        .await;
    settle().await;

    assert_eq!(host.variable("zoneid").as_deref(), Some("KSZ009"));
    assert_eq!(host.variable("latitude").as_deref(), Some("39.7456"));
    assert_eq!(host.variable("alert_TornadoWarning_id").as_deref(), Some("urn:2"));
    assert_eq!(host.variable("alert_HeatAdvisory_id"), None);
    assert!(instance.evaluate_feedback(&exists("HeatAdvisory")));

    instance.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn failed_poll_keeps_last_known_alerts() {
    let api = ScriptedApi::default()
        .then(Some(json!({"features": [feature("urn:1", "Flood Warning", "Rising")]})))
        .then(None);
    let (mut instance, host) = instance(api);

    instance
        .start(AlertsConfig {
            location_type: LocationType::ZoneId,
            zone_id: "MOZ041".into(),
            event_types: vec!["FloodWarning".into()],
            ..AlertsConfig::default()
        })
        .await;
    settle().await;
    tokio::time::sleep(Duration::from_secs(120)).await;

    assert_eq!(host.variable("alert_FloodWarning_headline").as_deref(), Some("Rising"));
    assert!(instance.evaluate_feedback(&exists("FloodWarning")));
    assert_eq!(host.status(), Some(InstanceStatus::Ok));
    assert_eq!(host.state().value_updates, 2);

    instance.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn malformed_payload_clears_values() {
    let api = ScriptedApi::default()
        .then(Some(json!({"features": [feature("urn:1", "Flood Warning", "Rising")]})))
        .then(Some(json!({"title": "no features here"})));
    let (mut instance, host) = instance(api);

    instance
        .start(AlertsConfig {
            location_type: LocationType::ZoneId,
            zone_id: "MOZ041".into(),
            event_types: vec!["FloodWarning".into()],
            ..AlertsConfig::default()
        })
        .await;
    settle().await;
    assert!(instance.evaluate_feedback(&exists("FloodWarning")));

    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(host.variable("alert_FloodWarning_id").as_deref(), Some(""));
    assert!(!instance.evaluate_feedback(&exists("FloodWarning")));

    instance.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn unresolvable_coordinates_fail_without_polling() {
    let (mut instance, host) = instance(ScriptedApi::default());

    instance
        .start(AlertsConfig {
            latitude: Some(10.0),
            longitude: Some(10.0),
            ..AlertsConfig::default()
        })
        .await;
    settle().await;

    let state = host.state();
    assert_eq!(state.status, Some(InstanceStatus::ConnectionFailure));
    assert_eq!(state.status_message.as_deref(), Some("Zone resolution failed"));
    assert_eq!(
        state.status_history,
        vec![
            InstanceStatus::Connecting,
            InstanceStatus::Connecting,
            InstanceStatus::ConnectionFailure
        ]
    );
    assert!(!instance.is_polling());
    assert!(!instance.evaluate_feedback(&exists("TornadoWarning")));
}

#[tokio::test(start_paused = true)]
async fn zone_id_with_path_characters_is_rejected() {
    let api = ScriptedApi::default().then(Some(json!({"features": []})));
    let (mut instance, host) = instance(api);

    instance
        .start(AlertsConfig {
            location_type: LocationType::ZoneId,
            zone_id: "KSZ009/../../points".into(),
            ..AlertsConfig::default()
        })
        .await;
    settle().await;

    assert_eq!(host.status(), Some(InstanceStatus::ConnectionFailure));
    assert_eq!(
        host.state().status_message.as_deref(),
        Some("Zone ID \"KSZ009/../../points\" must be alphanumeric")
    );
    assert_eq!(host.variable("zoneid"), None);
    assert!(!instance.is_polling());
}

#[tokio::test]
async fn runner_reports_invalid_config_and_shuts_down() {
    let host = Arc::new(MemoryHost::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(());

    let config = AlertsConfig {
        location_type: LocationType::ZoneId,
        zone_id: "   ".into(),
        ..AlertsConfig::default()
    };
    let run = tokio::spawn(run_module_with::<AlertsInstance>(
        config,
        host.clone() as Arc<dyn Host>,
        shutdown_rx,
    ));

    while host.status() != Some(InstanceStatus::ConnectionFailure) {
        tokio::task::yield_now().await;
    }
    assert_eq!(host.state().status_message.as_deref(), Some("Zone ID is required"));
    assert_eq!(host.state().feedback_definitions.len(), 1);
    assert_eq!(host.state().preset_definitions, Some(Vec::new()));

    shutdown_tx.send(()).unwrap();
    run.await.unwrap().unwrap();
}
