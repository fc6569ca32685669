//! Alert polling.
//!
//! [`poll_once`] is the single "fetch and process" operation. [`PollerHandle`]
//! owns the background task that runs it immediately and then on every tick
//! until stopped.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::api::{AlertApi, ApiError};
use crate::mapper::process_payload;
use crate::plugin::Host;
use crate::session::AlertSession;

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No zone is known yet; nothing was requested.
    NoZone,
    /// Another poll was still running; this one was skipped.
    InFlight,
    /// The request failed; previous values are kept.
    Failed,
    /// The payload was processed; carries the number of alerts in it.
    Processed { alerts: usize },
}

/// Fetch active alerts for the session's zone and publish them.
///
/// Failures are logged and leave the previous snapshot and variables
/// untouched. Status is never changed here.
pub async fn poll_once<A: AlertApi>(
    api: &A,
    host: &dyn Host,
    session: &AlertSession,
) -> PollOutcome {
    if session.zone_id().is_empty() {
        log::warn!("Zone ID not available yet");
        return PollOutcome::NoZone;
    }

    let Some(_guard) = session.try_begin_poll() else {
        log::debug!("Poll for zone {} already in flight, skipping", session.zone_id());
        return PollOutcome::InFlight;
    };

    match api.active_alerts(session.zone_id()).await {
        Ok(payload) => {
            process_payload(session, host, &payload);
            PollOutcome::Processed {
                alerts: session.snapshot().len(),
            }
        }
        Err(e @ ApiError::Status { .. }) => {
            log::error!("Fetch failed: {}", e);
            PollOutcome::Failed
        }
        Err(e) => {
            log::error!("Polling error: {}", e);
            PollOutcome::Failed
        }
    }
}

/// Owned handle to a running poller task.
///
/// Call [`PollerHandle::stop`] for a graceful shutdown. Dropping the handle
/// aborts the task, so no poll outlives its owner.
#[derive(Debug)]
pub struct PollerHandle {
    shutdown_tx: watch::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Spawn the polling loop. The first poll runs immediately.
    pub fn spawn<A: AlertApi>(
        api: Arc<A>,
        host: Arc<dyn Host>,
        session: Arc<AlertSession>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(());
        let task = tokio::spawn(run_poller(api, host, session, shutdown_rx));
        Self {
            shutdown_tx,
            task: Some(task),
        }
    }

    /// Signal the loop to stop, cancelling any in-flight request, and wait
    /// for the task to exit.
    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    log::error!("Poller task failed: {}", e);
                }
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_poller<A: AlertApi>(
    api: Arc<A>,
    host: Arc<dyn Host>,
    session: Arc<AlertSession>,
    mut shutdown: watch::Receiver<()>,
) {
    let period = session.config().poll_interval();
    log::info!(
        "Polling alerts for zone {} every {}s",
        session.zone_id(),
        period.as_secs()
    );

    // First tick fires immediately, which gives the startup poll.
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = interval.tick() => {
                tokio::select! {
                    biased;
                    _ = shutdown.changed() => break,
                    outcome = poll_once(&*api, &*host, &session) => {
                        log::debug!("Poll finished: {:?}", outcome);
                    }
                }
            }
        }
    }

    log::debug!("Poller for zone {} stopped", session.zone_id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::config::AlertsConfig;
    use crate::plugin::MemoryHost;
    use serde_json::json;
    use std::time::Duration;

    fn session(event_types: &[&str]) -> Arc<AlertSession> {
        let config = AlertsConfig {
            event_types: event_types.iter().map(|s| s.to_string()).collect(),
            ..AlertsConfig::default()
        };
        Arc::new(AlertSession::new(config, "KSZ009".to_string()))
    }

    fn tornado_payload() -> serde_json::Value {
        json!({"features": [{"properties": {"id": "urn:1", "event": "Tornado Warning"}}]})
    }

    #[tokio::test]
    async fn test_poll_once_processes_payload() {
        let api = MockApi::new().with_alerts(Ok(tornado_payload()));
        let host = MemoryHost::new();
        let session = session(&["TornadoWarning"]);

        let outcome = poll_once(&api, &host, &session).await;
        assert_eq!(outcome, PollOutcome::Processed { alerts: 1 });
        assert_eq!(host.variable("alert_TornadoWarning_id").as_deref(), Some("urn:1"));
        assert_eq!(*api.requested_zones.lock().unwrap(), vec!["KSZ009".to_string()]);
    }

    #[tokio::test]
    async fn test_poll_failure_keeps_previous_values() {
        let api = MockApi::new().with_alerts(Ok(tornado_payload()));
        api.push_alerts(Err(503));
        let host = MemoryHost::new();
        let session = session(&["TornadoWarning"]);

        assert_eq!(
            poll_once(&api, &host, &session).await,
            PollOutcome::Processed { alerts: 1 }
        );
        assert_eq!(poll_once(&api, &host, &session).await, PollOutcome::Failed);

        assert_eq!(host.variable("alert_TornadoWarning_id").as_deref(), Some("urn:1"));
        assert!(session.snapshot().contains_event_type("TornadoWarning"));
        assert_eq!(host.state().value_updates, 1);
    }

    #[tokio::test]
    async fn test_poll_without_zone_is_noop() {
        let api = MockApi::new();
        let host = MemoryHost::new();
        let session = AlertSession::new(AlertsConfig::default(), String::new());

        assert_eq!(poll_once(&api, &host, &session).await, PollOutcome::NoZone);
        assert_eq!(api.alert_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_poll_is_skipped() {
        let api = MockApi::new()
            .with_alerts(Ok(tornado_payload()))
            .with_alert_delay(Duration::from_secs(90));
        let host = MemoryHost::new();
        let session = session(&["TornadoWarning"]);

        let (first, second) = tokio::join!(
            poll_once(&api, &host, &session),
            poll_once(&api, &host, &session)
        );
        assert_eq!(first, PollOutcome::Processed { alerts: 1 });
        assert_eq!(second, PollOutcome::InFlight);
        assert_eq!(api.alert_calls(), 1);
        assert!(!session.is_polling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_runs_immediately_then_every_interval() {
        let api = Arc::new(MockApi::new().with_alerts(Ok(tornado_payload())));
        let host = Arc::new(MemoryHost::new());
        let session = session(&["TornadoWarning"]);

        let handle = PollerHandle::spawn(api.clone(), host.clone(), session.clone());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(api.alert_calls(), 1);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.alert_calls(), 2);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(api.alert_calls(), 4);

        handle.stop().await;
        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(api.alert_calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_in_flight_request() {
        let api = Arc::new(
            MockApi::new()
                .with_alerts(Ok(tornado_payload()))
                .with_alert_delay(Duration::from_secs(3600)),
        );
        let host = Arc::new(MemoryHost::new());
        let session = session(&["TornadoWarning"]);

        let handle = PollerHandle::spawn(api.clone(), host.clone(), session.clone());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(session.is_polling());

        handle.stop().await;
        assert!(!session.is_polling());
        assert_eq!(host.state().value_updates, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_aborts_task() {
        let api = Arc::new(MockApi::new().with_alerts(Ok(tornado_payload())));
        let host = Arc::new(MemoryHost::new());
        let session = session(&["TornadoWarning"]);

        let handle = PollerHandle::spawn(api.clone(), host.clone(), session.clone());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!handle.is_finished());
        drop(handle);

        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(api.alert_calls(), 1);
    }
}
