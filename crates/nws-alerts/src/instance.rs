//! Adapter lifecycle and connection status.
//!
//! `Connecting → Ok` once the zone is known, `Connecting → ConnectionFailure`
//! on any init error. `Ok` is kept for the life of the session; poll
//! failures never change it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{AlertApi, NwsClient};
use crate::config::{AlertsConfig, ConfigError, LocationType, DEFAULT_API_BASE_URL};
use crate::feedback;
use crate::module_metadata;
use crate::plugin::{
    ConfigField, FeedbackRequest, Host, InstanceStatus, Module, ModuleError, ModuleMetadata,
    VariableValues,
};
use crate::poller::{poll_once, PollOutcome, PollerHandle};
use crate::registry::{self, LATITUDE_VARIABLE, LONGITUDE_VARIABLE, ZONE_VARIABLE};
use crate::session::AlertSession;
use crate::zone;

/// Errors that abort initialisation.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Zone resolution failed")]
    ResolutionFailed,

    #[error("HTTP client error: {0}")]
    Client(#[from] crate::api::ApiError),
}

/// One configured alert adapter bound to a host.
pub struct AlertsInstance<A: AlertApi = NwsClient> {
    api: Arc<A>,
    host: Arc<dyn Host>,
    session: Option<Arc<AlertSession>>,
    poller: Option<PollerHandle>,
}

impl<A: AlertApi> AlertsInstance<A> {
    pub fn with_api(api: Arc<A>, host: Arc<dyn Host>) -> Self {
        Self {
            api,
            host,
            session: None,
            poller: None,
        }
    }

    /// Current session, once the zone has been resolved.
    pub fn session(&self) -> Option<&Arc<AlertSession>> {
        self.session.as_ref()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|poller| !poller.is_finished())
    }

    /// Initialise against `config`, replacing any previous session.
    ///
    /// Errors are reported to the host as `ConnectionFailure` and no
    /// polling starts until the next call.
    pub async fn start(&mut self, config: AlertsConfig) {
        self.shutdown().await;

        self.host.update_status(InstanceStatus::Connecting, None);
        self.host
            .set_feedback_definitions(registry::feedback_definitions());
        self.host
            .set_preset_definitions(registry::preset_definitions());

        if let Err(e) = self.connect(config).await {
            log::error!("Init failed: {}", e);
            self.host
                .update_status(InstanceStatus::ConnectionFailure, Some(e.to_string().as_str()));
        }
    }

    async fn connect(&mut self, config: AlertsConfig) -> Result<(), InitError> {
        config.validate()?;
        for unknown in config.unknown_event_types() {
            log::warn!("Event type {} is not in the catalog", unknown);
        }

        let zone_id = match config.location_type {
            LocationType::LatLong => {
                let (latitude, longitude) =
                    config.coordinates().ok_or(ConfigError::MissingCoordinates)?;
                self.host.update_status(
                    InstanceStatus::Connecting,
                    Some("Resolving zone from lat/lon..."),
                );
                self.host.set_variable_values(VariableValues::from([
                    (LATITUDE_VARIABLE.to_string(), latitude.to_string()),
                    (LONGITUDE_VARIABLE.to_string(), longitude.to_string()),
                ]));

                zone::resolve_zone(&*self.api, latitude, longitude)
                    .await
                    .ok_or(InitError::ResolutionFailed)?
            }
            LocationType::ZoneId => config.zone_id.trim().to_string(),
        };

        self.host.set_variable_values(VariableValues::from([(
            ZONE_VARIABLE.to_string(),
            zone_id.clone(),
        )]));
        self.host
            .update_status(InstanceStatus::Ok, Some(format!("Zone: {}", zone_id).as_str()));

        log::debug!("Creating variables based on selected event types");
        self.host
            .set_variable_definitions(registry::variable_definitions(&config));

        let session = Arc::new(AlertSession::new(config, zone_id));
        self.poller = Some(PollerHandle::spawn(
            Arc::clone(&self.api),
            Arc::clone(&self.host),
            Arc::clone(&session),
        ));
        self.session = Some(session);
        Ok(())
    }

    /// Stop polling and drop the session.
    pub async fn shutdown(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop().await;
        }
        self.session = None;
    }

    /// Run one poll outside the schedule.
    pub async fn refresh(&self) -> PollOutcome {
        match &self.session {
            Some(session) => poll_once(&*self.api, &*self.host, session).await,
            None => {
                log::warn!("Zone ID not available yet");
                PollOutcome::NoZone
            }
        }
    }

    pub fn evaluate_feedback(&self, request: &FeedbackRequest) -> bool {
        feedback::evaluate(self.session.as_deref(), request)
    }
}

#[async_trait]
impl Module for AlertsInstance<NwsClient> {
    type Config = AlertsConfig;

    fn metadata() -> ModuleMetadata {
        module_metadata!(endpoints: &[DEFAULT_API_BASE_URL])
    }

    fn config_fields() -> Vec<ConfigField> {
        registry::config_fields()
    }

    /// Read once by the runner; later `verbose` changes only affect the
    /// info-level payload dump.
    fn log_filter(config: &AlertsConfig) -> &'static str {
        if config.verbose {
            "info,nws_alerts=debug"
        } else {
            "info"
        }
    }

    fn new(host: Arc<dyn Host>, config: &AlertsConfig) -> Result<Self, ModuleError> {
        let client = NwsClient::from_config(config).map_err(|e| ModuleError::Init(e.to_string()))?;
        Ok(Self::with_api(Arc::new(client), host))
    }

    async fn init(&mut self, config: AlertsConfig) {
        self.start(config).await;
    }

    async fn config_updated(&mut self, config: AlertsConfig) {
        match NwsClient::from_config(&config) {
            Ok(client) => {
                self.shutdown().await;
                self.api = Arc::new(client);
                self.start(config).await;
            }
            Err(e) => {
                self.shutdown().await;
                let e = InitError::from(e);
                log::error!("Init failed: {}", e);
                self.host
                    .update_status(InstanceStatus::ConnectionFailure, Some(e.to_string().as_str()));
            }
        }
    }

    async fn destroy(&mut self) {
        self.shutdown().await;
    }

    fn evaluate_feedback(&self, request: &FeedbackRequest) -> bool {
        AlertsInstance::evaluate_feedback(self, request)
    }
}
