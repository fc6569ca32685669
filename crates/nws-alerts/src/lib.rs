//! National Weather Service alert adapter.
//!
//! Polls the NWS active-alerts endpoint for one forecast zone and exposes
//! the result to a device-control host:
//! - one variable per field per selected event type (`alert_<id>_<field>`)
//! - a boolean feedback telling whether an event type is active
//! - a configuration form driven by a static event-type catalog
//!
//! The zone is either configured directly or resolved once from
//! latitude/longitude.

pub mod alert;
pub mod api;
pub mod catalog;
pub mod config;
pub mod feedback;
pub mod instance;
pub mod mapper;
pub mod plugin;
pub mod poller;
pub mod registry;
pub mod session;
pub mod zone;

pub use alert::{slugify, AlertField, AlertRecord, AlertSnapshot, PayloadError};
pub use api::{AlertApi, ApiError, NwsClient};
pub use config::{AlertsConfig, ConfigError, LocationType};
pub use instance::{AlertsInstance, InitError};
pub use poller::{poll_once, PollOutcome, PollerHandle};
pub use session::AlertSession;
