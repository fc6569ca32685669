//! Flattens alert records into host variables.

use serde_json::Value;

use crate::alert::{variable_id, AlertField, AlertRecord, AlertSnapshot};
use crate::config::AlertsConfig;
use crate::plugin::{Host, VariableValues};
use crate::session::AlertSession;

/// Every field of every selected event type, set to the empty string.
pub fn reset_values(event_types: &[String]) -> VariableValues {
    let mut values = VariableValues::new();
    for event_type in event_types {
        for field in AlertField::ALL {
            values.insert(variable_id(event_type, field), String::new());
        }
    }
    values
}

/// Build the complete variable map for a set of records.
///
/// Starts from [`reset_values`] so alerts that disappeared clear their
/// variables. A record populates its event type when it has an id and an
/// event name and its slug is selected; later records overwrite earlier ones.
pub fn map_records(event_types: &[String], records: &[AlertRecord]) -> VariableValues {
    let mut values = reset_values(event_types);

    for record in records {
        if record.id.is_empty() || record.event.is_empty() {
            continue;
        }
        let event_type = record.event_type_id();
        if !event_types.iter().any(|selected| *selected == event_type) {
            continue;
        }

        log::info!("Alert triggered: {}", record.event);
        for field in AlertField::ALL {
            values.insert(variable_id(&event_type, field), record.get(field).to_string());
        }
    }

    values
}

/// Raw payloads are logged only in verbose mode. They go out at info so the
/// setting also applies after a reconfiguration, when the logger filter
/// chosen at startup no longer follows `verbose`.
fn payload_log_level(config: &AlertsConfig) -> Option<log::Level> {
    config.verbose.then_some(log::Level::Info)
}

/// Ingest a raw alerts payload into the session and push it to the host.
///
/// A payload without a feature list is treated as zero alerts: the reset
/// values are still published and the snapshot becomes empty.
pub fn process_payload(session: &AlertSession, host: &dyn Host, payload: &Value) {
    let config = session.config();
    if let Some(level) = payload_log_level(config) {
        log::log!(level, "Processing data: {}", payload);
    }

    let snapshot = match AlertSnapshot::from_payload(payload) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!(
                "No valid features found for Zone: {} ({})",
                session.zone_id(),
                e
            );
            AlertSnapshot::default()
        }
    };

    let values = map_records(&config.event_types, snapshot.records());
    session.replace(snapshot, values.clone());

    host.set_variable_values(values);
    host.check_feedbacks();
}
