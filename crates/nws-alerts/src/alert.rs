//! Alert records and the validated alert snapshot.
//!
//! The NWS API returns GeoJSON. Only `features[].properties` is consumed,
//! and every property is kept as opaque text.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Errors from validating an alerts payload.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload has no features list")]
    MissingFeatures,
}

/// Normalise an event name into a catalog id.
///
/// Removes every character outside `[A-Za-z0-9]`.
pub fn slugify(label: &str) -> String {
    label.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// The 19 alert properties exposed as variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertField {
    Id,
    Status,
    MessageType,
    Category,
    Response,
    Severity,
    Certainty,
    Urgency,
    AreaDesc,
    Sent,
    Effective,
    Onset,
    Expires,
    Ends,
    Headline,
    Description,
    Instruction,
    Web,
    SenderName,
}

impl AlertField {
    pub const ALL: [AlertField; 19] = [
        AlertField::Id,
        AlertField::Status,
        AlertField::MessageType,
        AlertField::Category,
        AlertField::Response,
        AlertField::Severity,
        AlertField::Certainty,
        AlertField::Urgency,
        AlertField::AreaDesc,
        AlertField::Sent,
        AlertField::Effective,
        AlertField::Onset,
        AlertField::Expires,
        AlertField::Ends,
        AlertField::Headline,
        AlertField::Description,
        AlertField::Instruction,
        AlertField::Web,
        AlertField::SenderName,
    ];

    /// Property name on the wire, also used as the variable id suffix.
    pub fn key(self) -> &'static str {
        match self {
            AlertField::Id => "id",
            AlertField::Status => "status",
            AlertField::MessageType => "messageType",
            AlertField::Category => "category",
            AlertField::Response => "response",
            AlertField::Severity => "severity",
            AlertField::Certainty => "certainty",
            AlertField::Urgency => "urgency",
            AlertField::AreaDesc => "areaDesc",
            AlertField::Sent => "sent",
            AlertField::Effective => "effective",
            AlertField::Onset => "onset",
            AlertField::Expires => "expires",
            AlertField::Ends => "ends",
            AlertField::Headline => "headline",
            AlertField::Description => "description",
            AlertField::Instruction => "instruction",
            AlertField::Web => "web",
            AlertField::SenderName => "senderName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlertField::Id => "Alert ID",
            AlertField::Status => "Alert Status",
            AlertField::MessageType => "Alert Message Type",
            AlertField::Category => "Alert Category",
            // Shelter, Evacuate, ...
            AlertField::Response => "Alert Response",
            AlertField::Severity => "Alert Severity",
            AlertField::Certainty => "Alert Certainty",
            AlertField::Urgency => "Alert Urgency",
            AlertField::AreaDesc => "Alert Area Description",
            AlertField::Sent => "Alert Sent Time",
            AlertField::Effective => "Alert Effective Time",
            AlertField::Onset => "Alert Onset Time",
            AlertField::Expires => "Alert Expiry Time",
            AlertField::Ends => "Alert End Time",
            AlertField::Headline => "Alert Headline",
            AlertField::Description => "Alert Description",
            AlertField::Instruction => "Alert Instruction",
            AlertField::Web => "Alert Web Link",
            AlertField::SenderName => "Alert Sender Name",
        }
    }
}

/// Variable id for one field of one event type: `alert_<eventType>_<field>`.
pub fn variable_id(event_type: &str, field: AlertField) -> String {
    format!("alert_{}_{}", event_type, field.key())
}

/// Strings pass through, null becomes empty, anything else keeps its JSON text.
fn opaque_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// One alert, as found in `features[].properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertRecord {
    #[serde(deserialize_with = "opaque_text")]
    pub id: String,
    #[serde(deserialize_with = "opaque_text")]
    pub event: String,
    #[serde(deserialize_with = "opaque_text")]
    pub status: String,
    #[serde(deserialize_with = "opaque_text")]
    pub message_type: String,
    #[serde(deserialize_with = "opaque_text")]
    pub category: String,
    #[serde(deserialize_with = "opaque_text")]
    pub response: String,
    #[serde(deserialize_with = "opaque_text")]
    pub severity: String,
    #[serde(deserialize_with = "opaque_text")]
    pub certainty: String,
    #[serde(deserialize_with = "opaque_text")]
    pub urgency: String,
    #[serde(deserialize_with = "opaque_text")]
    pub area_desc: String,
    #[serde(deserialize_with = "opaque_text")]
    pub sent: String,
    #[serde(deserialize_with = "opaque_text")]
    pub effective: String,
    #[serde(deserialize_with = "opaque_text")]
    pub onset: String,
    #[serde(deserialize_with = "opaque_text")]
    pub expires: String,
    #[serde(deserialize_with = "opaque_text")]
    pub ends: String,
    #[serde(deserialize_with = "opaque_text")]
    pub headline: String,
    #[serde(deserialize_with = "opaque_text")]
    pub description: String,
    #[serde(deserialize_with = "opaque_text")]
    pub instruction: String,
    #[serde(deserialize_with = "opaque_text")]
    pub web: String,
    #[serde(deserialize_with = "opaque_text")]
    pub sender_name: String,
}

impl AlertRecord {
    pub fn get(&self, field: AlertField) -> &str {
        match field {
            AlertField::Id => &self.id,
            AlertField::Status => &self.status,
            AlertField::MessageType => &self.message_type,
            AlertField::Category => &self.category,
            AlertField::Response => &self.response,
            AlertField::Severity => &self.severity,
            AlertField::Certainty => &self.certainty,
            AlertField::Urgency => &self.urgency,
            AlertField::AreaDesc => &self.area_desc,
            AlertField::Sent => &self.sent,
            AlertField::Effective => &self.effective,
            AlertField::Onset => &self.onset,
            AlertField::Expires => &self.expires,
            AlertField::Ends => &self.ends,
            AlertField::Headline => &self.headline,
            AlertField::Description => &self.description,
            AlertField::Instruction => &self.instruction,
            AlertField::Web => &self.web,
            AlertField::SenderName => &self.sender_name,
        }
    }

    /// Catalog id this alert maps onto.
    pub fn event_type_id(&self) -> String {
        slugify(&self.event)
    }
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<AlertRecord>,
}

/// The latest set of alerts returned for a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertSnapshot {
    records: Vec<AlertRecord>,
}

impl AlertSnapshot {
    pub fn new(records: Vec<AlertRecord>) -> Self {
        Self { records }
    }

    /// Validate a raw alerts payload.
    ///
    /// Fails only if `features` is absent or not a list. Individual features
    /// without a usable `properties` object are skipped.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let features = payload
            .get("features")
            .and_then(Value::as_array)
            .ok_or(PayloadError::MissingFeatures)?;

        let mut records = Vec::with_capacity(features.len());
        for (index, feature) in features.iter().enumerate() {
            match Feature::deserialize(feature) {
                Ok(Feature {
                    properties: Some(record),
                }) => records.push(record),
                Ok(Feature { properties: None }) => {
                    log::warn!("Skipping alert feature {} without properties", index);
                }
                Err(e) => {
                    log::warn!("Skipping malformed alert feature {}: {}", index, e);
                }
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[AlertRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any alert's slugified event name equals `event_type`.
    pub fn contains_event_type(&self, event_type: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.event_type_id() == event_type)
    }
}
