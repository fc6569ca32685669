//! Variable, feedback, preset and config field descriptors.
//!
//! Everything here is derived from the static catalog and the current
//! configuration; nothing depends on fetched alerts.

use crate::alert::{variable_id, AlertField};
use crate::catalog;
use crate::config::{AlertsConfig, LocationType};
use crate::feedback::{EVENT_TYPE_EXISTS, EVENT_TYPE_OPTION};
use crate::plugin::{
    combine_rgb, Choice, ConfigField, FeedbackDefinition, FeedbackKind, FeedbackOption,
    FeedbackStyle, PresetDefinition, VariableDefinition, VisibleWhen,
};

pub const LATITUDE_VARIABLE: &str = "latitude";
pub const LONGITUDE_VARIABLE: &str = "longitude";
pub const ZONE_VARIABLE: &str = "zoneid";

/// Variables exposed for the given configuration.
pub fn variable_definitions(config: &AlertsConfig) -> Vec<VariableDefinition> {
    let mut variables = Vec::with_capacity(3 + config.event_types.len() * AlertField::ALL.len());

    if config.location_type == LocationType::LatLong {
        variables.push(VariableDefinition::new(LATITUDE_VARIABLE, "Latitude"));
        variables.push(VariableDefinition::new(LONGITUDE_VARIABLE, "Longitude"));
    }
    variables.push(VariableDefinition::new(ZONE_VARIABLE, "Zone ID"));

    for event_type in &config.event_types {
        let label = catalog::label_for(event_type);
        for field in AlertField::ALL {
            variables.push(VariableDefinition::new(
                variable_id(event_type, field),
                format!("{}: {}", label, field.label()),
            ));
        }
    }

    variables
}

pub fn feedback_definitions() -> Vec<FeedbackDefinition> {
    vec![FeedbackDefinition {
        id: EVENT_TYPE_EXISTS.to_string(),
        kind: FeedbackKind::Boolean,
        name: "Event Type Exists".to_string(),
        description: "If the event type exists in the zone".to_string(),
        options: vec![FeedbackOption::Dropdown {
            id: EVENT_TYPE_OPTION.to_string(),
            label: "Event Type".to_string(),
            default: catalog::default_event_type().to_string(),
            choices: catalog::choices(),
        }],
        default_style: FeedbackStyle {
            color: combine_rgb(255, 255, 255),
            bgcolor: combine_rgb(255, 0, 0),
        },
    }]
}

/// No presets are offered.
pub fn preset_definitions() -> Vec<PresetDefinition> {
    Vec::new()
}

/// Configuration form, in display order.
pub fn config_fields() -> Vec<ConfigField> {
    let latlong = LocationType::LatLong.as_str();
    let zoneid = LocationType::ZoneId.as_str();

    vec![
        ConfigField::StaticText {
            id: "info".to_string(),
            label: "Information".to_string(),
            value: "This module communicates with the National Weather Service API".to_string(),
            width: 12,
        },
        ConfigField::Dropdown {
            id: "location_type".to_string(),
            label: "Location Type".to_string(),
            default: latlong.to_string(),
            choices: vec![
                Choice::new(latlong, "Latitude/Longitude"),
                Choice::new(zoneid, "Zone ID"),
            ],
            width: 4,
        },
        ConfigField::TextInput {
            id: "latitude".to_string(),
            label: "Latitude".to_string(),
            default: String::new(),
            width: 4,
            visible_when: Some(VisibleWhen::new("location_type", latlong)),
        },
        ConfigField::TextInput {
            id: "longitude".to_string(),
            label: "Longitude".to_string(),
            default: String::new(),
            width: 4,
            visible_when: Some(VisibleWhen::new("location_type", latlong)),
        },
        ConfigField::TextInput {
            id: "zone_id".to_string(),
            label: "Zone ID".to_string(),
            default: String::new(),
            width: 4,
            visible_when: Some(VisibleWhen::new("location_type", zoneid)),
        },
        ConfigField::MultiDropdown {
            id: "event_types".to_string(),
            label: "Trigger on Event Types".to_string(),
            default: vec![catalog::default_event_type().to_string()],
            choices: catalog::choices(),
            min_choices_for_search: 1,
            width: 12,
        },
        ConfigField::StaticText {
            id: "hr1".to_string(),
            label: " ".to_string(),
            value: "<hr />".to_string(),
            width: 12,
        },
        ConfigField::Checkbox {
            id: "verbose".to_string(),
            label: "Enable Verbose Logging".to_string(),
            default: false,
            width: 4,
        },
    ]
}
