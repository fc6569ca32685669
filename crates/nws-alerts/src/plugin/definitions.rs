//! Descriptor types exchanged with the host.
//!
//! These mirror the host's registries: variables are flat string values,
//! feedbacks are boolean predicates evaluated on demand, and config fields
//! describe the form the host renders for the module configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Bulk variable update: variable id → value.
pub type VariableValues = BTreeMap<String, String>;

/// Connection status reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    Connecting,
    Ok,
    ConnectionFailure,
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InstanceStatus::Connecting => "connecting",
            InstanceStatus::Ok => "ok",
            InstanceStatus::ConnectionFailure => "connection_failure",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDefinition {
    pub variable_id: String,
    pub name: String,
}

impl VariableDefinition {
    pub fn new(variable_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            variable_id: variable_id.into(),
            name: name.into(),
        }
    }
}

/// A selectable entry in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
}

impl Choice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Pack an RGB triple into the host's 24-bit color representation.
pub const fn combine_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Boolean,
}

/// Style applied by the host while a boolean feedback is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackStyle {
    pub color: u32,
    pub bgcolor: u32,
}

/// Input the host shows when a feedback is placed on a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedbackOption {
    Dropdown {
        id: String,
        label: String,
        default: String,
        choices: Vec<Choice>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackDefinition {
    pub id: String,
    pub kind: FeedbackKind,
    pub name: String,
    pub description: String,
    pub options: Vec<FeedbackOption>,
    pub default_style: FeedbackStyle,
}

/// A single on-demand evaluation requested by the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedbackRequest {
    pub feedback_id: String,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl FeedbackRequest {
    pub fn new(feedback_id: impl Into<String>) -> Self {
        Self {
            feedback_id: feedback_id.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(id.into(), value.into());
        self
    }

    /// String value of an option, if present and a string.
    pub fn option_str(&self, id: &str) -> Option<&str> {
        self.options.get(id).and_then(Value::as_str)
    }
}

/// Ready-made control layout offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// Show a config field only while another field holds a given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleWhen {
    pub field: String,
    pub equals: String,
}

impl VisibleWhen {
    pub fn new(field: impl Into<String>, equals: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
        }
    }

    /// Evaluate against the current config, serialized as a JSON object.
    pub fn matches(&self, config: &Value) -> bool {
        config.get(&self.field).and_then(Value::as_str) == Some(self.equals.as_str())
    }
}

/// One entry of the configuration form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConfigField {
    StaticText {
        id: String,
        label: String,
        value: String,
        width: u8,
    },
    Dropdown {
        id: String,
        label: String,
        default: String,
        choices: Vec<Choice>,
        width: u8,
    },
    #[serde(rename = "textinput")]
    TextInput {
        id: String,
        label: String,
        default: String,
        width: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        visible_when: Option<VisibleWhen>,
    },
    #[serde(rename = "multidropdown")]
    MultiDropdown {
        id: String,
        label: String,
        default: Vec<String>,
        choices: Vec<Choice>,
        min_choices_for_search: usize,
        width: u8,
    },
    Checkbox {
        id: String,
        label: String,
        default: bool,
        width: u8,
    },
}

impl ConfigField {
    pub fn id(&self) -> &str {
        match self {
            ConfigField::StaticText { id, .. }
            | ConfigField::Dropdown { id, .. }
            | ConfigField::TextInput { id, .. }
            | ConfigField::MultiDropdown { id, .. }
            | ConfigField::Checkbox { id, .. } => id,
        }
    }

    /// Value the host stores for this field before the user edits it.
    ///
    /// Static text holds no value.
    pub fn default_value(&self) -> Option<Value> {
        match self {
            ConfigField::StaticText { .. } => None,
            ConfigField::Dropdown { default, .. } | ConfigField::TextInput { default, .. } => {
                Some(Value::String(default.clone()))
            }
            ConfigField::MultiDropdown { default, .. } => Some(Value::from(default.clone())),
            ConfigField::Checkbox { default, .. } => Some(Value::Bool(*default)),
        }
    }

    /// Whether the host should render this field for the given config.
    pub fn is_visible(&self, config: &Value) -> bool {
        match self {
            ConfigField::TextInput {
                visible_when: Some(cond),
                ..
            } => cond.matches(config),
            _ => true,
        }
    }
}
