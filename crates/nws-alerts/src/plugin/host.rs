//! Host integration surface.
//!
//! A module never talks to the host runtime directly. It reports through
//! the [`Host`] trait, which keeps modules testable and lets the standalone
//! runner substitute [`MemoryHost`] for a real device-control host.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::definitions::{
    FeedbackDefinition, InstanceStatus, PresetDefinition, VariableDefinition, VariableValues,
};

/// Registries and sinks exposed by the host runtime.
///
/// Implementations must be cheap to call from any thread; modules call
/// them from the polling task as well as from lifecycle hooks.
pub trait Host: Send + Sync + 'static {
    /// Report the module's connection status with an optional detail line.
    fn update_status(&self, status: InstanceStatus, message: Option<&str>);

    /// Replace the full set of variable definitions.
    fn set_variable_definitions(&self, definitions: Vec<VariableDefinition>);

    /// Merge a bulk update into the variable values.
    fn set_variable_values(&self, values: VariableValues);

    /// Replace the full set of feedback definitions.
    fn set_feedback_definitions(&self, definitions: Vec<FeedbackDefinition>);

    /// Replace the full set of preset definitions.
    fn set_preset_definitions(&self, presets: Vec<PresetDefinition>);

    /// Ask the host to re-evaluate every registered feedback.
    fn check_feedbacks(&self);
}

/// Everything a [`MemoryHost`] has been told so far.
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub status: Option<InstanceStatus>,
    pub status_message: Option<String>,
    pub status_history: Vec<InstanceStatus>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub variable_values: VariableValues,
    pub value_updates: usize,
    pub feedback_definitions: Vec<FeedbackDefinition>,
    pub preset_definitions: Option<Vec<PresetDefinition>>,
    pub feedback_checks: usize,
}

/// In-process host that keeps registries in memory and logs changes.
///
/// Used by the standalone binary and by tests.
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: Mutex<HostState>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current host state.
    pub fn state(&self) -> HostState {
        self.lock().clone()
    }

    pub fn status(&self) -> Option<InstanceStatus> {
        self.lock().status
    }

    pub fn variable(&self, variable_id: &str) -> Option<String> {
        self.lock().variable_values.get(variable_id).cloned()
    }
}

impl Host for MemoryHost {
    fn update_status(&self, status: InstanceStatus, message: Option<&str>) {
        match message {
            Some(msg) => log::info!("Status: {} ({})", status, msg),
            None => log::info!("Status: {}", status),
        }
        let mut state = self.lock();
        state.status = Some(status);
        state.status_message = message.map(str::to_string);
        state.status_history.push(status);
    }

    fn set_variable_definitions(&self, definitions: Vec<VariableDefinition>) {
        log::debug!("Registered {} variable definitions", definitions.len());
        self.lock().variable_definitions = definitions;
    }

    fn set_variable_values(&self, values: VariableValues) {
        let mut state = self.lock();
        for (id, value) in values {
            if !value.is_empty() {
                log::debug!("{} = {}", id, value);
            }
            state.variable_values.insert(id, value);
        }
        state.value_updates += 1;
    }

    fn set_feedback_definitions(&self, definitions: Vec<FeedbackDefinition>) {
        log::debug!("Registered {} feedback definitions", definitions.len());
        self.lock().feedback_definitions = definitions;
    }

    fn set_preset_definitions(&self, presets: Vec<PresetDefinition>) {
        log::debug!("Registered {} preset definitions", presets.len());
        self.lock().preset_definitions = Some(presets);
    }

    fn check_feedbacks(&self) {
        self.lock().feedback_checks += 1;
    }
}
