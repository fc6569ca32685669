//! Per-initialisation adapter state.
//!
//! A session is created once the zone is known and dropped on teardown or
//! reconfiguration. The poller is its only writer; feedback evaluation reads
//! it. The lock is held only for short synchronous sections.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::alert::AlertSnapshot;
use crate::config::AlertsConfig;
use crate::plugin::VariableValues;

#[derive(Debug, Default)]
struct SessionState {
    snapshot: Arc<AlertSnapshot>,
    values: VariableValues,
}

#[derive(Debug)]
pub struct AlertSession {
    config: AlertsConfig,
    zone_id: String,
    state: Mutex<SessionState>,
    polling: AtomicBool,
}

/// Marks a poll as in flight until dropped.
#[derive(Debug)]
pub struct PollGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for PollGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl AlertSession {
    pub fn new(config: AlertsConfig, zone_id: String) -> Self {
        Self {
            config,
            zone_id,
            state: Mutex::new(SessionState::default()),
            polling: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &AlertsConfig {
        &self.config
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Latest alert snapshot; empty until the first successful poll.
    pub fn snapshot(&self) -> Arc<AlertSnapshot> {
        Arc::clone(&self.lock().snapshot)
    }

    /// Latest variable values pushed to the host.
    pub fn values(&self) -> VariableValues {
        self.lock().values.clone()
    }

    /// Swap in a new snapshot and its variable map.
    pub fn replace(&self, snapshot: AlertSnapshot, values: VariableValues) {
        let mut state = self.lock();
        state.snapshot = Arc::new(snapshot);
        state.values = values;
    }

    /// Claim the poll slot, or `None` if a poll is already in flight.
    pub fn try_begin_poll(&self) -> Option<PollGuard<'_>> {
        self.polling
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PollGuard {
                flag: &self.polling,
            })
    }

    pub fn is_polling(&self) -> bool {
        self.polling.load(Ordering::Acquire)
    }
}
