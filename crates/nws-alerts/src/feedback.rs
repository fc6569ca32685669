//! On-demand feedback evaluation.

use crate::alert::AlertSnapshot;
use crate::plugin::FeedbackRequest;
use crate::session::AlertSession;

/// Feedback id: "does an alert of the chosen event type exist".
pub const EVENT_TYPE_EXISTS: &str = "eventTypeExists";

/// Option id carrying the catalog id to look for.
pub const EVENT_TYPE_OPTION: &str = "eventType";

/// True iff the snapshot holds an alert whose slug equals `event_type`.
pub fn event_type_exists(snapshot: Option<&AlertSnapshot>, event_type: &str) -> bool {
    snapshot.is_some_and(|snapshot| snapshot.contains_event_type(event_type))
}

/// Evaluate a host feedback request against the current session.
///
/// Unknown feedback ids and missing options evaluate to false.
pub fn evaluate(session: Option<&AlertSession>, request: &FeedbackRequest) -> bool {
    match request.feedback_id.as_str() {
        EVENT_TYPE_EXISTS => {
            let Some(event_type) = request.option_str(EVENT_TYPE_OPTION) else {
                log::warn!("Feedback {} has no {} option", EVENT_TYPE_EXISTS, EVENT_TYPE_OPTION);
                return false;
            };
            let snapshot = session.map(AlertSession::snapshot);
            event_type_exists(snapshot.as_deref(), event_type)
        }
        other => {
            log::warn!("Unknown feedback: {}", other);
            false
        }
    }
}
