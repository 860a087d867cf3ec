use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::output::OutputId;

/// Events emitted by the session controller and consumed by the host.
///
/// The host renders these as UI state, system notifications, or toasts.
/// All events are emitted with no controller lock held, so an observer may
/// call back into the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new session began recording to `output_id`.
    Started { output_id: OutputId },

    Paused,

    Resumed,

    /// The session ended. `auto_stopped` is true when the hard recording
    /// limit forced the stop rather than a user action.
    Stopped {
        output_id: OutputId,
        duration: Duration,
        auto_stopped: bool,
    },

    /// Recording has run past the battery warning threshold. Fired at most
    /// once per session.
    BatteryWarning,

    /// Recording will hit the hard limit soon. Fired at most once per
    /// session.
    TimeLimitWarning,

    /// A capture device failure was reported.
    Error { reason: String },
}
