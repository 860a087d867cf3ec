use serde::{Deserialize, Serialize};

/// Recorder session state machine.
///
/// State transitions:
/// ```text
/// idle → recording ↔ paused
///          ↓           ↓
///        idle  (stop / hard limit)
/// ```
///
/// `Idle` is both the initial and the terminal state; the same controller
/// is reusable for a new session once it returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
    Paused,
}

impl RecorderState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Whether a session is in progress (recording or paused).
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }
}
