use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Opaque handle naming the capture sink for one session.
///
/// The controller never interprets the value; it only threads it through to
/// the backend and back out in `Started` / `Stopped` events. Hosts with
/// their own naming scheme construct it via `OutputId::new`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputId(String);

impl OutputId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Default naming scheme: `Recording_YYYYMMDD_HHMMSS` in local time.
    pub fn timestamped() -> Self {
        Self(chrono::Local::now().format("Recording_%Y%m%d_%H%M%S").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format a duration as `MM:SS`, or `HH:MM:SS` at one hour and beyond,
/// for notification and UI text.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_short_durations() {
        assert_eq!(format_duration(Duration::ZERO), "00:00");
        assert_eq!(format_duration(Duration::from_secs(9)), "00:09");
        assert_eq!(format_duration(Duration::from_secs(75)), "01:15");
        assert_eq!(format_duration(Duration::from_secs(59 * 60 + 59)), "59:59");
    }

    #[test]
    fn format_switches_to_hours() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_duration(Duration::from_secs(3600 + 61)), "01:01:01");
    }

    #[test]
    fn timestamped_uses_recording_prefix() {
        let id = OutputId::timestamped();
        assert!(id.as_str().starts_with("Recording_"));
        // Recording_ + 8 date digits + _ + 6 time digits
        assert_eq!(id.as_str().len(), "Recording_".len() + 15);
    }
}
