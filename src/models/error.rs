use thiserror::Error;

/// Errors that can occur while driving the capture device.
///
/// Calling a session operation from a state where it has no effect is *not*
/// an error: the controller absorbs it as a logged no-op, tolerating
/// double-clicks and racing UI events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The capture device could not initialize; the session stays idle.
    #[error("capture device failed to start: {0}")]
    StartFailed(String),

    /// Finalizing the capture sink failed. Reported to the host, but the
    /// session still returns to idle — a stuck recording state is never
    /// acceptable.
    #[error("failed to finalize recording: {0}")]
    StopFailed(String),

    #[error("capture device not available")]
    DeviceNotAvailable,

    #[error("microphone permission denied")]
    PermissionDenied,
}
