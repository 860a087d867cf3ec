use crate::models::config::CaptureConfig;
use crate::models::error::CaptureError;
use crate::models::output::OutputId;

/// Interface for the platform capture collaborator.
///
/// Implemented by whatever owns the physical microphone path (MediaRecorder,
/// WASAPI, Core Audio, a test double). The controller drives the lifecycle
/// and never touches the device directly.
///
/// Whether `pause`/`resume` are honored is decided by the capability flag
/// the host passes to the controller, not by the backend — platforms that
/// cannot pause simply never receive those calls.
pub trait CaptureBackend: Send + Sync {
    /// Initialize the device and begin writing to the sink named by
    /// `output`. The configuration is passed through unvalidated.
    fn start(&mut self, output: &OutputId, config: &CaptureConfig) -> Result<(), CaptureError>;

    /// Suspend capture without finalizing the sink.
    fn pause(&mut self) -> Result<(), CaptureError>;

    /// Continue capture after a pause.
    fn resume(&mut self) -> Result<(), CaptureError>;

    /// Stop capture and finalize the sink, releasing the device.
    ///
    /// Called exactly once per session, from whichever path ends it
    /// (user stop, hard-limit auto-stop, or a host error path).
    fn finalize(&mut self) -> Result<(), CaptureError>;
}
