//! # recording-core
//!
//! Platform-agnostic recording session core.
//!
//! Coordinates one active audio-capture session per controller: the
//! start/pause/resume/stop state machine, elapsed-time accounting across
//! pauses, one-shot policy warnings (battery, time limit, auto-stop), and
//! the reduction of raw PCM buffers into a bounded amplitude series for a
//! live waveform. The physical capture device plugs in behind the
//! `CaptureBackend` trait; hosts consume events via `SessionObserver`.
//!
//! ## Architecture
//!
//! ```text
//! recording-core (this crate)
//! ├── traits/       ← CaptureBackend, SessionObserver
//! ├── models/       ← CaptureError, RecorderState, CaptureConfig,
//! │                   SessionEvent, OutputId
//! ├── processing/   ← amplitude extraction (RMS / peak / chunked series),
//! │                   WaveformBuffer
//! └── session/      ← Session entity, RecordingController, PlaybackTracker
//! ```
//!
//! Data flow: the capture backend produces raw PCM chunks → the amplitude
//! functions reduce each chunk to normalized values → `WaveformBuffer`
//! retains a sliding window for a renderer. In parallel, the controller's
//! 1 Hz tick updates duration and raises policy events.

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::{AudioEncoding, CaptureConfig};
pub use models::error::CaptureError;
pub use models::event::SessionEvent;
pub use models::output::{format_duration, OutputId};
pub use models::state::RecorderState;
pub use processing::amplitude::{amplitude_series, peak_amplitude, rms_amplitude};
pub use processing::waveform::{WaveformBuffer, DEFAULT_WAVEFORM_CAPACITY};
pub use session::controller::{RecordingController, SessionCapabilities, TICK_INTERVAL};
pub use session::playback::{PlaybackState, PlaybackTracker};
pub use session::session::{
    PolicyTrigger, Session, BATTERY_WARNING_AFTER, MAX_RECORDING_DURATION,
    TIME_LIMIT_WARNING_AFTER,
};
