use serde::{Deserialize, Serialize};

/// Audio encoding requested from the capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioEncoding {
    #[default]
    Aac,
    Opus,
    Flac,
}

/// Configuration handed to the capture backend when a session starts.
///
/// The controller passes these values through unvalidated; the backend owns
/// whatever constraints the platform encoder imposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Sample rate in Hz (default: 48000).
    pub sample_rate: u32,

    /// Number of channels (default: 2 for stereo).
    pub channels: u16,

    /// Encoder bit rate in bits per second (default: 256000).
    pub bit_rate: u32,

    /// Encoder selection (default: AAC).
    pub encoding: AudioEncoding,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            channels: 2,
            bit_rate: 256_000,
            encoding: AudioEncoding::Aac,
        }
    }
}
