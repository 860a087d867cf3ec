pub mod amplitude;
pub mod waveform;
