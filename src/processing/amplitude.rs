//! Pure amplitude extraction over raw 16-bit little-endian PCM.
//!
//! These functions reduce capture buffers to normalized waveform values and
//! are safe to call from the capture thread: no state, no allocation beyond
//! the returned series, no panics on malformed input. Stereo interleaving is
//! not deinterleaved; the byte stream is processed as-is.

/// Gain applied to RMS values before clamping, so typical speech fills the
/// display range.
const RMS_GAIN: f64 = 2.0;

const BYTES_PER_SAMPLE: usize = 2;

/// Number of samples covered by one metering window (~100 ms of audio).
fn window_samples(sample_rate: u32) -> usize {
    (sample_rate / 10) as usize
}

/// RMS amplitude of up to ~100 ms of PCM, normalized to `[0.0, 1.0]`.
///
/// Each sample is scaled by 1/32768, squared, averaged, rooted, boosted by
/// `RMS_GAIN`, and clamped. Empty input (or a buffer too short for a single
/// sample) yields `0.0`.
pub fn rms_amplitude(pcm: &[u8], sample_rate: u32) -> f32 {
    let mut sum = 0.0f64;
    let mut count = 0usize;

    for frame in pcm.chunks_exact(BYTES_PER_SAMPLE).take(window_samples(sample_rate)) {
        let sample = i16::from_le_bytes([frame[0], frame[1]]);
        let normalized = f64::from(sample) / 32768.0;
        sum += normalized * normalized;
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    let rms = (sum / count as f64).sqrt();
    (rms * RMS_GAIN).min(1.0) as f32
}

/// Peak absolute amplitude over the same ~100 ms window as `rms_amplitude`.
///
/// No gain is applied; the result stays in the natural `[0.0, 1.0]` range of
/// normalized 16-bit samples. Empty input yields `0.0`.
pub fn peak_amplitude(pcm: &[u8], sample_rate: u32) -> f32 {
    let mut max = 0.0f32;

    for frame in pcm.chunks_exact(BYTES_PER_SAMPLE).take(window_samples(sample_rate)) {
        let sample = i16::from_le_bytes([frame[0], frame[1]]);
        let normalized = (f32::from(sample) / 32768.0).abs();
        max = max.max(normalized);
    }

    max
}

/// Reduce a larger PCM buffer to one RMS value per `chunk_samples` samples,
/// for smooth waveform animation.
///
/// Chunks are consecutive and non-overlapping; a trailing remainder shorter
/// than one full chunk is dropped. A non-empty buffer holding fewer samples
/// than one chunk yields a single value over the whole buffer. An empty
/// buffer or a zero chunk size yields an empty series.
pub fn amplitude_series(pcm: &[u8], sample_rate: u32, chunk_samples: usize) -> Vec<f32> {
    if pcm.is_empty() || chunk_samples == 0 {
        return Vec::new();
    }

    let total_samples = pcm.len() / BYTES_PER_SAMPLE;
    let chunk_count = total_samples / chunk_samples;
    if chunk_count == 0 {
        return vec![rms_amplitude(pcm, sample_rate)];
    }

    let chunk_bytes = chunk_samples * BYTES_PER_SAMPLE;
    (0..chunk_count)
        .map(|i| rms_amplitude(&pcm[i * chunk_bytes..(i + 1) * chunk_bytes], sample_rate))
        .collect()
}
