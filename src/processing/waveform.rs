use std::collections::VecDeque;

/// Default number of amplitude values retained for display.
pub const DEFAULT_WAVEFORM_CAPACITY: usize = 100;

/// Bounded FIFO of normalized amplitude values feeding a waveform renderer.
///
/// The capture pipeline pushes extracted amplitudes; a renderer takes
/// snapshots. Share across threads as `Arc<parking_lot::Mutex<WaveformBuffer>>`.
///
/// Overflow behavior: the oldest value is dropped. The producer never blocks
/// on a slow consumer — waveform display is best-effort and must never stall
/// the capture path.
#[derive(Debug, Clone)]
pub struct WaveformBuffer {
    amplitudes: VecDeque<f32>,
    capacity: usize,
}

impl WaveformBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            amplitudes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one amplitude, clamped to `[0.0, 1.0]`, evicting the oldest
    /// value if the buffer is full.
    pub fn push(&mut self, amplitude: f32) {
        if self.capacity == 0 {
            return;
        }
        while self.amplitudes.len() >= self.capacity {
            self.amplitudes.pop_front();
        }
        self.amplitudes.push_back(amplitude.clamp(0.0, 1.0));
    }

    /// Push a batch of amplitudes in order (e.g., one chunked series).
    pub fn extend(&mut self, amplitudes: &[f32]) {
        for &amplitude in amplitudes {
            self.push(amplitude);
        }
    }

    /// Ordered copy of the current contents, oldest first, for a renderer.
    pub fn snapshot(&self) -> Vec<f32> {
        self.amplitudes.iter().copied().collect()
    }

    /// Change the capacity, trimming oldest-first if shrinking.
    pub fn resize(&mut self, new_capacity: usize) {
        self.capacity = new_capacity;
        while self.amplitudes.len() > new_capacity {
            self.amplitudes.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.amplitudes.clear();
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for WaveformBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_WAVEFORM_CAPACITY)
    }
}
