use std::time::{Duration, Instant};

/// Playback state of a loaded recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Position tracker for an externally-driven playback stream.
///
/// The actual decoding and output happen elsewhere; this only keeps the
/// position math for the host's periodic UI refresh, the same wall-clock
/// pattern the recording session uses for duration. Methods take `now`
/// explicitly; no timer of its own.
#[derive(Debug, Clone)]
pub struct PlaybackTracker {
    total: Duration,
    state: PlaybackState,
    resumed_at: Option<Instant>,
    base_position: Duration,
}

impl PlaybackTracker {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            state: PlaybackState::Stopped,
            resumed_at: None,
            base_position: Duration::ZERO,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Begin (or continue) advancing from the current position.
    pub fn play(&mut self, now: Instant) {
        if self.state == PlaybackState::Playing {
            return;
        }
        self.resumed_at = Some(now);
        self.state = PlaybackState::Playing;
    }

    /// Freeze the position where it is now.
    pub fn pause(&mut self, now: Instant) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.base_position = self.position(now);
        self.resumed_at = None;
        self.state = PlaybackState::Paused;
    }

    /// Jump to `position` (clamped to the total), keeping the current
    /// play/pause state.
    pub fn seek(&mut self, now: Instant, position: Duration) {
        self.base_position = position.min(self.total);
        if self.state == PlaybackState::Playing {
            self.resumed_at = Some(now);
        }
    }

    /// Current position, clamped to the total. Frozen unless playing.
    pub fn position(&self, now: Instant) -> Duration {
        let position = match (self.state, self.resumed_at) {
            (PlaybackState::Playing, Some(resumed_at)) => {
                self.base_position + now.saturating_duration_since(resumed_at)
            }
            _ => self.base_position,
        };
        position.min(self.total)
    }

    /// Whether playback has reached the end of the stream.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.position(now) >= self.total
    }

    /// Return to the beginning, stopped.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Stopped;
        self.resumed_at = None;
        self.base_position = Duration::ZERO;
    }
}
