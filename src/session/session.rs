use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::models::output::OutputId;
use crate::models::state::RecorderState;

/// Recording time after which the battery usage warning fires.
pub const BATTERY_WARNING_AFTER: Duration = Duration::from_secs(30 * 60);

/// Recording time after which the approaching-limit warning fires.
pub const TIME_LIMIT_WARNING_AFTER: Duration = Duration::from_secs(55 * 60);

/// Hard cap on recording time; crossing it forces an auto-stop.
pub const MAX_RECORDING_DURATION: Duration = Duration::from_secs(60 * 60);

/// Policy threshold crossings reported by [`Session::poll_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyTrigger {
    /// One-shot per session.
    BatteryWarning,
    /// One-shot per session.
    TimeLimitWarning,
    /// Reported on every poll past the cap; the caller's stop returns the
    /// session to idle, which is what makes the auto-stop fire exactly once.
    HardLimit,
}

/// One recording session: state, duration accounting, and warning latches.
///
/// All timing methods take an explicit `now` so the math is independent of
/// the wall clock. Thresholds are measured against *recording* time — paused
/// time is excluded.
///
/// Invariant: `pause_started_at` is `Some` iff the state is `Paused`.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub state: RecorderState,
    pub output_id: Option<OutputId>,
    started_at: Option<Instant>,
    accumulated_paused: Duration,
    pause_started_at: Option<Instant>,
    battery_warning_issued: bool,
    time_limit_warning_issued: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::nil(),
            state: RecorderState::Idle,
            output_id: None,
            started_at: None,
            accumulated_paused: Duration::ZERO,
            pause_started_at: None,
            battery_warning_issued: false,
            time_limit_warning_issued: false,
        }
    }

    /// Begin a new session: fresh id, zeroed pause total, both warning
    /// latches cleared. Idle → Recording.
    pub fn begin(&mut self, now: Instant, output_id: OutputId) {
        self.id = Uuid::new_v4();
        self.state = RecorderState::Recording;
        self.output_id = Some(output_id);
        self.started_at = Some(now);
        self.accumulated_paused = Duration::ZERO;
        self.pause_started_at = None;
        self.battery_warning_issued = false;
        self.time_limit_warning_issued = false;
    }

    /// Recording → Paused. Duration freezes at its current value.
    pub fn begin_pause(&mut self, now: Instant) {
        self.pause_started_at = Some(now);
        self.state = RecorderState::Paused;
    }

    /// Paused → Recording. The pause interval is added to the running total.
    pub fn end_pause(&mut self, now: Instant) {
        if let Some(pause_start) = self.pause_started_at.take() {
            self.accumulated_paused += now.saturating_duration_since(pause_start);
        }
        self.state = RecorderState::Recording;
    }

    /// Effective recording time: wall time since start minus all paused
    /// time. Frozen while paused; zero when idle.
    pub fn effective_duration(&self, now: Instant) -> Duration {
        let Some(started_at) = self.started_at else {
            return Duration::ZERO;
        };
        // While paused, the clock stops at the instant the pause began.
        let end = self.pause_started_at.unwrap_or(now);
        end.saturating_duration_since(started_at)
            .saturating_sub(self.accumulated_paused)
    }

    /// End the session and reset every field. Returns the final duration.
    pub fn finish(&mut self, now: Instant) -> Duration {
        let duration = self.effective_duration(now);
        self.state = RecorderState::Idle;
        self.output_id = None;
        self.started_at = None;
        self.accumulated_paused = Duration::ZERO;
        self.pause_started_at = None;
        self.battery_warning_issued = false;
        self.time_limit_warning_issued = false;
        duration
    }

    /// Compare the effective duration against the policy thresholds.
    ///
    /// The two warnings are latched: each is returned at most once per
    /// session no matter how many polls exceed its threshold.
    pub fn poll_policy(&mut self, now: Instant) -> Vec<PolicyTrigger> {
        let mut triggers = Vec::new();
        if self.state.is_idle() {
            return triggers;
        }

        let duration = self.effective_duration(now);

        if !self.battery_warning_issued && duration > BATTERY_WARNING_AFTER {
            self.battery_warning_issued = true;
            triggers.push(PolicyTrigger::BatteryWarning);
        }
        if !self.time_limit_warning_issued && duration > TIME_LIMIT_WARNING_AFTER {
            self.time_limit_warning_issued = true;
            triggers.push(PolicyTrigger::TimeLimitWarning);
        }
        if duration > MAX_RECORDING_DURATION {
            triggers.push(PolicyTrigger::HardLimit);
        }
        triggers
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn idle_session_has_zero_duration() {
        let session = Session::new();
        assert_eq!(session.effective_duration(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn duration_excludes_paused_time() {
        // start at t=0, pause at t=10, resume at t=40, stop at t=50 → 20s.
        let t0 = Instant::now();
        let mut session = Session::new();

        session.begin(t0, OutputId::new("rec"));
        session.begin_pause(t0 + secs(10));
        session.end_pause(t0 + secs(40));
        let duration = session.finish(t0 + secs(50));

        assert_eq!(duration, secs(20));
        assert!(session.state.is_idle());
    }

    #[test]
    fn duration_is_non_decreasing_while_recording() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));

        let mut last = Duration::ZERO;
        for s in [1, 5, 9, 30, 120] {
            let d = session.effective_duration(t0 + secs(s));
            assert!(d >= last);
            last = d;
        }
    }

    #[test]
    fn duration_is_frozen_while_paused() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));
        session.begin_pause(t0 + secs(10));

        assert_eq!(session.effective_duration(t0 + secs(10)), secs(10));
        assert_eq!(session.effective_duration(t0 + secs(500)), secs(10));
    }

    #[test]
    fn immediate_resume_leaves_pause_total_unchanged() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));

        let t = t0 + secs(10);
        session.begin_pause(t);
        session.end_pause(t);

        assert_eq!(session.accumulated_paused, Duration::ZERO);
        assert_eq!(session.effective_duration(t0 + secs(30)), secs(30));
    }

    #[test]
    fn multiple_pause_intervals_accumulate() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));

        session.begin_pause(t0 + secs(10));
        session.end_pause(t0 + secs(15)); // +5s paused
        session.begin_pause(t0 + secs(20));
        session.end_pause(t0 + secs(30)); // +10s paused

        assert_eq!(session.accumulated_paused, secs(15));
        assert_eq!(session.effective_duration(t0 + secs(40)), secs(25));
    }

    #[test]
    fn pause_invariant_holds_across_transitions() {
        let t0 = Instant::now();
        let mut session = Session::new();
        assert!(session.pause_started_at.is_none());

        session.begin(t0, OutputId::new("rec"));
        assert!(session.pause_started_at.is_none());

        session.begin_pause(t0 + secs(1));
        assert!(session.state.is_paused() && session.pause_started_at.is_some());

        session.end_pause(t0 + secs(2));
        assert!(session.state.is_recording() && session.pause_started_at.is_none());
    }

    #[test]
    fn warnings_fire_once_per_session() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));

        assert!(session.poll_policy(t0 + secs(29 * 60)).is_empty());

        let t31 = t0 + secs(31 * 60);
        assert_eq!(session.poll_policy(t31), vec![PolicyTrigger::BatteryWarning]);
        // Subsequent polls past the threshold stay quiet.
        assert!(session.poll_policy(t31 + secs(1)).is_empty());
        assert!(session.poll_policy(t31 + secs(60)).is_empty());

        let t56 = t0 + secs(56 * 60);
        assert_eq!(session.poll_policy(t56), vec![PolicyTrigger::TimeLimitWarning]);
        assert!(session.poll_policy(t56 + secs(1)).is_empty());
    }

    #[test]
    fn paused_time_does_not_count_toward_thresholds() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));

        // 29 minutes recorded, then paused for two hours.
        session.begin_pause(t0 + secs(29 * 60));
        assert!(session.poll_policy(t0 + secs(120 * 60)).is_empty());

        session.end_pause(t0 + secs(149 * 60));
        // Two more minutes of recording crosses the 30-minute mark.
        let triggers = session.poll_policy(t0 + secs(151 * 60));
        assert_eq!(triggers, vec![PolicyTrigger::BatteryWarning]);
    }

    #[test]
    fn hard_limit_reported_past_the_cap() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));

        let triggers = session.poll_policy(t0 + secs(61 * 60));
        assert!(triggers.contains(&PolicyTrigger::HardLimit));
        // Both warnings also cross on the same poll.
        assert!(triggers.contains(&PolicyTrigger::BatteryWarning));
        assert!(triggers.contains(&PolicyTrigger::TimeLimitWarning));
    }

    #[test]
    fn new_session_resets_latches() {
        let t0 = Instant::now();
        let mut session = Session::new();

        session.begin(t0, OutputId::new("first"));
        assert_eq!(session.poll_policy(t0 + secs(31 * 60)), vec![PolicyTrigger::BatteryWarning]);
        session.finish(t0 + secs(31 * 60));

        let t1 = t0 + secs(40 * 60);
        session.begin(t1, OutputId::new("second"));
        assert!(session.poll_policy(t1 + secs(29 * 60)).is_empty());
        assert_eq!(session.poll_policy(t1 + secs(31 * 60)), vec![PolicyTrigger::BatteryWarning]);
    }

    #[test]
    fn idle_session_never_triggers_policy() {
        let mut session = Session::new();
        assert!(session.poll_policy(Instant::now()).is_empty());
    }

    #[test]
    fn finish_resets_all_fields() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));
        session.begin_pause(t0 + secs(5));
        session.finish(t0 + secs(10));

        assert!(session.state.is_idle());
        assert!(session.output_id.is_none());
        assert!(session.pause_started_at.is_none());
        assert_eq!(session.accumulated_paused, Duration::ZERO);
        assert_eq!(session.effective_duration(t0 + secs(20)), Duration::ZERO);
    }

    #[test]
    fn finish_while_paused_uses_frozen_duration() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin(t0, OutputId::new("rec"));
        session.begin_pause(t0 + secs(12));

        let duration = session.finish(t0 + secs(90));
        assert_eq!(duration, secs(12));
    }
}
