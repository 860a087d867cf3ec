use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::models::config::CaptureConfig;
use crate::models::event::SessionEvent;
use crate::models::output::{format_duration, OutputId};
use crate::models::state::RecorderState;
use crate::session::session::{PolicyTrigger, Session};
use crate::traits::capture_backend::CaptureBackend;
use crate::traits::observer::SessionObserver;

/// Period of the duration/policy tick while a session is active.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Platform capabilities the host resolves before constructing the
/// controller, keeping the controller itself platform-agnostic.
#[derive(Debug, Clone, Copy)]
pub struct SessionCapabilities {
    /// Whether the capture device supports pause/resume. When false,
    /// `pause()` and `resume()` are permanently silent no-ops.
    pub can_pause: bool,
}

impl Default for SessionCapabilities {
    fn default() -> Self {
        Self { can_pause: true }
    }
}

/// Session plus backend under one lock: every public operation and the tick
/// mutate through here, giving the single-writer discipline the duration
/// accounting requires.
struct Core {
    session: Session,
    backend: Box<dyn CaptureBackend>,
}

/// One tick schedule. A fresh flag per spawn so a stale thread from a
/// previous session can never be revived by a new `start()`.
struct Ticker {
    running: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

struct Inner {
    core: Mutex<Core>,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
    tick: Mutex<Option<Ticker>>,
    config: CaptureConfig,
    capabilities: SessionCapabilities,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(ticker) = self.tick.get_mut().take() {
            ticker.running.store(false, Ordering::SeqCst);
        }
    }
}

/// Orchestrates one recording session at a time: state transitions, elapsed
/// time across pauses, one-shot policy warnings, and the hard-limit
/// auto-stop.
///
/// Cloning yields another handle to the same controller; the tick thread
/// holds one. Events are emitted only after the internal lock is released,
/// so an observer may call back into the controller.
pub struct RecordingController {
    inner: Arc<Inner>,
}

impl Clone for RecordingController {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl RecordingController {
    pub fn new(
        backend: Box<dyn CaptureBackend>,
        config: CaptureConfig,
        capabilities: SessionCapabilities,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                core: Mutex::new(Core {
                    session: Session::new(),
                    backend,
                }),
                observers: Mutex::new(Vec::new()),
                tick: Mutex::new(None),
                config,
                capabilities,
            }),
        }
    }

    /// Register an observer for session events. Observers are invoked in
    /// subscription order from the control or tick thread.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        self.inner.observers.lock().push(observer);
    }

    pub fn state(&self) -> RecorderState {
        self.inner.core.lock().session.state
    }

    /// Current effective recording time: zero when idle, frozen while
    /// paused.
    pub fn duration(&self) -> Duration {
        self.inner.core.lock().session.effective_duration(Instant::now())
    }

    /// Begin a new session recording to the sink named by `output_id`.
    ///
    /// Valid only from idle; otherwise a logged no-op. If the backend fails
    /// to initialize, the controller stays idle, no tick is scheduled, and
    /// an `Error` event is emitted instead of `Started`.
    pub fn start(&self, output_id: OutputId) {
        // Reap the (already stopped) ticker from a previous session.
        self.cancel_tick();

        let events = {
            let mut core = self.inner.core.lock();
            if !core.session.state.is_idle() {
                log::warn!("recording already in progress, ignoring start");
                return;
            }

            match core.backend.start(&output_id, &self.inner.config) {
                Ok(()) => {
                    core.session.begin(Instant::now(), output_id.clone());
                    log::debug!("session {} recording to {}", core.session.id, output_id);
                    self.spawn_tick();
                    vec![SessionEvent::Started { output_id }]
                }
                Err(err) => {
                    log::error!("failed to start capture: {err}");
                    vec![SessionEvent::Error {
                        reason: err.to_string(),
                    }]
                }
            }
        };
        self.emit_all(&events);
    }

    /// Suspend recording. Valid only while recording, and only on platforms
    /// whose capabilities allow it; otherwise a silent no-op.
    pub fn pause(&self) {
        if !self.inner.capabilities.can_pause {
            log::debug!("pause not supported on this platform");
            return;
        }

        let events = {
            let mut core = self.inner.core.lock();
            if !core.session.state.is_recording() {
                log::warn!("pause ignored: no active recording");
                return;
            }

            match core.backend.pause() {
                Ok(()) => {
                    core.session.begin_pause(Instant::now());
                    vec![SessionEvent::Paused]
                }
                Err(err) => {
                    log::error!("failed to pause capture: {err}");
                    vec![SessionEvent::Error {
                        reason: err.to_string(),
                    }]
                }
            }
        };
        self.emit_all(&events);
    }

    /// Continue a paused recording. Valid only while paused; otherwise a
    /// silent no-op.
    pub fn resume(&self) {
        if !self.inner.capabilities.can_pause {
            log::debug!("resume not supported on this platform");
            return;
        }

        let events = {
            let mut core = self.inner.core.lock();
            if !core.session.state.is_paused() {
                log::warn!("resume ignored: recording is not paused");
                return;
            }

            match core.backend.resume() {
                Ok(()) => {
                    core.session.end_pause(Instant::now());
                    vec![SessionEvent::Resumed]
                }
                Err(err) => {
                    log::error!("failed to resume capture: {err}");
                    vec![SessionEvent::Error {
                        reason: err.to_string(),
                    }]
                }
            }
        };
        self.emit_all(&events);
    }

    /// End the session: finalize the capture sink, cancel the tick
    /// schedule, return to idle, and emit `Stopped`.
    ///
    /// Idempotent — calling from idle is a logged no-op. A finalize failure
    /// is reported via an `Error` event but the state still reaches idle; a
    /// stuck recording state is never acceptable.
    pub fn stop(&self) {
        let events = {
            let mut core = self.inner.core.lock();
            self.stop_locked(&mut core, Instant::now(), false)
        };
        self.cancel_tick();
        self.emit_all(&events);
    }

    /// One policy/duration tick. Invoked by the tick thread once per
    /// second; a no-op when idle. Takes `now` explicitly so threshold
    /// behavior is testable without waiting out the clock.
    fn handle_tick(&self, now: Instant) {
        let mut auto_stopped = false;
        let events = {
            let mut core = self.inner.core.lock();
            if core.session.state.is_idle() {
                return;
            }

            let mut events = Vec::new();
            for trigger in core.session.poll_policy(now) {
                match trigger {
                    PolicyTrigger::BatteryWarning => {
                        log::warn!("recording past battery warning threshold");
                        events.push(SessionEvent::BatteryWarning);
                    }
                    PolicyTrigger::TimeLimitWarning => {
                        log::warn!("recording approaching the hard time limit");
                        events.push(SessionEvent::TimeLimitWarning);
                    }
                    PolicyTrigger::HardLimit => {
                        log::warn!("hard recording limit reached, stopping automatically");
                        events.extend(self.stop_locked(&mut core, now, true));
                        auto_stopped = true;
                    }
                }
            }
            events
        };

        if auto_stopped {
            // Called from the tick thread itself; the self-join guard in
            // cancel_tick lets the loop wind down on the cleared flag.
            self.cancel_tick();
        }
        self.emit_all(&events);
    }

    /// Core of `stop()`, run under the session lock. Returns the events to
    /// emit once the lock is released.
    fn stop_locked(&self, core: &mut Core, now: Instant, auto_stopped: bool) -> Vec<SessionEvent> {
        // The output id is present exactly while a session is active.
        let Some(output_id) = core.session.output_id.clone() else {
            log::warn!("stop ignored: no recording in progress");
            return Vec::new();
        };

        let mut events = Vec::new();
        if let Err(err) = core.backend.finalize() {
            log::error!("failed to finalize capture: {err}");
            events.push(SessionEvent::Error {
                reason: err.to_string(),
            });
        }

        let duration = core.session.finish(now);
        log::debug!(
            "session stopped at {} (auto: {auto_stopped})",
            format_duration(duration)
        );
        events.push(SessionEvent::Stopped {
            output_id,
            duration,
            auto_stopped,
        });
        events
    }

    /// Spawn the 1 Hz tick thread for the session just started. Exactly one
    /// schedule exists per session; the flag is fresh per spawn.
    fn spawn_tick(&self) {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let controller = self.clone();

        let handle = thread::Builder::new()
            .name("session-tick".into())
            .spawn(move || {
                while flag.load(Ordering::SeqCst) {
                    thread::sleep(TICK_INTERVAL);
                    if !flag.load(Ordering::SeqCst) {
                        break;
                    }
                    controller.handle_tick(Instant::now());
                }
            })
            .expect("failed to spawn tick thread");

        *self.inner.tick.lock() = Some(Ticker { running, handle });
    }

    /// Signal the tick thread to stop and reap it. Joining is skipped when
    /// the tick thread is cancelling itself (hard-limit auto-stop); its
    /// loop exits on the cleared flag instead.
    fn cancel_tick(&self) {
        let Some(ticker) = self.inner.tick.lock().take() else {
            return;
        };
        ticker.running.store(false, Ordering::SeqCst);
        if ticker.handle.thread().id() != thread::current().id() {
            let _ = ticker.handle.join();
        }
    }

    fn emit_all(&self, events: &[SessionEvent]) {
        if events.is_empty() {
            return;
        }
        let observers = self.inner.observers.lock().clone();
        for event in events {
            for observer in &observers {
                observer.on_session_event(event);
            }
        }
    }
}
