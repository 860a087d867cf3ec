use crate::models::event::SessionEvent;

/// Subscription interface for session events.
///
/// The controller holds a list of subscribers rather than a single mutable
/// listener, and invokes them with no internal lock held. Observers may call
/// back into the controller from `on_session_event`.
///
/// Events are delivered from the control thread or the tick thread, never
/// concurrently with each other; implementations should marshal to the UI
/// thread if needed.
pub trait SessionObserver: Send + Sync {
    fn on_session_event(&self, event: &SessionEvent);
}
