use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts. They are never persisted here, but keep a
/// stable type name so they can be logged and matched on by subscribers.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "cart.line.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (wall-clock time of the user action).
    fn occurred_at(&self) -> DateTime<Utc>;
}
