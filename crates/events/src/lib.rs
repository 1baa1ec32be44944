//! Events and their distribution.
//!
//! - [`Event`]: facts emitted by aggregates (cart mutations).
//! - [`execute`]: decide + apply in one step.
//! - [`EventBus`]: fan-out of messages to subscribers (UI notices).

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
