//! Realtime notification: event types, the notifier seam, and the
//! in-process delivery registry.

pub mod events;
pub mod notifier;
pub mod registry;

pub use events::GameEvent;
pub use notifier::{GameNotifier, NullNotifier};
pub use registry::InProcessNotifier;
