//! The notification seam between the engine and whatever delivers events.

use async_trait::async_trait;

use crate::realtime::events::GameEvent;

/// Fan an event out to everyone watching a game.
///
/// Fire and forget: delivery failures are the notifier's problem to log,
/// never the caller's to handle, and state changes are not rolled back over
/// them. No ordering or delivery guarantee is implied.
#[async_trait]
pub trait GameNotifier: Send + Sync {
    async fn broadcast(&self, game_key: &str, event: GameEvent);
}

/// Notifier that drops everything. For callers that do not care.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

#[async_trait]
impl GameNotifier for NullNotifier {
    async fn broadcast(&self, _game_key: &str, _event: GameEvent) {}
}
