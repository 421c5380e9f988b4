//! In-process event delivery: a per-game-key subscriber registry.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::realtime::events::GameEvent;
use crate::realtime::notifier::GameNotifier;

/// Delivers events to in-process subscribers over unbounded channels.
///
/// Subscribers are keyed by a token so they can leave again; closed channels
/// are pruned on the next broadcast to their game.
#[derive(Debug, Default)]
pub struct InProcessNotifier {
    sessions: DashMap<String, DashMap<Uuid, mpsc::UnboundedSender<GameEvent>>>,
}

impl InProcessNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a game. The receiver yields every event broadcast to
    /// `game_key` from now on.
    pub fn subscribe(&self, game_key: &str) -> (Uuid, mpsc::UnboundedReceiver<GameEvent>) {
        let token = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        let entry = self
            .sessions
            .entry(game_key.to_string())
            .or_insert_with(DashMap::new);
        entry.insert(token, tx);
        (token, rx)
    }

    pub fn unsubscribe(&self, game_key: &str, token: Uuid) {
        if let Some(entry) = self.sessions.get(game_key) {
            entry.remove(&token);
        }
        // Checking emptiness and removing must be one step, or a concurrent
        // subscriber lands in a map that is about to go away.
        self.sessions.remove_if(game_key, |_, entry| entry.is_empty());
    }

    /// Number of live subscriptions for a game. Test hook.
    pub fn subscriber_count(&self, game_key: &str) -> usize {
        self.sessions.get(game_key).map_or(0, |entry| entry.len())
    }
}

#[async_trait]
impl GameNotifier for InProcessNotifier {
    async fn broadcast(&self, game_key: &str, event: GameEvent) {
        if let Some(entry) = self.sessions.get(game_key) {
            entry.retain(|_, tx| tx.send(event.clone()).is_ok());
        }
        debug!(game_key, ?event, "event broadcast");
    }
}
