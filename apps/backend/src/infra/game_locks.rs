//! Per-game serialization.
//!
//! Every mutating operation on a game runs under that game's lock, so
//! check-then-act sequences (capacity checks, username checks, the start
//! flag) cannot interleave for one game. Different games never contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for `game_key`, waiting behind any holder. The guard is
    /// owned, so it can live across awaits without borrowing the registry.
    pub async fn acquire(&self, game_key: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(game_key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}
