//! Game storage seam.

use async_trait::async_trait;

use crate::domain::game::Game;
use crate::errors::{GameError, GameResult};

/// Persistence operations on games. Implementations return fully assembled
/// aggregates from [`GameRepo::find_by_key`]: players sorted by seat, rounds
/// by round number, bids in placement order.
#[async_trait]
pub trait GameRepo: Send + Sync {
    /// Insert a new game with no players and no rounds. The key must be
    /// unused; implementations enforce key uniqueness.
    async fn create_game(&self, number_of_players: u8, key: &str) -> GameResult<Game>;

    async fn key_exists(&self, key: &str) -> GameResult<bool>;

    async fn find_by_key(&self, key: &str) -> GameResult<Option<Game>>;

    /// Record which player created the game. Set once, right after the
    /// creator takes seat 1.
    async fn set_creator(&self, game_id: i64, player_id: i64) -> GameResult<()>;

    /// Flip the started flag. Never flips back.
    async fn set_started(&self, game_id: i64) -> GameResult<()>;

    /// Freeze the player count to the number actually seated at start.
    async fn set_player_count(&self, game_id: i64, number_of_players: u8) -> GameResult<()>;
}

/// Load the aggregate for `key`, converting a missing game into
/// `GAME_NOT_FOUND`.
pub async fn require_game(repo: &dyn GameRepo, key: &str) -> GameResult<Game> {
    repo.find_by_key(key)
        .await?
        .ok_or_else(|| GameError::game_not_found(key))
}
