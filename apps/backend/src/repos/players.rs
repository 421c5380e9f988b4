//! Player storage seam.

use async_trait::async_trait;

use crate::domain::game::Player;
use crate::errors::GameResult;

#[async_trait]
pub trait PlayerRepo: Send + Sync {
    /// Seat a player. Username uniqueness within the game is checked by the
    /// caller under the game lock, not here.
    async fn create_player(&self, game_id: i64, username: &str, seat: u8) -> GameResult<Player>;

    async fn update_seat(&self, player_id: i64, seat: u8) -> GameResult<()>;

    async fn remove_player(&self, game_id: i64, player_id: i64) -> GameResult<()>;
}
