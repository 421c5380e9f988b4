//! Round storage seam.

use async_trait::async_trait;

use crate::domain::game::{Round, Trump};
use crate::errors::GameResult;

#[async_trait]
pub trait RoundRepo: Send + Sync {
    async fn create_round(
        &self,
        game_id: i64,
        round_number: u8,
        dealer_id: i64,
        trump: Trump,
    ) -> GameResult<Round>;

    async fn update_trump(&self, round_id: i64, trump: Trump) -> GameResult<()>;
}
