//! Bid storage seam.

use async_trait::async_trait;

use crate::domain::game::Bid;
use crate::errors::GameResult;

#[async_trait]
pub trait BidRepo: Send + Sync {
    async fn create_bid(&self, round_id: i64, player_id: i64, bid_value: u8) -> GameResult<Bid>;

    /// Record the tricks actually won. Overwrites any earlier value; the
    /// last report wins.
    async fn set_actual_value(&self, bid_id: i64, actual_value: u8) -> GameResult<()>;
}
