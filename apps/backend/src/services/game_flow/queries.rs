//! Read-side queries. No locking: each query reads one consistent aggregate
//! snapshot and derives its answer from that.

use tracing::debug;

use super::GameFlowService;
use crate::domain::{rules, scoring, turns, Game, Scoreboard, Trump};
use crate::errors::{GameError, GameResult};

impl GameFlowService {
    /// Plain aggregate lookup; `Ok(None)` for an unknown key.
    pub async fn game_by_key(&self, key: &str) -> GameResult<Option<Game>> {
        self.games.find_by_key(key).await
    }

    /// Username of the open round's dealer.
    pub async fn current_dealer_username(&self, key: &str) -> GameResult<String> {
        let game = self.require_game(key).await?;
        let dealer = turns::current_dealer(&game)?;
        Ok(dealer.username.clone())
    }

    /// Username of whoever bids next in the open round.
    pub async fn next_bidder_username(&self, key: &str) -> GameResult<String> {
        let game = self.require_game(key).await?;
        let bidder = turns::next_bidder(&game)?;
        Ok(bidder.username.clone())
    }

    /// Username of the player who deals the round after this one.
    pub async fn next_dealer_username(&self, key: &str) -> GameResult<String> {
        let game = self.require_game(key).await?;
        let dealer = turns::next_dealer(&game)?;
        Ok(dealer.username.clone())
    }

    /// Number of the open round.
    pub async fn current_round_number(&self, key: &str) -> GameResult<u8> {
        let game = self.require_game(key).await?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        Ok(round.round_number)
    }

    /// Trump suit of the open round.
    pub async fn current_trump(&self, key: &str) -> GameResult<Trump> {
        let game = self.require_game(key).await?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        Ok(round.trump)
    }

    /// Display lines for the open round's bids, in placement order.
    pub async fn round_bid_summary(&self, key: &str) -> GameResult<Vec<String>> {
        let game = self.require_game(key).await?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;

        let mut lines = Vec::with_capacity(round.bids.len());
        for bid in &round.bids {
            let Some(player) = game.player_by_id(bid.player_id) else {
                continue;
            };
            lines.push(format!("{} bid {}", player.username, bid.bid_value));
        }
        Ok(lines)
    }

    /// Whether every seated player has bid in the open round.
    pub async fn all_bids_placed(&self, key: &str) -> GameResult<bool> {
        let game = self.require_game(key).await?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        Ok(round.bid_complete(game.number_of_players))
    }

    /// Whether every bid of the open round has its tricks recorded.
    pub async fn is_round_finished(&self, key: &str) -> GameResult<bool> {
        let game = self.require_game(key).await?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        Ok(round.play_complete())
    }

    /// Whether the open round is the table's last. `Ok(false)` before start.
    pub async fn is_last_round(&self, key: &str) -> GameResult<bool> {
        let game = self.require_game(key).await?;
        Ok(game.latest_round().is_some_and(|round| {
            rules::is_last_round(game.number_of_players, round.round_number)
        }))
    }

    /// Whether the game is over: last round, fully played out.
    pub async fn is_game_finished(&self, key: &str) -> GameResult<bool> {
        let game = self.require_game(key).await?;
        Ok(game.latest_round().is_some_and(|round| {
            rules::is_last_round(game.number_of_players, round.round_number)
                && round.play_complete()
        }))
    }

    /// Totals and per-round lines for every seated player.
    pub async fn scoreboard(&self, key: &str) -> GameResult<Scoreboard> {
        debug!(game_key = key, "Computing scoreboard");
        let game = self.require_game(key).await?;
        Ok(scoring::scoreboard(&game))
    }
}
