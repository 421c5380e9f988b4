//! In-round player actions: bidding, recording tricks won, and the dealer's
//! trump selection.

use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::{rules, turns, Game, Trump};
use crate::errors::{GameError, GameResult};
use crate::realtime::GameEvent;

impl GameFlowService {
    /// Place a bid for the open round.
    ///
    /// The already-bid check runs before the turn check: once the last seat
    /// has bid, `next_bidder` reports the round as finished, and a player
    /// rebidding at that point should hear "already bid", not that.
    pub async fn submit_bid(
        &self,
        key: &str,
        username: &str,
        bid_value: u8,
    ) -> GameResult<Game> {
        debug!(game_key = key, username, bid_value, "Submitting bid");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_started(&game)?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        let player = Self::require_player(&game, username)?;

        if round.bid_for_player(player.id).is_some() {
            return Err(GameError::already_bid(username));
        }
        let next = turns::next_bidder(&game)?;
        if next.id != player.id {
            return Err(GameError::out_of_turn(username));
        }
        if !rules::trick_range(round.round_number).contains(&bid_value) {
            return Err(GameError::bid_too_high(bid_value, round.round_number));
        }

        self.bids.create_bid(round.id, player.id, bid_value).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, username, bid_value, "Bid submitted");
        self.notifier
            .broadcast(
                key,
                GameEvent::BidSubmitted {
                    username: username.to_string(),
                },
            )
            .await;
        Ok(game)
    }

    /// Record how many tricks a player actually won this round.
    ///
    /// Accepted only once bidding is complete, in any player order; a
    /// resubmission overwrites the earlier value. The value is capped by
    /// the round's trick count, like the bid itself.
    pub async fn submit_bid_result(
        &self,
        key: &str,
        username: &str,
        actual_value: u8,
    ) -> GameResult<Game> {
        debug!(game_key = key, username, actual_value, "Submitting bid result");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_started(&game)?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        let player = Self::require_player(&game, username)?;

        let bid = round
            .bid_for_player(player.id)
            .ok_or_else(|| GameError::no_bid(username))?;
        if !round.bid_complete(game.number_of_players) {
            return Err(GameError::round_not_finished("bids are still open"));
        }
        if !rules::trick_range(round.round_number).contains(&actual_value) {
            return Err(GameError::actual_too_high(actual_value, round.round_number));
        }

        self.bids.set_actual_value(bid.id, actual_value).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, username, actual_value, "Bid result submitted");
        self.notifier
            .broadcast(
                key,
                GameEvent::BidResultSubmitted {
                    username: username.to_string(),
                },
            )
            .await;
        Ok(game)
    }

    /// Set the open round's trump suit. Dealer-only, and repeatable while
    /// the round is open.
    pub async fn change_trump(
        &self,
        key: &str,
        username: &str,
        trump: Trump,
    ) -> GameResult<Game> {
        debug!(game_key = key, username, %trump, "Changing trump");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_started(&game)?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;

        let dealer = turns::current_dealer(&game)?;
        if dealer.username != username {
            return Err(GameError::not_dealer(username));
        }

        self.rounds.update_trump(round.id, trump).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, username, %trump, "Trump changed");
        self.notifier
            .broadcast(key, GameEvent::SuitChanged { trump })
            .await;
        Ok(game)
    }
}
