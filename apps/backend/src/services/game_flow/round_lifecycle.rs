//! Round lifecycle: starting the game, signalling a finished round, and
//! opening the next one.

use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::{turns, Game, Trump};
use crate::errors::{GameError, GameResult};
use crate::realtime::GameEvent;

impl GameFlowService {
    /// Start the game: freeze the player count to the seated players, close
    /// any seat gaps, and open round 1 with the seat-1 player as dealer.
    pub async fn start_game(&self, key: &str, username: &str) -> GameResult<Game> {
        debug!(game_key = key, username, "Starting game");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        if !game.is_creator(username) {
            return Err(GameError::only_creator_can_start(username));
        }
        Self::ensure_not_started(&game)?;

        let seated = game.players.len() as u8;
        if seated != game.number_of_players {
            self.games.set_player_count(game.id, seated).await?;
        }

        // Renumber seats densely, preserving relative order. `game.players`
        // is seat-sorted, so index + 1 is the target seat.
        for (index, player) in game.players.iter().enumerate() {
            let seat = index as u8 + 1;
            if player.seat != seat {
                self.players.update_seat(player.id, seat).await?;
            }
        }

        let game = self.require_game(key).await?;
        let dealer = game
            .first_seat()
            .ok_or_else(|| GameError::storage(format!("game {key} has no players")))?;
        self.rounds
            .create_round(game.id, 1, dealer.id, Trump::None)
            .await?;
        self.games.set_started(game.id).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, players = seated, "Game started");
        self.notifier.broadcast(key, GameEvent::GameStarted).await;
        Ok(game)
    }

    /// Signal that the open round's bidding is complete. Mutates nothing;
    /// the broadcast moves waiting clients from the bid room to result entry.
    pub async fn finish_round(&self, key: &str) -> GameResult<()> {
        debug!(game_key = key, "Finishing round");

        let game = self.require_game(key).await?;
        Self::ensure_started(&game)?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;
        if !round.bid_complete(game.number_of_players) {
            return Err(GameError::round_not_finished("bids are still open"));
        }

        let round_number = round.round_number;
        info!(game_key = key, round_number, "Round finished");
        self.notifier
            .broadcast(key, GameEvent::RoundFinished { round_number })
            .await;
        Ok(())
    }

    /// Open the next round. Only the next dealer may do this, and only once
    /// every bid of the open round has its tricks recorded.
    pub async fn start_next_round(&self, key: &str, username: &str) -> GameResult<Game> {
        debug!(game_key = key, username, "Starting next round");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_started(&game)?;
        let round = game.latest_round().ok_or_else(GameError::not_started)?;

        let next_dealer = turns::next_dealer(&game)?;
        if next_dealer.username != username {
            return Err(GameError::not_next_dealer(username));
        }
        if !round.play_complete() {
            return Err(GameError::round_not_finished(
                "tricks are still being recorded",
            ));
        }

        let round_number = round.round_number + 1;
        self.rounds
            .create_round(game.id, round_number, next_dealer.id, Trump::None)
            .await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, round_number, username, "Next round started");
        self.notifier
            .broadcast(key, GameEvent::NextRoundStarted { round_number })
            .await;
        Ok(game)
    }
}
