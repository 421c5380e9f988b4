//! Game flow orchestration: lobby management, round lifecycle, bidding,
//! and read-side queries.
//!
//! `GameFlowService` is the single entry point for everything that mutates a
//! game. Mutations serialize per game key through [`GameLocks`]; reads go
//! straight to the repos. Every successful mutation broadcasts a
//! [`GameEvent`](crate::realtime::GameEvent) so connected clients can refresh.

mod lobby;
mod player_actions;
mod queries;
mod round_lifecycle;

#[cfg(test)]
mod tests_end_to_end;
#[cfg(test)]
mod tests_queries;

use std::sync::Arc;

use crate::config::Settings;
use crate::domain::Game;
use crate::errors::{GameError, GameResult};
use crate::infra::GameLocks;
use crate::realtime::GameNotifier;
use crate::repos::{require_game, BidRepo, GameRepo, PlayerRepo, RoundRepo};

pub struct GameFlowService {
    settings: Settings,
    games: Arc<dyn GameRepo>,
    players: Arc<dyn PlayerRepo>,
    rounds: Arc<dyn RoundRepo>,
    bids: Arc<dyn BidRepo>,
    notifier: Arc<dyn GameNotifier>,
    locks: GameLocks,
}

impl GameFlowService {
    pub fn new(
        settings: Settings,
        games: Arc<dyn GameRepo>,
        players: Arc<dyn PlayerRepo>,
        rounds: Arc<dyn RoundRepo>,
        bids: Arc<dyn BidRepo>,
        notifier: Arc<dyn GameNotifier>,
    ) -> Self {
        Self {
            settings,
            games,
            players,
            rounds,
            bids,
            notifier,
            locks: GameLocks::new(),
        }
    }

    /// Load a game by key or fail with `GAME_NOT_FOUND`.
    async fn require_game(&self, key: &str) -> GameResult<Game> {
        require_game(self.games.as_ref(), key).await
    }

    /// Resolve a username within a game or fail with `PLAYER_NOT_FOUND`.
    fn require_player<'a>(
        game: &'a Game,
        username: &str,
    ) -> GameResult<&'a crate::domain::Player> {
        game.player_by_username(username)
            .ok_or_else(|| GameError::player_not_found(username))
    }

    /// Fail with `PLAYER_NOT_FOUND` if `username` is not seated, then with
    /// `NOT_CREATOR` unless they created the game.
    fn ensure_creator(game: &Game, username: &str) -> GameResult<()> {
        Self::require_player(game, username)?;
        if !game.is_creator(username) {
            return Err(GameError::not_creator(username));
        }
        Ok(())
    }

    /// Fail with `ALREADY_STARTED` unless the game is still in the lobby.
    fn ensure_not_started(game: &Game) -> GameResult<()> {
        if game.has_started {
            return Err(GameError::already_started());
        }
        Ok(())
    }

    /// Fail with `NOT_STARTED` unless the game has begun.
    fn ensure_started(game: &Game) -> GameResult<()> {
        if !game.has_started {
            return Err(GameError::not_started());
        }
        Ok(())
    }
}
