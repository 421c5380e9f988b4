//! Lobby operations: creating a game, joining it, and reordering or
//! removing players before the first round starts.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::{rules, Game, Player};
use crate::errors::{GameError, GameResult};
use crate::realtime::GameEvent;
use crate::utils::join_code;

impl GameFlowService {
    /// Create a game with a freshly generated key and seat the creator at
    /// seat 1.
    pub async fn create_game(
        &self,
        number_of_players: u8,
        username: &str,
    ) -> GameResult<Game> {
        debug!(number_of_players, username, "Creating game");

        if number_of_players < rules::MIN_PLAYERS
            || number_of_players > self.settings.max_players
        {
            return Err(GameError::too_many_players(self.settings.max_players));
        }

        // StdRng rather than the thread-local rng: the probe future is
        // awaited while the generator is alive, so it must be Send.
        let mut rng = StdRng::from_os_rng();
        let games = Arc::clone(&self.games);
        let key = join_code::unique_key(
            &mut rng,
            self.settings.game_key_length,
            move |candidate| {
                let games = Arc::clone(&games);
                async move { games.key_exists(&candidate).await }
            },
        )
        .await?;

        let game = self.games.create_game(number_of_players, &key).await?;
        let creator = self.players.create_player(game.id, username, 1).await?;
        self.games.set_creator(game.id, creator.id).await?;

        let game = self.require_game(&key).await?;
        info!(game_key = %game.key, number_of_players, username, "Game created");
        Ok(game)
    }

    /// Seat a newcomer at the next free seat above the highest occupied one.
    pub async fn join_game(&self, key: &str, username: &str) -> GameResult<Player> {
        debug!(game_key = key, username, "Joining game");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_not_started(&game)?;
        if game.is_full() {
            return Err(GameError::game_full());
        }
        if game.player_by_username(username).is_some() {
            return Err(GameError::username_taken(username));
        }

        // Highest seat + 1, not count + 1: a pre-start removal leaves a gap,
        // and count + 1 would collide with a still-occupied seat. Seat
        // numbers only grow under join/remove churn, so the add can hit the
        // top of the range.
        let seat = game
            .highest_seat()
            .checked_add(1)
            .ok_or_else(GameError::game_full)?;
        let player = self.players.create_player(game.id, username, seat).await?;

        info!(game_key = key, username, seat, "Player joined");
        self.notifier.broadcast(key, GameEvent::PlayerListChanged).await;
        Ok(player)
    }

    /// Remove a player from the lobby. Creator-only; the vacated seat stays
    /// empty until the game starts.
    pub async fn remove_player(
        &self,
        key: &str,
        username: &str,
        acting_username: &str,
    ) -> GameResult<Game> {
        debug!(game_key = key, username, acting_username, "Removing player");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_not_started(&game)?;
        Self::ensure_creator(&game, acting_username)?;
        let target = Self::require_player(&game, username)?;

        self.players.remove_player(game.id, target.id).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, username, "Player removed");
        self.notifier.broadcast(key, GameEvent::PlayerListChanged).await;
        Ok(game)
    }

    /// Swap a player with the seat above. Creator-only; the top seat cannot
    /// move further up. Across a gap the player simply takes the vacant seat.
    pub async fn move_player_up(
        &self,
        key: &str,
        username: &str,
        acting_username: &str,
    ) -> GameResult<Game> {
        debug!(game_key = key, username, acting_username, "Moving player up");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_not_started(&game)?;
        Self::ensure_creator(&game, acting_username)?;
        let player = Self::require_player(&game, username)?;

        if player.seat >= game.highest_seat() {
            return Err(GameError::cannot_move_up(username));
        }
        if let Some(neighbor) = game.player_by_seat(player.seat + 1) {
            self.players.update_seat(neighbor.id, player.seat).await?;
        }
        self.players.update_seat(player.id, player.seat + 1).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, username, "Player moved up");
        self.notifier.broadcast(key, GameEvent::PlayerListChanged).await;
        Ok(game)
    }

    /// Swap a player with the seat below. Creator-only; seat 1 cannot move
    /// further down.
    pub async fn move_player_down(
        &self,
        key: &str,
        username: &str,
        acting_username: &str,
    ) -> GameResult<Game> {
        debug!(game_key = key, username, acting_username, "Moving player down");
        let _guard = self.locks.acquire(key).await;

        let game = self.require_game(key).await?;
        Self::ensure_not_started(&game)?;
        Self::ensure_creator(&game, acting_username)?;
        let player = Self::require_player(&game, username)?;

        if player.seat <= 1 {
            return Err(GameError::cannot_move_down(username));
        }
        if let Some(neighbor) = game.player_by_seat(player.seat - 1) {
            self.players.update_seat(neighbor.id, player.seat).await?;
        }
        self.players.update_seat(player.id, player.seat - 1).await?;

        let game = self.require_game(key).await?;
        info!(game_key = key, username, "Player moved down");
        self.notifier.broadcast(key, GameEvent::PlayerListChanged).await;
        Ok(game)
    }
}
