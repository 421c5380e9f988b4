//! The engine's error value: a stable code plus a human-readable message.
//!
//! Operations never panic on rule violations; they return a `GameError`
//! carrying an [`ErrorCode`] callers can match on and a message fit for
//! showing to a player. Constructors exist for every rule failure so call
//! sites stay one line.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Result alias used by every engine operation and storage trait.
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct GameError {
    code: ErrorCode,
    message: String,
}

impl GameError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Lookup failures

    pub fn game_not_found(key: &str) -> Self {
        Self::new(
            ErrorCode::GameNotFound,
            format!("no game exists with key {key}"),
        )
    }

    pub fn player_not_found(username: &str) -> Self {
        Self::new(
            ErrorCode::PlayerNotFound,
            format!("no player named {username} in this game"),
        )
    }

    /// A stored reference points at nothing, e.g. a round's dealer id with no
    /// matching seated player. Indicates inconsistent storage, not bad input.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, detail)
    }

    // Lobby rules

    pub fn game_full() -> Self {
        Self::new(ErrorCode::GameFull, "this game is already full")
    }

    pub fn username_taken(username: &str) -> Self {
        Self::new(
            ErrorCode::UsernameTaken,
            format!("the name {username} is already taken in this game"),
        )
    }

    pub fn too_many_players(max: u8) -> Self {
        Self::new(
            ErrorCode::TooManyPlayers,
            format!("player count must be between 2 and {max}"),
        )
    }

    pub fn not_creator(username: &str) -> Self {
        Self::new(
            ErrorCode::NotCreator,
            format!("{username} is not the creator of this game"),
        )
    }

    pub fn only_creator_can_start(username: &str) -> Self {
        Self::new(
            ErrorCode::OnlyCreatorCanStart,
            format!("{username} cannot start the game, only the creator can"),
        )
    }

    pub fn cannot_move_up(username: &str) -> Self {
        Self::new(
            ErrorCode::CannotMoveUp,
            format!("{username} is already at the top seat"),
        )
    }

    pub fn cannot_move_down(username: &str) -> Self {
        Self::new(
            ErrorCode::CannotMoveDown,
            format!("{username} is already at seat 1"),
        )
    }

    // Game state

    pub fn not_started() -> Self {
        Self::new(ErrorCode::NotStarted, "the game has not started yet")
    }

    pub fn already_started() -> Self {
        Self::new(ErrorCode::AlreadyStarted, "the game has already started")
    }

    // Turn and round rules

    pub fn not_dealer(username: &str) -> Self {
        Self::new(
            ErrorCode::NotDealer,
            format!("{username} is not the dealer of this round"),
        )
    }

    pub fn not_next_dealer(username: &str) -> Self {
        Self::new(
            ErrorCode::NotNextDealer,
            format!("{username} is not the dealer of the next round"),
        )
    }

    pub fn out_of_turn(username: &str) -> Self {
        Self::new(
            ErrorCode::OutOfTurn,
            format!("it is not {username}'s turn to bid"),
        )
    }

    pub fn already_bid(username: &str) -> Self {
        Self::new(
            ErrorCode::AlreadyBid,
            format!("{username} already placed a bid this round"),
        )
    }

    pub fn bid_too_high(bid_value: u8, round_number: u8) -> Self {
        Self::new(
            ErrorCode::BidTooHigh,
            format!("cannot bid {bid_value} in a round of {round_number} tricks"),
        )
    }

    pub fn actual_too_high(actual_value: u8, round_number: u8) -> Self {
        Self::new(
            ErrorCode::ActualTooHigh,
            format!("cannot take {actual_value} tricks in a round of {round_number}"),
        )
    }

    pub fn no_bid(username: &str) -> Self {
        Self::new(
            ErrorCode::NoBid,
            format!("{username} has no bid in the current round"),
        )
    }

    pub fn round_not_finished(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::RoundNotFinished, detail)
    }

    pub fn round_finished() -> Self {
        Self::new(
            ErrorCode::RoundFinished,
            "every player has already bid this round",
        )
    }

    // Input parsing

    pub fn invalid_trump(input: &str) -> Self {
        Self::new(
            ErrorCode::InvalidTrump,
            format!("{input} is not a trump suit"),
        )
    }

    // System

    pub fn key_space_exhausted(length: usize) -> Self {
        Self::new(
            ErrorCode::KeySpaceExhausted,
            format!("could not find an unused game key up to length {length}"),
        )
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, detail)
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, detail)
    }
}
