//! Error codes for the game engine.
//!
//! Every failure an operation can report is listed here. Add new codes here;
//! never pass ad-hoc strings as error codes.
//!
//! All codes are SCREAMING_SNAKE_CASE and are the stable identifiers callers
//! and transports key on.

use core::fmt;

/// Centralized error codes for the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lookup failures
    /// No game with the given key
    GameNotFound,
    /// No player with the given username in this game
    PlayerNotFound,
    /// A stored reference (dealer, last bidder) resolves to nothing
    NotFound,

    // Lobby rules
    /// The game already has its full complement of players
    GameFull,
    /// Another player in this game already uses the username
    UsernameTaken,
    /// Requested player count is outside the allowed range
    TooManyPlayers,
    /// Only the game creator may do this
    NotCreator,
    /// Only the game creator may start the game
    OnlyCreatorCanStart,
    /// The player is already at the top seat
    CannotMoveUp,
    /// The player is already at seat 1
    CannotMoveDown,

    // Game state
    /// The game has not started yet
    NotStarted,
    /// The game has already started
    AlreadyStarted,

    // Turn and round rules
    /// Only the current dealer may do this
    NotDealer,
    /// Only the next round's dealer may do this
    NotNextDealer,
    /// It is another player's turn to bid
    OutOfTurn,
    /// The player already placed a bid this round
    AlreadyBid,
    /// Bid exceeds the number of tricks in the round
    BidTooHigh,
    /// Recorded result exceeds the number of tricks in the round
    ActualTooHigh,
    /// The player has no bid in the current round
    NoBid,
    /// The round is not ready for this step yet
    RoundNotFinished,
    /// Every player has already bid this round
    RoundFinished,

    // Input parsing
    /// Unrecognized trump suit name
    InvalidTrump,

    // System
    /// Could not find an unused game key
    KeySpaceExhausted,
    /// Invalid configuration value
    ConfigError,
    /// Storage layer failure
    StorageError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Lookup failures
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Lobby rules
            Self::GameFull => "GAME_FULL",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::TooManyPlayers => "TOO_MANY_PLAYERS",
            Self::NotCreator => "NOT_CREATOR",
            Self::OnlyCreatorCanStart => "ONLY_CREATOR_CAN_START",
            Self::CannotMoveUp => "CANNOT_MOVE_UP",
            Self::CannotMoveDown => "CANNOT_MOVE_DOWN",

            // Game state
            Self::NotStarted => "NOT_STARTED",
            Self::AlreadyStarted => "ALREADY_STARTED",

            // Turn and round rules
            Self::NotDealer => "NOT_DEALER",
            Self::NotNextDealer => "NOT_NEXT_DEALER",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::AlreadyBid => "ALREADY_BID",
            Self::BidTooHigh => "BID_TOO_HIGH",
            Self::ActualTooHigh => "ACTUAL_TOO_HIGH",
            Self::NoBid => "NO_BID",
            Self::RoundNotFinished => "ROUND_NOT_FINISHED",
            Self::RoundFinished => "ROUND_FINISHED",

            // Input parsing
            Self::InvalidTrump => "INVALID_TRUMP",

            // System
            Self::KeySpaceExhausted => "KEY_SPACE_EXHAUSTED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StorageError => "STORAGE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
