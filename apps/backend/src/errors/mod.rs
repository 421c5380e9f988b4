//! Engine error types.

pub mod error_code;
pub mod game_error;

pub use error_code::ErrorCode;
pub use game_error::{GameError, GameResult};
