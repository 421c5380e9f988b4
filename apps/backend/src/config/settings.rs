use std::env;

use crate::errors::{GameError, GameResult};

/// Upper bound on the player count a game may be created with when no
/// environment override is present.
pub const DEFAULT_MAX_PLAYERS: u8 = 6;

/// Length of freshly generated game keys when no environment override is
/// present.
pub const DEFAULT_GAME_KEY_LENGTH: usize = 5;

/// Tunables of the game engine.
///
/// Everything has a sensible default; environment variables override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Largest allowed player count at game creation.
    pub max_players: u8,
    /// Length of generated game keys before any collision fallback kicks in.
    pub game_key_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            game_key_length: DEFAULT_GAME_KEY_LENGTH,
        }
    }
}

impl Settings {
    /// Build settings from `WIZSCORE_MAX_PLAYERS` and
    /// `WIZSCORE_GAME_KEY_LENGTH`, falling back to the defaults for unset
    /// variables. Set-but-unparsable values are an error rather than a
    /// silent fallback.
    pub fn from_env() -> GameResult<Self> {
        Ok(Self {
            max_players: parsed_var("WIZSCORE_MAX_PLAYERS", DEFAULT_MAX_PLAYERS)?,
            game_key_length: parsed_var("WIZSCORE_GAME_KEY_LENGTH", DEFAULT_GAME_KEY_LENGTH)?,
        })
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> GameResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| GameError::config(format!("{name} has unparsable value '{raw}'"))),
        Err(_) => Ok(default),
    }
}
