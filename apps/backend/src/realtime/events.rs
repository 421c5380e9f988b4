//! Events the engine emits whenever game state changes. Tagged so a
//! transport can serialize them straight onto the wire.

use serde::{Deserialize, Serialize};

use crate::domain::game::Trump;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Somebody joined, left, or changed seats in the lobby.
    PlayerListChanged,
    GameStarted,
    BidSubmitted { username: String },
    SuitChanged { trump: Trump },
    RoundFinished { round_number: u8 },
    BidResultSubmitted { username: String },
    NextRoundStarted { round_number: u8 },
}
