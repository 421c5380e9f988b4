//! Aggregate state of one game: the game row, its seated players, and the
//! rounds played so far. Loaded as a whole from storage; all slices arrive
//! sorted (players by seat, rounds by round number, bids in placement order).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Trump suit of a round. Rounds open with `None` until the dealer picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trump {
    None,
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
            Self::Diamonds => "diamonds",
        };
        f.write_str(name)
    }
}

impl FromStr for Trump {
    type Err = GameError;

    /// Case-insensitive; accepts singular and plural suit names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "club" | "clubs" => Ok(Self::Clubs),
            "heart" | "hearts" => Ok(Self::Hearts),
            "spade" | "spades" => Ok(Self::Spades),
            "diamond" | "diamonds" => Ok(Self::Diamonds),
            _ => Err(GameError::invalid_trump(s)),
        }
    }
}

/// A seated player. `seat` is the 1-based turn-order position; it is dense
/// once the game has started, but removals before start may leave gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub game_id: i64,
    pub username: String,
    pub seat: u8,
}

/// One bid in one round. `actual_value` stays empty until the player reports
/// the tricks they actually won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: i64,
    pub round_id: i64,
    pub player_id: i64,
    pub bid_value: u8,
    pub actual_value: Option<u8>,
}

/// One round. The round number doubles as the number of tricks dealt, so it
/// also bounds bids. Only `trump` may change while the round is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: i64,
    pub game_id: i64,
    pub round_number: u8,
    pub dealer_id: i64,
    pub trump: Trump,
    pub bids: Vec<Bid>,
}

impl Round {
    pub fn last_bid(&self) -> Option<&Bid> {
        self.bids.last()
    }

    pub fn bid_for_player(&self, player_id: i64) -> Option<&Bid> {
        self.bids.iter().find(|b| b.player_id == player_id)
    }

    /// True once every seated player has placed a bid.
    pub fn bid_complete(&self, number_of_players: u8) -> bool {
        self.bids.len() == usize::from(number_of_players)
    }

    /// True once at least one bid exists and every bid has its result
    /// recorded. Distinct from [`Round::bid_complete`]: a round is played
    /// out, not merely bid out.
    pub fn play_complete(&self) -> bool {
        !self.bids.is_empty() && self.bids.iter().all(|b| b.actual_value.is_some())
    }
}

/// Domain model for a game, independent of how it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub key: String,
    pub number_of_players: u8,
    pub creator_player_id: Option<i64>,
    pub has_started: bool,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
}

impl Game {
    /// The open round, if the game has started.
    pub fn latest_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn player_by_id(&self, id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Exact, case-sensitive username match.
    pub fn player_by_username(&self, username: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.username == username)
    }

    pub fn player_by_seat(&self, seat: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.seat == seat)
    }

    /// The player in the lowest seat. Turn order wraps around to them.
    pub fn first_seat(&self) -> Option<&Player> {
        self.players.first()
    }

    /// Highest occupied seat, 0 when nobody is seated.
    pub fn highest_seat(&self) -> u8 {
        self.players.iter().map(|p| p.seat).max().unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= usize::from(self.number_of_players)
    }

    pub fn is_creator(&self, username: &str) -> bool {
        match self.creator_player_id {
            Some(creator_id) => self
                .player_by_username(username)
                .is_some_and(|p| p.id == creator_id),
            None => false,
        }
    }
}
