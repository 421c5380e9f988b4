//! Domain layer: pure game state and rules.

pub mod game;
pub mod rules;
pub mod scoring;
pub mod turns;

#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use game::{Bid, Game, Player, Round, Trump};
pub use rules::{is_last_round, total_rounds};
pub use scoring::{score_for_bid, scoreboard, PlayerScore, RoundScore, Scoreboard};
