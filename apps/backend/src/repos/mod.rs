//! Storage trait seams. The engine talks to persistence only through these;
//! `adapters` holds the implementations.

pub mod bids;
pub mod games;
pub mod players;
pub mod rounds;

pub use bids::BidRepo;
pub use games::{require_game, GameRepo};
pub use players::PlayerRepo;
pub use rounds::RoundRepo;
