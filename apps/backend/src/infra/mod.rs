//! Cross-cutting runtime pieces.

pub mod game_locks;

pub use game_locks::GameLocks;
