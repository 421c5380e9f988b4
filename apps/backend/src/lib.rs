#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Game-session engine for Wiz score keeping.
//!
//! The crate is layered: [`domain`] holds pure state and rules, [`repos`]
//! defines the storage seams, [`adapters`] provides the in-memory store,
//! [`realtime`] carries change notifications, and [`services`] orchestrates
//! the lot behind [`GameFlowService`].

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod realtime;
pub mod repos;
pub mod services;
pub mod telemetry;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

pub use adapters::MemoryStore;
pub use config::Settings;
pub use errors::{ErrorCode, GameError, GameResult};
pub use realtime::{GameEvent, GameNotifier, InProcessNotifier, NullNotifier};
pub use services::GameFlowService;

/// One-stop imports for embedding programs.
pub mod prelude {
    pub use crate::adapters::MemoryStore;
    pub use crate::config::Settings;
    pub use crate::domain::{Bid, Game, Player, Round, Scoreboard, Trump};
    pub use crate::errors::{ErrorCode, GameError, GameResult};
    pub use crate::realtime::{GameEvent, GameNotifier, InProcessNotifier, NullNotifier};
    pub use crate::services::GameFlowService;
}

// Runs once per test binary, before any test.
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
