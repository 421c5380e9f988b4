//! In-memory implementation of the storage seams.
//!
//! Backs the engine in tests and in embedding programs that do not want a
//! database. One `RwLock` guards all tables, so every aggregate load is a
//! consistent snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::game::{Bid, Game, Player, Round, Trump};
use crate::errors::{GameError, GameResult};
use crate::repos::{BidRepo, GameRepo, PlayerRepo, RoundRepo};

#[derive(Debug, Clone)]
struct GameRow {
    id: i64,
    key: String,
    number_of_players: u8,
    creator_player_id: Option<i64>,
    has_started: bool,
}

#[derive(Debug, Clone)]
struct PlayerRow {
    id: i64,
    game_id: i64,
    username: String,
    seat: u8,
}

#[derive(Debug, Clone)]
struct RoundRow {
    id: i64,
    game_id: i64,
    round_number: u8,
    dealer_id: i64,
    trump: Trump,
}

#[derive(Debug, Clone)]
struct BidRow {
    id: i64,
    round_id: i64,
    player_id: i64,
    bid_value: u8,
    actual_value: Option<u8>,
}

#[derive(Debug, Default)]
struct Tables {
    games: HashMap<i64, GameRow>,
    players: HashMap<i64, PlayerRow>,
    rounds: HashMap<i64, RoundRow>,
    bids: HashMap<i64, BidRow>,
    // game key -> game id
    keys: HashMap<String, i64>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn assemble(&self, game_id: i64) -> Option<Game> {
        let row = self.games.get(&game_id)?;

        let mut players: Vec<Player> = self
            .players
            .values()
            .filter(|p| p.game_id == game_id)
            .map(|p| Player {
                id: p.id,
                game_id: p.game_id,
                username: p.username.clone(),
                seat: p.seat,
            })
            .collect();
        players.sort_by_key(|p| p.seat);

        let mut round_rows: Vec<&RoundRow> = self
            .rounds
            .values()
            .filter(|r| r.game_id == game_id)
            .collect();
        round_rows.sort_by_key(|r| r.round_number);

        let rounds = round_rows
            .into_iter()
            .map(|r| {
                // Ids are allocation-ordered, so sorting bids by id yields
                // placement order.
                let mut bids: Vec<Bid> = self
                    .bids
                    .values()
                    .filter(|b| b.round_id == r.id)
                    .map(|b| Bid {
                        id: b.id,
                        round_id: b.round_id,
                        player_id: b.player_id,
                        bid_value: b.bid_value,
                        actual_value: b.actual_value,
                    })
                    .collect();
                bids.sort_by_key(|b| b.id);
                Round {
                    id: r.id,
                    game_id: r.game_id,
                    round_number: r.round_number,
                    dealer_id: r.dealer_id,
                    trump: r.trump,
                    bids,
                }
            })
            .collect();

        Some(Game {
            id: row.id,
            key: row.key.clone(),
            number_of_players: row.number_of_players,
            creator_player_id: row.creator_player_id,
            has_started: row.has_started,
            players,
            rounds,
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepo for MemoryStore {
    async fn create_game(&self, number_of_players: u8, key: &str) -> GameResult<Game> {
        let mut tables = self.tables.write();
        if tables.keys.contains_key(key) {
            return Err(GameError::storage(format!(
                "game key {key} already exists"
            )));
        }
        let id = tables.next_id();
        tables.games.insert(
            id,
            GameRow {
                id,
                key: key.to_string(),
                number_of_players,
                creator_player_id: None,
                has_started: false,
            },
        );
        tables.keys.insert(key.to_string(), id);
        tables
            .assemble(id)
            .ok_or_else(|| GameError::storage("freshly inserted game did not assemble"))
    }

    async fn key_exists(&self, key: &str) -> GameResult<bool> {
        Ok(self.tables.read().keys.contains_key(key))
    }

    async fn find_by_key(&self, key: &str) -> GameResult<Option<Game>> {
        let tables = self.tables.read();
        Ok(tables.keys.get(key).and_then(|id| tables.assemble(*id)))
    }

    async fn set_creator(&self, game_id: i64, player_id: i64) -> GameResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .games
            .get_mut(&game_id)
            .ok_or_else(|| GameError::storage(format!("no game row {game_id}")))?;
        row.creator_player_id = Some(player_id);
        Ok(())
    }

    async fn set_started(&self, game_id: i64) -> GameResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .games
            .get_mut(&game_id)
            .ok_or_else(|| GameError::storage(format!("no game row {game_id}")))?;
        row.has_started = true;
        Ok(())
    }

    async fn set_player_count(&self, game_id: i64, number_of_players: u8) -> GameResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .games
            .get_mut(&game_id)
            .ok_or_else(|| GameError::storage(format!("no game row {game_id}")))?;
        row.number_of_players = number_of_players;
        Ok(())
    }
}

#[async_trait]
impl PlayerRepo for MemoryStore {
    async fn create_player(&self, game_id: i64, username: &str, seat: u8) -> GameResult<Player> {
        let mut tables = self.tables.write();
        if !tables.games.contains_key(&game_id) {
            return Err(GameError::storage(format!("no game row {game_id}")));
        }
        let id = tables.next_id();
        tables.players.insert(
            id,
            PlayerRow {
                id,
                game_id,
                username: username.to_string(),
                seat,
            },
        );
        Ok(Player {
            id,
            game_id,
            username: username.to_string(),
            seat,
        })
    }

    async fn update_seat(&self, player_id: i64, seat: u8) -> GameResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .players
            .get_mut(&player_id)
            .ok_or_else(|| GameError::storage(format!("no player row {player_id}")))?;
        row.seat = seat;
        Ok(())
    }

    async fn remove_player(&self, game_id: i64, player_id: i64) -> GameResult<()> {
        let mut tables = self.tables.write();
        match tables.players.get(&player_id) {
            Some(row) if row.game_id == game_id => {
                tables.players.remove(&player_id);
                Ok(())
            }
            _ => Err(GameError::storage(format!(
                "no player row {player_id} in game {game_id}"
            ))),
        }
    }
}

#[async_trait]
impl RoundRepo for MemoryStore {
    async fn create_round(
        &self,
        game_id: i64,
        round_number: u8,
        dealer_id: i64,
        trump: Trump,
    ) -> GameResult<Round> {
        let mut tables = self.tables.write();
        if !tables.games.contains_key(&game_id) {
            return Err(GameError::storage(format!("no game row {game_id}")));
        }
        let id = tables.next_id();
        tables.rounds.insert(
            id,
            RoundRow {
                id,
                game_id,
                round_number,
                dealer_id,
                trump,
            },
        );
        Ok(Round {
            id,
            game_id,
            round_number,
            dealer_id,
            trump,
            bids: Vec::new(),
        })
    }

    async fn update_trump(&self, round_id: i64, trump: Trump) -> GameResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .rounds
            .get_mut(&round_id)
            .ok_or_else(|| GameError::storage(format!("no round row {round_id}")))?;
        row.trump = trump;
        Ok(())
    }
}

#[async_trait]
impl BidRepo for MemoryStore {
    async fn create_bid(&self, round_id: i64, player_id: i64, bid_value: u8) -> GameResult<Bid> {
        let mut tables = self.tables.write();
        if !tables.rounds.contains_key(&round_id) {
            return Err(GameError::storage(format!("no round row {round_id}")));
        }
        let id = tables.next_id();
        tables.bids.insert(
            id,
            BidRow {
                id,
                round_id,
                player_id,
                bid_value,
                actual_value: None,
            },
        );
        Ok(Bid {
            id,
            round_id,
            player_id,
            bid_value,
            actual_value: None,
        })
    }

    async fn set_actual_value(&self, bid_id: i64, actual_value: u8) -> GameResult<()> {
        let mut tables = self.tables.write();
        let row = tables
            .bids
            .get_mut(&bid_id)
            .ok_or_else(|| GameError::storage(format!("no bid row {bid_id}")))?;
        row.actual_value = Some(actual_value);
        Ok(())
    }
}
