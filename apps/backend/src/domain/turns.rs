//! Who deals, who bids next, who deals next. Pure queries over a loaded
//! aggregate; the service layer owns persistence and broadcasting.

use crate::domain::game::{Game, Player};
use crate::errors::{GameError, GameResult};

/// Dealer of the open round.
pub fn current_dealer(game: &Game) -> GameResult<&Player> {
    let round = game.latest_round().ok_or_else(GameError::not_started)?;
    game.player_by_id(round.dealer_id)
        .ok_or_else(|| GameError::not_found("the round's dealer is not seated in this game"))
}

/// The player whose turn it is to bid.
///
/// The dealer opens the bidding; after that the turn moves one seat up,
/// wrapping past the top seat to seat 1. Once every player has bid there is
/// no next bidder and resolution fails with `ROUND_FINISHED`.
pub fn next_bidder(game: &Game) -> GameResult<&Player> {
    let round = game.latest_round().ok_or_else(GameError::not_started)?;
    if round.bid_complete(game.number_of_players) {
        return Err(GameError::round_finished());
    }

    let Some(last_bid) = round.last_bid() else {
        return current_dealer(game);
    };
    let last_bidder = game
        .player_by_id(last_bid.player_id)
        .ok_or_else(|| GameError::not_found("the last bid's player is not seated in this game"))?;

    seat_after(game, last_bidder.seat)
}

/// Dealer of the round after the open one: one seat up from the current
/// dealer, wrapping to seat 1.
pub fn next_dealer(game: &Game) -> GameResult<&Player> {
    let dealer = current_dealer(game)?;
    seat_after(game, dealer.seat)
}

fn seat_after(game: &Game, seat: u8) -> GameResult<&Player> {
    if seat >= game.number_of_players {
        game.first_seat()
            .ok_or_else(|| GameError::not_found("no players are seated in this game"))
    } else {
        game.player_by_seat(seat + 1)
            .ok_or_else(|| GameError::not_found(format!("no player at seat {}", seat + 1)))
    }
}
