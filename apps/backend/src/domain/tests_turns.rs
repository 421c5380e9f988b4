use crate::domain::test_fixtures::{open_next_round, place_bid, started_game};
use crate::domain::turns::{current_dealer, next_bidder, next_dealer};
use crate::errors::ErrorCode;

#[test]
fn dealer_opens_the_bidding() {
    let game = started_game(4);
    assert_eq!(next_bidder(&game).unwrap().seat, 1);
}

#[test]
fn turn_moves_one_seat_up_after_each_bid() {
    let mut game = started_game(4);
    place_bid(&mut game, 1, 0);
    assert_eq!(next_bidder(&game).unwrap().seat, 2);
    place_bid(&mut game, 2, 1);
    assert_eq!(next_bidder(&game).unwrap().seat, 3);
}

#[test]
fn turn_wraps_past_the_top_seat() {
    let mut game = started_game(3);
    // Round 2 is dealt by seat 2, so the order is 2, 3, then back to 1.
    open_next_round(&mut game, 2);
    place_bid(&mut game, 2, 0);
    place_bid(&mut game, 3, 1);
    assert_eq!(next_bidder(&game).unwrap().seat, 1);
}

#[test]
fn fully_bid_round_has_no_next_bidder() {
    let mut game = started_game(4);
    for seat in 1..=4 {
        place_bid(&mut game, seat, 0);
    }
    let err = next_bidder(&game).unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoundFinished);
}

#[test]
fn deal_passes_one_seat_up_and_wraps() {
    let game = started_game(3);
    assert_eq!(next_dealer(&game).unwrap().seat, 2);

    let mut game = started_game(3);
    open_next_round(&mut game, 3);
    assert_eq!(current_dealer(&game).unwrap().seat, 3);
    assert_eq!(next_dealer(&game).unwrap().seat, 1);
}

#[test]
fn no_rounds_means_not_started() {
    let mut game = started_game(3);
    game.rounds.clear();
    assert_eq!(
        current_dealer(&game).unwrap_err().code(),
        ErrorCode::NotStarted
    );
    assert_eq!(
        next_bidder(&game).unwrap_err().code(),
        ErrorCode::NotStarted
    );
}

#[test]
fn dangling_dealer_reference_is_reported() {
    let mut game = started_game(3);
    game.rounds[0].dealer_id = 99;
    assert_eq!(
        current_dealer(&game).unwrap_err().code(),
        ErrorCode::NotFound
    );
}
