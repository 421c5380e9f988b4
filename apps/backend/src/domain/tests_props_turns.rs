//! Property tests for turn rotation (pure domain).

use proptest::prelude::*;

use crate::domain::test_fixtures::{open_next_round, place_bid, started_game};
use crate::domain::test_prelude;
use crate::domain::turns::{next_bidder, next_dealer};
use crate::errors::ErrorCode;

/// Seat that is `offset` bids after `dealer_seat` at a table of `n`.
fn seat_at(n: u8, dealer_seat: u8, offset: u8) -> u8 {
    (dealer_seat - 1 + offset) % n + 1
}

fn game_with_dealer(n: u8, dealer_seat: u8) -> crate::domain::game::Game {
    let mut game = started_game(n);
    if dealer_seat != 1 {
        open_next_round(&mut game, dealer_seat);
    }
    game
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// After k bids the turn is k seats past the dealer, wrapping at the top.
    #[test]
    fn prop_turn_follows_seat_order(n in 2u8..=6, dealer in 1u8..=6, k in 0u8..=5) {
        prop_assume!(dealer <= n && k < n);
        let mut game = game_with_dealer(n, dealer);
        for offset in 0..k {
            place_bid(&mut game, seat_at(n, dealer, offset), 0);
        }

        let bidder = next_bidder(&game).unwrap();
        prop_assert_eq!(bidder.seat, seat_at(n, dealer, k));
    }

    /// Once everyone has bid there is no next bidder.
    #[test]
    fn prop_full_round_finishes_bidding(n in 2u8..=6, dealer in 1u8..=6) {
        prop_assume!(dealer <= n);
        let mut game = game_with_dealer(n, dealer);
        for offset in 0..n {
            place_bid(&mut game, seat_at(n, dealer, offset), 0);
        }

        let err = next_bidder(&game).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::RoundFinished);
    }

    /// The deal always moves exactly one seat up, wrapping at the top.
    #[test]
    fn prop_deal_rotates_one_seat(n in 2u8..=6, dealer in 1u8..=6) {
        prop_assume!(dealer <= n);
        let game = game_with_dealer(n, dealer);

        let next = next_dealer(&game).unwrap();
        prop_assert_eq!(next.seat, seat_at(n, dealer, 1));
    }
}
