//! Property tests for scoring (pure domain).

use proptest::prelude::*;

use crate::domain::scoring::{score_for_bid, scoreboard};
use crate::domain::test_fixtures::{place_bid, record_actual, started_game};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Hitting the bid always pays 20 plus 10 per trick bid.
    #[test]
    fn prop_exact_bid_formula(bid in 0u8..=20) {
        prop_assert_eq!(score_for_bid(bid, Some(bid)), 20 + 10 * i16::from(bid));
    }

    /// Missing the bid costs 10 per trick of difference and is symmetric:
    /// overbidding by k costs the same as underbidding by k.
    #[test]
    fn prop_missed_bid_symmetric(bid in 0u8..=20, actual in 0u8..=20) {
        prop_assume!(bid != actual);
        let score = score_for_bid(bid, Some(actual));
        let diff = (i16::from(bid) - i16::from(actual)).abs();
        prop_assert_eq!(score, -10 * diff);
        prop_assert_eq!(score, score_for_bid(actual, Some(bid)));
    }

    /// No recorded result, no points, whatever was bid.
    #[test]
    fn prop_unplayed_bid_is_zero(bid in 0u8..=20) {
        prop_assert_eq!(score_for_bid(bid, None), 0);
    }

    /// Player totals are exactly the sum of that player's round lines.
    #[test]
    fn prop_totals_sum_round_lines(
        n in 2u8..=6,
        bids in proptest::collection::vec((0u8..=5, proptest::option::of(0u8..=5)), 2..=6),
    ) {
        let mut game = started_game(n);
        for (seat, (bid, actual)) in (1..=n).zip(bids.iter()) {
            place_bid(&mut game, seat, *bid);
            if let Some(actual) = actual {
                record_actual(&mut game, seat, *actual);
            }
        }

        let board = scoreboard(&game);
        for player_score in &board.player_scores {
            let expected: i16 = board
                .round_scores
                .iter()
                .filter(|line| line.username == player_score.username)
                .map(|line| line.score)
                .sum();
            prop_assert_eq!(player_score.score, expected);
        }
    }
}
