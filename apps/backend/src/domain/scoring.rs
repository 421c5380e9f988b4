//! Scoring: points per bid and the cumulative scoreboard.

use crate::domain::game::Game;

/// Points one bid is worth once the round is played out.
///
/// Hitting the bid exactly pays a flat 20 plus 10 per trick bid; missing
/// costs 10 per trick of difference, in either direction. A bid with no
/// recorded result scores nothing yet.
pub fn score_for_bid(bid_value: u8, actual_value: Option<u8>) -> i16 {
    match actual_value {
        None => 0,
        Some(actual) if actual == bid_value => 20 + 10 * i16::from(bid_value),
        Some(actual) => -10 * (i16::from(actual) - i16::from(bid_value)).abs(),
    }
}

/// One bid's line on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScore {
    pub round_number: u8,
    pub username: String,
    pub bid_value: u8,
    pub actual_value: Option<u8>,
    pub score: i16,
}

/// A player's running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub username: String,
    pub score: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub round_scores: Vec<RoundScore>,
    pub player_scores: Vec<PlayerScore>,
}

/// Flatten every round's bids into scoreboard lines and total them up per
/// player. Totals come out in seat order and include players who have not
/// scored anything yet. Bids whose player is no longer seated are skipped.
pub fn scoreboard(game: &Game) -> Scoreboard {
    let mut round_scores = Vec::new();
    for round in &game.rounds {
        for bid in &round.bids {
            let Some(player) = game.player_by_id(bid.player_id) else {
                continue;
            };
            round_scores.push(RoundScore {
                round_number: round.round_number,
                username: player.username.clone(),
                bid_value: bid.bid_value,
                actual_value: bid.actual_value,
                score: score_for_bid(bid.bid_value, bid.actual_value),
            });
        }
    }

    let player_scores = game
        .players
        .iter()
        .map(|player| PlayerScore {
            username: player.username.clone(),
            score: round_scores
                .iter()
                .filter(|line| line.username == player.username)
                .map(|line| line.score)
                .sum(),
        })
        .collect();

    Scoreboard {
        round_scores,
        player_scores,
    }
}
