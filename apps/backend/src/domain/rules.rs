use std::ops::RangeInclusive;

/// Games need at least two players to mean anything.
pub const MIN_PLAYERS: u8 = 2;

// Round schedule: bigger tables run out of cards sooner, so they play fewer
// rounds. Fixed table, not a formula.
pub fn total_rounds(number_of_players: u8) -> u8 {
    match number_of_players {
        6 => 10,
        5 => 12,
        4 => 15,
        _ => 20,
    }
}

pub fn is_last_round(number_of_players: u8, round_number: u8) -> bool {
    round_number == total_rounds(number_of_players)
}

/// The round number is the number of tricks dealt, so it bounds both bids
/// and recorded results.
pub fn trick_range(round_number: u8) -> RangeInclusive<u8> {
    0..=round_number
}
