//! Service tests for the read-side queries.

use crate::domain::Trump;
use crate::errors::ErrorCode;
use crate::test_support::{engine, seed_started};

#[tokio::test]
async fn game_by_key_returns_none_for_unknown_keys() {
    let fixture = engine();

    assert!(fixture
        .service
        .game_by_key("ZZZZZ")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn queries_for_unknown_keys_fail() {
    let fixture = engine();

    let err = fixture.service.scoreboard("ZZZZZ").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let err = fixture
        .service
        .current_round_number("ZZZZZ")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
}

#[tokio::test]
async fn turn_queries_follow_the_bidding() {
    let fixture = engine();
    let key = seed_started(&fixture, 3).await.unwrap();

    assert_eq!(
        fixture.service.current_dealer_username(&key).await.unwrap(),
        "p1"
    );
    assert_eq!(
        fixture.service.next_bidder_username(&key).await.unwrap(),
        "p1"
    );
    assert_eq!(
        fixture.service.next_dealer_username(&key).await.unwrap(),
        "p2"
    );

    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    assert_eq!(
        fixture.service.next_bidder_username(&key).await.unwrap(),
        "p2"
    );

    fixture.service.submit_bid(&key, "p2", 0).await.unwrap();
    fixture.service.submit_bid(&key, "p3", 0).await.unwrap();
    let err = fixture
        .service
        .next_bidder_username(&key)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoundFinished);
}

#[tokio::test]
async fn round_state_queries_track_progress() {
    let fixture = engine();
    let key = seed_started(&fixture, 2).await.unwrap();

    assert_eq!(fixture.service.current_round_number(&key).await.unwrap(), 1);
    assert_eq!(
        fixture.service.current_trump(&key).await.unwrap(),
        Trump::None
    );
    assert!(!fixture.service.all_bids_placed(&key).await.unwrap());
    assert!(!fixture.service.is_round_finished(&key).await.unwrap());

    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    fixture.service.submit_bid(&key, "p2", 0).await.unwrap();
    assert!(fixture.service.all_bids_placed(&key).await.unwrap());
    assert!(!fixture.service.is_round_finished(&key).await.unwrap());

    fixture
        .service
        .submit_bid_result(&key, "p1", 1)
        .await
        .unwrap();
    fixture
        .service
        .submit_bid_result(&key, "p2", 0)
        .await
        .unwrap();
    assert!(fixture.service.is_round_finished(&key).await.unwrap());
}

#[tokio::test]
async fn bid_summary_lists_bids_in_placement_order() {
    let fixture = engine();
    let key = seed_started(&fixture, 3).await.unwrap();
    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    fixture.service.submit_bid(&key, "p2", 0).await.unwrap();

    let lines = fixture.service.round_bid_summary(&key).await.unwrap();

    assert_eq!(lines, vec!["p1 bid 1".to_string(), "p2 bid 0".to_string()]);
}

#[tokio::test]
async fn scoreboard_reflects_recorded_rounds() {
    let fixture = engine();
    let key = seed_started(&fixture, 2).await.unwrap();
    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    fixture.service.submit_bid(&key, "p2", 0).await.unwrap();
    fixture
        .service
        .submit_bid_result(&key, "p1", 1)
        .await
        .unwrap();
    fixture
        .service
        .submit_bid_result(&key, "p2", 1)
        .await
        .unwrap();

    let board = fixture.service.scoreboard(&key).await.unwrap();

    // p1 hit a bid of one (30), p2 bid zero and took a trick (-10).
    let totals: Vec<(&str, i16)> = board
        .player_scores
        .iter()
        .map(|p| (p.username.as_str(), p.score))
        .collect();
    assert_eq!(totals, vec![("p1", 30), ("p2", -10)]);
    assert_eq!(board.round_scores.len(), 2);
}

#[tokio::test]
async fn queries_before_start_fail_or_stay_lenient() {
    let fixture = engine();
    let game = fixture.service.create_game(3, "p1").await.unwrap();

    let err = fixture
        .service
        .current_round_number(&game.key)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotStarted);

    let err = fixture
        .service
        .current_trump(&game.key)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotStarted);

    let err = fixture
        .service
        .current_dealer_username(&game.key)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotStarted);

    // The finish checks read as "not yet" rather than failing.
    assert!(!fixture.service.is_last_round(&game.key).await.unwrap());
    assert!(!fixture.service.is_game_finished(&game.key).await.unwrap());

    // An empty scoreboard still lists the seated player.
    let board = fixture.service.scoreboard(&game.key).await.unwrap();
    assert!(board.round_scores.is_empty());
    assert_eq!(board.player_scores.len(), 1);
    assert_eq!(board.player_scores[0].score, 0);
}
