//! Whole-flow service tests: multi-round play, full games, event streams,
//! and races on shared game state.

use crate::domain::Trump;
use crate::errors::ErrorCode;
use crate::realtime::GameEvent;
use crate::test_support::{engine, seed_started};

#[tokio::test]
async fn two_rounds_of_play_produce_the_expected_totals() {
    let fixture = engine();
    let key = seed_started(&fixture, 3).await.unwrap();

    // Round 1, dealer p1: p1 hits a bid of one, p2 hits zero, p3 misses by
    // one.
    fixture
        .service
        .change_trump(&key, "p1", Trump::Hearts)
        .await
        .unwrap();
    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    fixture.service.submit_bid(&key, "p2", 0).await.unwrap();
    fixture.service.submit_bid(&key, "p3", 1).await.unwrap();
    fixture.service.finish_round(&key).await.unwrap();
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
    fixture
        .service
        .submit_bid_result(&key, "p3", 0)
        .await
        .unwrap();
    fixture.service.start_next_round(&key, "p2").await.unwrap();

    // Round 2, dealer p2: p2 hits two, p3 and p1 each miss by one.
    fixture.service.submit_bid(&key, "p2", 2).await.unwrap();
    fixture.service.submit_bid(&key, "p3", 0).await.unwrap();
    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    fixture
        .service
        .submit_bid_result(&key, "p2", 2)
        .await
        .unwrap();
    fixture
        .service
        .submit_bid_result(&key, "p3", 1)
        .await
        .unwrap();
    fixture
        .service
        .submit_bid_result(&key, "p1", 0)
        .await
        .unwrap();

    let board = fixture.service.scoreboard(&key).await.unwrap();
    let totals: Vec<(&str, i16)> = board
        .player_scores
        .iter()
        .map(|p| (p.username.as_str(), p.score))
        .collect();
    assert_eq!(totals, vec![("p1", 20), ("p2", 60), ("p3", -20)]);
    assert_eq!(board.round_scores.len(), 6);
}

#[tokio::test]
async fn a_two_player_game_runs_to_its_twentieth_round() {
    let fixture = engine();
    let key = seed_started(&fixture, 2).await.unwrap();

    for round in 1..=20u8 {
        assert_eq!(
            fixture.service.current_round_number(&key).await.unwrap(),
            round
        );
        let dealer = if round % 2 == 1 { "p1" } else { "p2" };
        let other = if round % 2 == 1 { "p2" } else { "p1" };
        assert_eq!(
            fixture.service.current_dealer_username(&key).await.unwrap(),
            dealer
        );

        fixture.service.submit_bid(&key, dealer, 0).await.unwrap();
        fixture.service.submit_bid(&key, other, 0).await.unwrap();
        fixture
            .service
            .submit_bid_result(&key, dealer, 0)
            .await
            .unwrap();
        fixture
            .service
            .submit_bid_result(&key, other, 1)
            .await
            .unwrap();

        assert_eq!(
            fixture.service.is_last_round(&key).await.unwrap(),
            round == 20
        );
        assert_eq!(
            fixture.service.is_game_finished(&key).await.unwrap(),
            round == 20
        );
        if round < 20 {
            fixture.service.start_next_round(&key, other).await.unwrap();
        }
    }

    // Ten dealt rounds hit a zero bid (+20 each), ten missed by one trick
    // (-10 each), for both players alike.
    let board = fixture.service.scoreboard(&key).await.unwrap();
    let totals: Vec<i16> = board.player_scores.iter().map(|p| p.score).collect();
    assert_eq!(totals, vec![100, 100]);
}

#[tokio::test]
async fn a_full_round_emits_the_expected_event_sequence() {
    let fixture = engine();
    let key = seed_started(&fixture, 2).await.unwrap();
    let (_token, mut rx) = fixture.notifier.subscribe(&key);

    fixture
        .service
        .change_trump(&key, "p1", Trump::Clubs)
        .await
        .unwrap();
    fixture.service.submit_bid(&key, "p1", 1).await.unwrap();
    fixture.service.submit_bid(&key, "p2", 0).await.unwrap();
    fixture.service.finish_round(&key).await.unwrap();
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
    fixture.service.start_next_round(&key, "p2").await.unwrap();

    let expected = [
        GameEvent::SuitChanged {
            trump: Trump::Clubs,
        },
        GameEvent::BidSubmitted {
            username: "p1".into(),
        },
        GameEvent::BidSubmitted {
            username: "p2".into(),
        },
        GameEvent::RoundFinished { round_number: 1 },
        GameEvent::BidResultSubmitted {
            username: "p1".into(),
        },
        GameEvent::BidResultSubmitted {
            username: "p2".into(),
        },
        GameEvent::NextRoundStarted { round_number: 2 },
    ];
    for event in expected {
        assert_eq!(rx.try_recv().unwrap(), event);
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_joins_get_distinct_seats() {
    let fixture = engine();
    let game = fixture.service.create_game(6, "host").await.unwrap();
    let key = game.key.clone();

    let mut handles = Vec::new();
    for n in 0..5 {
        let service = fixture.service.clone();
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            service.join_game(&key, &format!("guest{n}")).await
        }));
    }

    let mut seats = Vec::new();
    for handle in handles {
        seats.push(handle.await.unwrap().unwrap().seat);
    }
    seats.sort_unstable();
    assert_eq!(seats, vec![2, 3, 4, 5, 6]);
}

#[tokio::test(flavor = "multi_thread")]
async fn racing_duplicate_joins_admit_exactly_one() {
    let fixture = engine();
    let game = fixture.service.create_game(4, "host").await.unwrap();
    let key = game.key.clone();

    let mut handles = Vec::new();
    for _ in 0..2 {
        let service = fixture.service.clone();
        let key = key.clone();
        handles.push(tokio::spawn(
            async move { service.join_game(&key, "dup").await },
        ));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let admitted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(admitted, 1);
    let rejected = results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .filter(|e| e.code() == ErrorCode::UsernameTaken)
        .count();
    assert_eq!(rejected, 1);
}
