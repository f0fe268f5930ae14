//! Integration tests for the async parser host: the background worker must
//! be behaviorally indistinguishable from calling `parse` directly, under
//! both sequential and concurrent load.

use repscript::{parse, ParserHost};

#[tokio::test]
async fn test_host_parses_a_document() {
    let host = ParserHost::new();
    let result = host.parse("5x5 Squat @225lbs\n3x8-12 benchpress rpe 8").await;
    assert!(result.success);
    let workout = result.workout.expect("workout");
    assert_eq!(workout.groups.len(), 2);
}

#[tokio::test]
async fn test_host_matches_sync_parse_on_clean_input() {
    let input = "4x10 Leg Press ss 4x15 leg curls\n225x5,5,3 deadlift";
    let host = ParserHost::new();
    assert_eq!(host.parse(input).await, parse(input));
}

#[tokio::test]
async fn test_host_matches_sync_parse_on_rejected_input() {
    let host = ParserHost::new();
    for input in ["", "   \n  ", "%%% ???"] {
        assert_eq!(host.parse(input).await, parse(input), "input: {input:?}");
    }
}

#[tokio::test]
async fn test_concurrent_requests_each_get_their_own_result() {
    let host = std::sync::Arc::new(ParserHost::new());
    let mut handles = Vec::new();
    for sets in 1..=8u32 {
        let host = std::sync::Arc::clone(&host);
        handles.push(tokio::spawn(async move {
            (sets, host.parse(&format!("{sets}x10 Squat")).await)
        }));
    }
    for handle in handles {
        let (sets, result) = handle.await.expect("task join");
        let workout = result.workout.expect("workout");
        assert_eq!(workout.groups[0].exercises[0].sets.len(), sets as usize);
    }
}

#[tokio::test]
async fn test_guardrail_rejection_travels_through_the_host() {
    let host = ParserHost::new();
    let oversized = "a".repeat(20_000);
    let result = host.parse(&oversized).await;
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
}

#[tokio::test]
async fn test_host_is_reusable_across_many_requests() {
    let host = ParserHost::new();
    for _ in 0..50 {
        assert!(host.parse("3x10 lat pulldown").await.success);
    }
}
