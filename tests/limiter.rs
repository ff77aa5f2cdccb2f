use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tgrab::download::run_bounded;

/// Track how many tasks overlap while the pool drains.
async fn high_water_mark(items: usize, limit: usize) -> usize {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let high_water = Arc::new(AtomicUsize::new(0));

    let in_flight_task = in_flight.clone();
    let high_water_task = high_water.clone();
    let results = run_bounded((0..items).collect(), limit, move |i: usize| {
        let in_flight = in_flight_task.clone();
        let high_water = high_water_task.clone();
        async move {
            let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            high_water.fetch_max(current, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            i
        }
    })
    .await;

    assert_eq!(results.len(), items);
    high_water.load(Ordering::SeqCst)
}

#[tokio::test]
async fn test_never_exceeds_limit() {
    assert!(high_water_mark(32, 4).await <= 4);
}

#[tokio::test]
async fn test_limit_one_is_sequential() {
    assert_eq!(high_water_mark(8, 1).await, 1);
}

#[tokio::test]
async fn test_zero_limit_is_clamped_to_one() {
    assert_eq!(high_water_mark(4, 0).await, 1);
}

#[tokio::test]
async fn test_limit_above_item_count_completes_everything() {
    assert!(high_water_mark(3, 64).await <= 3);
}

#[tokio::test]
async fn test_results_are_collected_from_every_task() {
    let mut results = run_bounded(vec![1, 2, 3, 4, 5], 2, |i: i32| async move { i * 10 }).await;
    results.sort();
    assert_eq!(results, vec![10, 20, 30, 40, 50]);
}
