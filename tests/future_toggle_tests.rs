#![cfg(feature = "async")]
//! Integration tests for the asynchronous toggle strategy.
//!
//! Tests cover:
//! - Dispatch through future-returning callables
//! - Full resolution of the evaluator before either branch starts
//! - Laziness of the wrapper's call future
//! - Failure propagation out of the wrapped callables

use rstest::rstest;
use std::future::ready;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use togglepoint::toggle::{AsyncMode, ToggleConfig};
use togglepoint::toggle_point;

struct Counter {
    count: i32,
}

// =============================================================================
// Dispatch
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_future_toggle_runs_the_target_by_default() {
    let increment = toggle_point(
        |counter: &Counter, paragraphs: i32| ready(paragraphs + counter.count + 1),
        ToggleConfig::new(
            |_: &Counter, paragraphs: &i32| ready(*paragraphs == 1),
            |counter: &Counter, _: i32| ready(counter.count),
        )
        .mode::<AsyncMode>(),
    );

    assert_eq!(increment.call(&Counter { count: 1 }, 2).await, 4);
}

#[rstest]
#[tokio::test]
async fn test_future_toggle_redirects_when_the_evaluator_resolves_true() {
    let increment = toggle_point(
        |counter: &Counter, paragraphs: i32| ready(paragraphs + counter.count + 1),
        ToggleConfig::new(
            |_: &Counter, paragraphs: &i32| ready(*paragraphs == 1),
            |_: &Counter, _: i32| ready(1),
        )
        .mode::<AsyncMode>(),
    );

    assert_eq!(increment.call(&Counter { count: 155 }, 1).await, 1);
}

#[rstest]
#[tokio::test]
async fn test_future_toggle_resolves_a_suspended_evaluator() {
    // The decision can come from an actual async source, not just a ready value
    let wrapped = toggle_point(
        |_: &(), value: i32| ready(value * 2),
        ToggleConfig::new(
            |_: &(), value: &i32| {
                let negative = *value < 0;
                async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    negative
                }
            },
            |_: &(), _: i32| ready(0),
        )
        .mode::<AsyncMode>(),
    );

    assert_eq!(wrapped.call(&(), 21).await, 42);
    assert_eq!(wrapped.call(&(), -3).await, 0);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_the_branch_waits_for_the_evaluator() {
    let order = Arc::new(Mutex::new(Vec::new()));

    let evaluator_order = Arc::clone(&order);
    let target_order = Arc::clone(&order);

    let wrapped = toggle_point(
        move |_: &(), value: i32| {
            // Runs only once the decision future has fully resolved
            target_order.lock().unwrap().push("branch");
            ready(value)
        },
        ToggleConfig::new(
            move |_: &(), _: &i32| {
                let evaluator_order = Arc::clone(&evaluator_order);
                async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    evaluator_order.lock().unwrap().push("evaluated");
                    false
                }
            },
            |_: &(), _: i32| ready(0),
        )
        .mode::<AsyncMode>(),
    );

    assert_eq!(wrapped.call(&(), 7).await, 7);
    assert_eq!(*order.lock().unwrap(), vec!["evaluated", "branch"]);
}

#[rstest]
#[tokio::test]
async fn test_the_unchosen_branch_is_never_constructed() {
    let then_constructed = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&then_constructed);
    let wrapped = toggle_point(
        |_: &(), value: i32| ready(value),
        ToggleConfig::new(
            |_: &(), _: &i32| ready(false),
            move |_: &(), _: i32| {
                flag.store(true, Ordering::SeqCst);
                ready(0)
            },
        )
        .mode::<AsyncMode>(),
    );

    assert_eq!(wrapped.call(&(), 3).await, 3);
    assert!(!then_constructed.load(Ordering::SeqCst));
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_calling_builds_a_lazy_future() {
    let evaluated = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&evaluated);
    let wrapped = toggle_point(
        |_: &(), value: i32| ready(value),
        ToggleConfig::new(
            move |_: &(), _: &i32| {
                flag.store(true, Ordering::SeqCst);
                ready(false)
            },
            |_: &(), _: i32| ready(0),
        )
        .mode::<AsyncMode>(),
    );

    // An unpolled call future runs nothing, dropped or not
    let pending = wrapped.call(&(), 1);
    assert!(!evaluated.load(Ordering::SeqCst));
    drop(pending);
    assert!(!evaluated.load(Ordering::SeqCst));

    assert_eq!(wrapped.call(&(), 1).await, 1);
    assert!(evaluated.load(Ordering::SeqCst));
}

// =============================================================================
// Failure Propagation
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_async_errors_reach_the_caller_unchanged() {
    let wrapped = toggle_point(
        |_: &(), value: i32| {
            ready(if value > 100 {
                Err("out of range")
            } else {
                Ok(value)
            })
        },
        ToggleConfig::new(
            |_: &(), value: &i32| ready(*value < 0),
            |_: &(), _: i32| ready(Ok(0)),
        )
        .mode::<AsyncMode>(),
    );

    assert_eq!(wrapped.call(&(), 7).await, Ok(7));
    assert_eq!(wrapped.call(&(), 101).await, Err("out of range"));
    assert_eq!(wrapped.call(&(), -1).await, Ok(0));
}
