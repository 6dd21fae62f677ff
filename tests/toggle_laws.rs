//! Property-based tests for toggle dispatch.
//!
//! This module verifies that the synchronous strategy satisfies:
//!
//! - **Exclusive dispatch**: every call computes exactly what the chosen
//!   branch computes
//! - **Independence**: each call is routed by its own evaluation
//! - **Transparency**: context and arguments reach the branch unchanged
//! - **Closed mode set**: exactly the recognized mode names parse

use proptest::prelude::*;

use togglepoint::toggle::{Mode, ToggleConfig};
use togglepoint::toggle_point;

// =============================================================================
// Exclusive Dispatch
// =============================================================================

proptest! {
    /// The wrapper computes exactly what the chosen branch computes
    #[test]
    fn prop_dispatch_matches_the_evaluator(
        value in any::<i32>(),
        threshold in any::<i32>(),
        base in any::<i32>(),
    ) {
        let wrapped = toggle_point(
            |base: &i32, value: i32| value.wrapping_mul(2).wrapping_add(*base),
            ToggleConfig::new(
                move |_: &i32, value: &i32| *value < threshold,
                |base: &i32, value: i32| value.wrapping_sub(*base),
            ),
        );

        let expected = if value < threshold {
            value.wrapping_sub(base)
        } else {
            value.wrapping_mul(2).wrapping_add(base)
        };

        prop_assert_eq!(wrapped.call(&base, value), expected);
    }
}

// =============================================================================
// Independence
// =============================================================================

proptest! {
    /// Each call in a burst is routed by its own evaluation
    #[test]
    fn prop_every_call_is_decided_independently(
        values in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let wrapped = toggle_point(
            |_: &(), value: i32| Some(value),
            ToggleConfig::new(|_: &(), value: &i32| *value % 2 == 0, |_: &(), _: i32| None),
        );

        for value in values {
            let expected = if value % 2 == 0 { None } else { Some(value) };
            prop_assert_eq!(wrapped.call(&(), value), expected);
        }
    }
}

// =============================================================================
// Transparency
// =============================================================================

proptest! {
    /// The argument tuple reaches whichever branch runs unchanged
    #[test]
    fn prop_arguments_reach_the_branch_unchanged(
        name in any::<String>(),
        count in 0_usize..8,
    ) {
        let wrapped = toggle_point(
            |_: &(), (name, count): (String, usize)| (name, count),
            ToggleConfig::new(
                |_: &(), (name, _): &(String, usize)| name.len() % 2 == 0,
                |_: &(), (name, count): (String, usize)| (name, count),
            ),
        );

        prop_assert_eq!(wrapped.call(&(), (name.clone(), count)), (name, count));
    }
}

// =============================================================================
// Closed Mode Set
// =============================================================================

proptest! {
    /// Parsing accepts exactly the recognized lowercase names
    #[test]
    fn prop_mode_parsing_matches_the_recognized_set(value in any::<String>()) {
        let recognized = Mode::ALL.iter().any(|mode| mode.as_str() == value);

        prop_assert_eq!(value.parse::<Mode>().is_ok(), recognized);
    }
}

proptest! {
    /// Rejected mode names are preserved in the error
    #[test]
    fn prop_rejected_mode_names_are_reported(value in any::<String>()) {
        prop_assume!(Mode::ALL.iter().all(|mode| mode.as_str() != value));

        let error = value.parse::<Mode>().unwrap_err();
        prop_assert_eq!(error.value(), value.as_str());
    }
}
