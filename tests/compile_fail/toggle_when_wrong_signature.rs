//! Test that an evaluator consuming the arguments produces a compile error.

use togglepoint::toggle::ToggleConfig;
use togglepoint::toggle_point;

fn main() {
    let wrapped = toggle_point(
        |_: &(), value: i32| value * 2,
        // The evaluator must borrow the arguments, not take them by value
        ToggleConfig::new(|_: &(), value: i32| value > 0, |_: &(), _: i32| 0),
    );

    let _ = wrapped.call(&(), 1);
}
