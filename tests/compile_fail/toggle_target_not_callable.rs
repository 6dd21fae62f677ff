//! Test that a non-callable target produces a compile error.

use togglepoint::toggle::ToggleConfig;
use togglepoint::toggle_point;

fn main() {
    let wrapped = toggle_point(
        42,
        ToggleConfig::new(|_: &(), _: &i32| true, |_: &(), value: i32| value),
    );

    // 42 is not callable
    let _ = wrapped.call(&(), 1);
}
