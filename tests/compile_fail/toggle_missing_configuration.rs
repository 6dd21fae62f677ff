//! Test that wrapping without a configuration produces a compile error.

use togglepoint::toggle_point;

fn main() {
    // toggle_point requires a configuration
    let _ = toggle_point(|_: &(), value: i32| value);
}
