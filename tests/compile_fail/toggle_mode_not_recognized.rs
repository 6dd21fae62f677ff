//! Test that a mode outside the recognized set produces a compile error.

use togglepoint::toggle::ToggleConfig;

struct CustomMode;

fn main() {
    // The mode set is closed; CustomMode is not a ToggleMode
    let _ = ToggleConfig::new(|_: &(), _: &i32| true, |_: &(), value: i32| value)
        .mode::<CustomMode>();
}
