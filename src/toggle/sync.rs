//! Synchronous dispatch of plain callables.

use std::fmt::{self, Debug, Formatter};

/// The synchronous dispatch strategy.
///
/// Produced by [`toggle_point`](crate::toggle_point) for
/// [`SyncMode`](super::SyncMode). Every [`call`](Self::call) consults the
/// evaluator first and then runs exactly one of the two branches, handing it
/// the same context and argument list the caller supplied.
///
/// The wrapper keeps no state of its own, so repeated calls are independent
/// and a changing evaluator answer changes the branch on the very next call.
///
/// # Examples
///
/// ```rust
/// use togglepoint::toggle::ToggleConfig;
/// use togglepoint::toggle_point;
///
/// struct Counter {
///     count: i32,
/// }
///
/// let increment = toggle_point(
///     |counter: &Counter, paragraphs: i32| paragraphs + counter.count + 1,
///     ToggleConfig::new(
///         |_: &Counter, paragraphs: &i32| *paragraphs == 1,
///         |counter: &Counter, _: i32| counter.count,
///     ),
/// );
///
/// assert_eq!(increment.call(&Counter { count: 1 }, 2), 4);
/// assert_eq!(increment.call(&Counter { count: 155 }, 1), 155);
/// ```
#[derive(Clone)]
pub struct FnToggle<F, W, T> {
    target: F,
    when: W,
    then: T,
}

impl<F, W, T> FnToggle<F, W, T> {
    #[inline]
    pub(crate) const fn new(target: F, when: W, then: T) -> Self {
        Self { target, when, then }
    }

    /// Invokes the toggle point.
    ///
    /// The evaluator inspects the arguments by reference, then the chosen
    /// branch consumes them. The unchosen branch is not invoked at all.
    ///
    /// # Arguments
    ///
    /// * `context` - The invocation context shared by all three callables
    /// * `arguments` - The argument list handed to the chosen branch
    #[inline]
    pub fn call<C, A, R>(&self, context: &C, arguments: A) -> R
    where
        F: Fn(&C, A) -> R,
        W: Fn(&C, &A) -> bool,
        T: Fn(&C, A) -> R,
    {
        if (self.when)(context, &arguments) {
            (self.then)(context, arguments)
        } else {
            (self.target)(context, arguments)
        }
    }
}

impl<F, W, T> Debug for FnToggle<F, W, T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnToggle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_on_negative() -> FnToggle<
        impl Fn(&(), i32) -> i32,
        impl Fn(&(), &i32) -> bool,
        impl Fn(&(), i32) -> i32,
    > {
        FnToggle::new(
            |_: &(), value: i32| value * 2,
            |_: &(), value: &i32| *value < 0,
            |_: &(), _: i32| 0,
        )
    }

    #[test]
    fn test_call_runs_the_target_when_the_evaluator_declines() {
        assert_eq!(toggle_on_negative().call(&(), 21), 42);
    }

    #[test]
    fn test_call_runs_the_replacement_when_the_evaluator_accepts() {
        assert_eq!(toggle_on_negative().call(&(), -3), 0);
    }

    #[test]
    fn test_call_threads_the_context_into_every_callable() {
        let toggle = FnToggle::new(
            |base: &i32, value: i32| base + value,
            |base: &i32, value: &i32| *value > *base,
            |base: &i32, _: i32| *base,
        );

        assert_eq!(toggle.call(&10, 3), 13);
        assert_eq!(toggle.call(&10, 30), 10);
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let toggle = toggle_on_negative();

        assert_eq!(toggle.call(&(), -1), 0);
        assert_eq!(toggle.call(&(), 1), 2);
        assert_eq!(toggle.call(&(), -1), 0);
    }

    #[test]
    fn test_call_accepts_tuple_argument_lists() {
        let toggle = FnToggle::new(
            |_: &(), (left, right): (i32, i32)| left + right,
            |_: &(), (left, _): &(i32, i32)| *left == 0,
            |_: &(), (_, right): (i32, i32)| right,
        );

        assert_eq!(toggle.call(&(), (1, 2)), 3);
        assert_eq!(toggle.call(&(), (0, 9)), 9);
    }
}
