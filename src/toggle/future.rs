//! Asynchronous dispatch of future-returning callables.

use std::fmt::{self, Debug, Formatter};
use std::future::Future;

/// The asynchronous dispatch strategy.
///
/// Produced by [`toggle_point`](crate::toggle_point) for
/// [`AsyncMode`](super::AsyncMode). The evaluator returns a future of the
/// branch decision, and [`call`](Self::call) awaits it to completion before
/// constructing either branch future. The two never overlap: until the
/// decision resolves, neither the target nor the replacement has run a
/// single instruction.
///
/// As with every strategy, nothing executes at wrap time and nothing
/// executes at call time either until the returned future is polled.
///
/// # Examples
///
/// ```rust,ignore
/// use togglepoint::toggle::{AsyncMode, ToggleConfig};
/// use togglepoint::toggle_point;
///
/// #[tokio::main]
/// async fn main() {
///     struct Counter {
///         count: i32,
///     }
///
///     let increment = toggle_point(
///         |counter: &Counter, paragraphs: i32| {
///             let count = counter.count;
///             async move { paragraphs + count + 1 }
///         },
///         ToggleConfig::new(
///             |_: &Counter, paragraphs: &i32| {
///                 let matched = *paragraphs == 1;
///                 async move { matched }
///             },
///             |counter: &Counter, _: i32| {
///                 let count = counter.count;
///                 async move { count }
///             },
///         )
///         .mode::<AsyncMode>(),
///     );
///
///     assert_eq!(increment.call(&Counter { count: 1 }, 2).await, 4);
///     assert_eq!(increment.call(&Counter { count: 155 }, 1).await, 155);
/// }
/// ```
#[derive(Clone)]
pub struct FutureToggle<F, W, T> {
    target: F,
    when: W,
    then: T,
}

impl<F, W, T> FutureToggle<F, W, T> {
    #[inline]
    pub(crate) const fn new(target: F, when: W, then: T) -> Self {
        Self { target, when, then }
    }

    /// Invokes the toggle point, resolving the evaluator before the branch.
    ///
    /// The evaluator inspects the context and the arguments synchronously
    /// and hands back an owned future of its decision. Once that future
    /// resolves, the chosen branch consumes the arguments; the unchosen
    /// branch is never constructed.
    ///
    /// # Arguments
    ///
    /// * `context` - The invocation context shared by all three callables
    /// * `arguments` - The argument list handed to the chosen branch
    pub async fn call<C, A, R, WhenFuture, TargetFuture, ThenFuture>(
        &self,
        context: &C,
        arguments: A,
    ) -> R
    where
        F: Fn(&C, A) -> TargetFuture,
        W: Fn(&C, &A) -> WhenFuture,
        T: Fn(&C, A) -> ThenFuture,
        WhenFuture: Future<Output = bool>,
        TargetFuture: Future<Output = R>,
        ThenFuture: Future<Output = R>,
    {
        // The decision must fully resolve before either branch starts.
        let toggled = (self.when)(context, &arguments).await;

        if toggled {
            (self.then)(context, arguments).await
        } else {
            (self.target)(context, arguments).await
        }
    }
}

impl<F, W, T> Debug for FutureToggle<F, W, T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FutureToggle").finish_non_exhaustive()
    }
}
