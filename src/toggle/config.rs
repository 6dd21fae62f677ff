//! The evaluator-and-replacement pair handed to [`toggle_point`].
//!
//! [`toggle_point`]: crate::toggle_point

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::mode::{SyncMode, ToggleMode};

/// The configuration of a toggle point: an evaluator, a replacement and a
/// mode.
///
/// The evaluator `when` decides for every call whether execution is
/// redirected. The replacement `then` runs instead of the target whenever
/// the evaluator answers `true`. The mode is carried as the type parameter
/// `M` and defaults to [`SyncMode`]; [`mode`](Self::mode) rebinds it.
///
/// Constructing a configuration invokes nothing. The callables are only
/// exercised once the wrapper produced by
/// [`toggle_point`](crate::toggle_point) is called.
///
/// # Type Parameters
///
/// * `W` - The evaluator deciding each call
/// * `T` - The replacement run on redirected calls
/// * `M` - The marker of the dispatch mode
///
/// # Examples
///
/// ```rust
/// use togglepoint::toggle::ToggleConfig;
/// use togglepoint::toggle_point;
///
/// let double_or_zero = toggle_point(
///     |_: &(), value: i32| value * 2,
///     ToggleConfig::new(|_: &(), value: &i32| *value < 0, |_: &(), _: i32| 0),
/// );
///
/// assert_eq!(double_or_zero.call(&(), 21), 42);
/// assert_eq!(double_or_zero.call(&(), -3), 0);
/// ```
pub struct ToggleConfig<W, T, M = SyncMode> {
    when: W,
    then: T,
    marker: PhantomData<M>,
}

impl<W, T> ToggleConfig<W, T> {
    /// Creates a configuration in the default mode, [`SyncMode`].
    ///
    /// # Arguments
    ///
    /// * `when` - The evaluator deciding each call
    /// * `then` - The replacement run on redirected calls
    #[inline]
    pub const fn new(when: W, then: T) -> Self {
        Self {
            when,
            then,
            marker: PhantomData,
        }
    }
}

impl<W, T, M> ToggleConfig<W, T, M> {
    /// Rebinds this configuration to another dispatch mode.
    ///
    /// The evaluator and the replacement are kept as they are; only the
    /// strategy selected by [`toggle_point`](crate::toggle_point) changes.
    /// Modes outside the recognized set are rejected during compilation.
    ///
    /// # Examples
    ///
    /// The default mode can also be stated explicitly:
    ///
    /// ```rust
    /// use togglepoint::toggle::{SyncMode, ToggleConfig};
    /// use togglepoint::toggle_point;
    ///
    /// let retry_limit = toggle_point(
    ///     |_: &(), attempts: u32| attempts.min(3),
    ///     ToggleConfig::new(
    ///         |_: &(), attempts: &u32| *attempts == 0,
    ///         |_: &(), _: u32| 1,
    ///     )
    ///     .mode::<SyncMode>(),
    /// );
    ///
    /// assert_eq!(retry_limit.call(&(), 5), 3);
    /// assert_eq!(retry_limit.call(&(), 0), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn mode<M2>(self) -> ToggleConfig<W, T, M2>
    where
        M2: ToggleMode,
    {
        ToggleConfig {
            when: self.when,
            then: self.then,
            marker: PhantomData,
        }
    }

    /// Splits the configuration into its evaluator and replacement.
    #[inline]
    pub(crate) fn into_parts(self) -> (W, T) {
        (self.when, self.then)
    }
}

impl<W, T, M> Clone for ToggleConfig<W, T, M>
where
    W: Clone,
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            when: self.when.clone(),
            then: self.then.clone(),
            marker: PhantomData,
        }
    }
}

impl<W, T, M> Debug for ToggleConfig<W, T, M>
where
    M: ToggleMode,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ToggleConfig")
            .field("mode", &M::MODE)
            .finish_non_exhaustive()
    }
}
