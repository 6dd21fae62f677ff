//! The step type observed when resuming a lazy sequence.

/// A single observation of a [`Sequence`](super::Sequence).
///
/// Resuming a sequence either produces the next value (`Yield`) or finishes
/// the sequence with its final return value (`Done`). A sequence that has
/// reported `Done` must not be resumed again.
///
/// # Type Parameters
///
/// * `Y` - The type of the yielded values
/// * `R` - The type of the final return value
///
/// # Examples
///
/// ```rust
/// use togglepoint::sequence::{Sequence, Step, from_iter};
///
/// let mut sequence = from_iter([1, 2], "finished");
///
/// assert_eq!(sequence.resume(), Step::Yield(1));
/// assert_eq!(sequence.resume(), Step::Yield(2));
/// assert_eq!(sequence.resume(), Step::Done("finished"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, R> {
    /// The sequence produced a value and can be resumed again.
    Yield(Y),
    /// The sequence finished with its final return value.
    Done(R),
}

impl<Y, R> Step<Y, R> {
    /// Returns `true` if this step yielded a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::Step;
    ///
    /// let step: Step<i32, ()> = Step::Yield(4);
    /// assert!(step.is_yield());
    /// ```
    #[inline]
    pub const fn is_yield(&self) -> bool {
        matches!(self, Self::Yield(_))
    }

    /// Returns `true` if this step finished the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::Step;
    ///
    /// let step: Step<i32, ()> = Step::Done(());
    /// assert!(step.is_done());
    /// ```
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Extracts the yielded value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::Step;
    ///
    /// let step: Step<i32, &str> = Step::Yield(4);
    /// assert_eq!(step.into_yield(), Some(4));
    ///
    /// let step: Step<i32, &str> = Step::Done("finished");
    /// assert_eq!(step.into_yield(), None);
    /// ```
    #[inline]
    pub fn into_yield(self) -> Option<Y> {
        match self {
            Self::Yield(value) => Some(value),
            Self::Done(_) => None,
        }
    }

    /// Extracts the final return value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::Step;
    ///
    /// let step: Step<i32, &str> = Step::Done("finished");
    /// assert_eq!(step.into_done(), Some("finished"));
    /// ```
    #[inline]
    pub fn into_done(self) -> Option<R> {
        match self {
            Self::Yield(_) => None,
            Self::Done(value) => Some(value),
        }
    }

    /// Transforms the yielded value, leaving a `Done` step untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::Step;
    ///
    /// let step: Step<i32, &str> = Step::Yield(4);
    /// assert_eq!(step.map_yield(|value| value * 2), Step::Yield(8));
    /// ```
    #[inline]
    pub fn map_yield<Y2, F>(self, function: F) -> Step<Y2, R>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Self::Yield(value) => Step::Yield(function(value)),
            Self::Done(value) => Step::Done(value),
        }
    }

    /// Transforms the final return value, leaving a `Yield` step untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::Step;
    ///
    /// let step: Step<i32, i32> = Step::Done(4);
    /// assert_eq!(step.map_done(|value| value + 1), Step::Done(5));
    /// ```
    #[inline]
    pub fn map_done<R2, F>(self, function: F) -> Step<Y, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Yield(value) => Step::Yield(value),
            Self::Done(value) => Step::Done(function(value)),
        }
    }
}
