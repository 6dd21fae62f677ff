//! Lazy sequence protocol with a final return value.
//!
//! This module provides the resumable-sequence abstraction behind the
//! generator strategy. A [`Sequence`] produces a series of values, one per
//! [`resume`](Sequence::resume) call, and ends with a distinct return value.
//! Nothing runs until the first resume, and dropping a sequence before it
//! finishes abandons the remaining work.
//!
//! Unlike [`Iterator`], a sequence distinguishes its yielded values from its
//! final result. [`Values`] bridges the two worlds: it adapts a sequence into
//! an iterator over the yields and stores the return value for retrieval once
//! iteration ends.
//!
//! # Examples
//!
//! ```rust
//! use togglepoint::sequence::{Sequence, Step, from_fn};
//!
//! let mut countdown = 3;
//! let sequence = from_fn(move || {
//!     if countdown == 0 {
//!         Step::Done("liftoff")
//!     } else {
//!         countdown -= 1;
//!         Step::Yield(countdown + 1)
//!     }
//! });
//!
//! let mut values = sequence.values();
//! assert_eq!(values.by_ref().collect::<Vec<_>>(), vec![3, 2, 1]);
//! assert_eq!(values.into_return(), Some("liftoff"));
//! ```

mod adapters;
mod step;

pub use adapters::{Done, FromFn, IterSequence, Values, done, from_fn, from_iter};
pub use step::Step;

/// A resumable computation that yields values and finishes with a return
/// value.
///
/// Each call to [`resume`](Self::resume) advances the computation to its next
/// suspension point. The computation reports [`Step::Yield`] for every
/// produced value and [`Step::Done`] exactly once, when it finishes. Resuming
/// after `Done` is a logic error and implementations are expected to panic.
///
/// # Examples
///
/// ```rust
/// use togglepoint::sequence::{Sequence, Step, from_iter};
///
/// let mut sequence = from_iter(1..=2, "finished");
///
/// assert_eq!(sequence.resume(), Step::Yield(1));
/// assert_eq!(sequence.resume(), Step::Yield(2));
/// assert_eq!(sequence.resume(), Step::Done("finished"));
/// ```
pub trait Sequence {
    /// The type of the values produced at each suspension point.
    type Yield;

    /// The type of the final return value.
    type Return;

    /// Advances the computation to the next suspension point.
    ///
    /// # Panics
    ///
    /// Implementations panic when resumed after having reported
    /// [`Step::Done`].
    fn resume(&mut self) -> Step<Self::Yield, Self::Return>;

    /// Drives the sequence to completion, discarding every yielded value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::{Sequence, from_iter};
    ///
    /// let sequence = from_iter([1, 2, 3], "finished");
    /// assert_eq!(sequence.run(), "finished");
    /// ```
    #[inline]
    fn run(mut self) -> Self::Return
    where
        Self: Sized,
    {
        loop {
            if let Step::Done(value) = self.resume() {
                return value;
            }
        }
    }

    /// Adapts this sequence into an [`Iterator`] over its yielded values.
    ///
    /// The final return value is kept aside and can be recovered with
    /// [`Values::into_return`] after the iterator is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::{Sequence, from_iter};
    ///
    /// let values: Vec<_> = from_iter([1, 2, 3], ()).values().collect();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Yield = S::Yield;
    type Return = S::Return;

    #[inline]
    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Yield = S::Yield;
    type Return = S::Return;

    #[inline]
    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }
}
