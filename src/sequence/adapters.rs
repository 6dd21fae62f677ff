//! Ready-made sequence constructors and the yield-iterator adapter.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{Sequence, Step};

/// Creates a sequence from a closure returning the next [`Step`].
///
/// The resulting sequence tracks completion itself: once the closure reports
/// [`Step::Done`], further resumes panic instead of invoking the closure
/// again.
///
/// # Arguments
///
/// * `function` - The closure producing one step per resume
///
/// # Examples
///
/// ```rust
/// use togglepoint::sequence::{Sequence, Step, from_fn};
///
/// let mut current = 0;
/// let sequence = from_fn(move || {
///     current += 1;
///     if current <= 2 {
///         Step::Yield(current)
///     } else {
///         Step::Done("finished")
///     }
/// });
///
/// let mut values = sequence.values();
/// assert_eq!(values.by_ref().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(values.into_return(), Some("finished"));
/// ```
#[inline]
pub fn from_fn<Y, R, F>(function: F) -> FromFn<F>
where
    F: FnMut() -> Step<Y, R>,
{
    FromFn {
        function,
        finished: false,
    }
}

/// A sequence backed by a closure, created by [`from_fn`].
pub struct FromFn<F> {
    function: F,
    finished: bool,
}

impl<Y, R, F> Sequence for FromFn<F>
where
    F: FnMut() -> Step<Y, R>,
{
    type Yield = Y;
    type Return = R;

    fn resume(&mut self) -> Step<Y, R> {
        assert!(!self.finished, "sequence resumed after completion");

        let step = (self.function)();
        self.finished = step.is_done();

        step
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FromFn")
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Creates a sequence that yields every item of an iterator, then finishes
/// with the given return value.
///
/// # Arguments
///
/// * `into_iterator` - The source of the yielded values
/// * `output` - The final return value
///
/// # Examples
///
/// ```rust
/// use togglepoint::sequence::{Sequence, from_iter};
///
/// let sequence = from_iter([1, 2, 3], "finished");
///
/// let mut values = sequence.values();
/// assert_eq!(values.by_ref().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(values.into_return(), Some("finished"));
/// ```
#[inline]
pub fn from_iter<I, R>(into_iterator: I, output: R) -> IterSequence<I::IntoIter, R>
where
    I: IntoIterator,
{
    IterSequence {
        iterator: into_iterator.into_iter(),
        output: Some(output),
    }
}

/// A sequence backed by an iterator, created by [`from_iter`].
#[derive(Debug, Clone)]
pub struct IterSequence<I, R> {
    iterator: I,
    output: Option<R>,
}

impl<I, R> Sequence for IterSequence<I, R>
where
    I: Iterator,
{
    type Yield = I::Item;
    type Return = R;

    fn resume(&mut self) -> Step<I::Item, R> {
        match self.iterator.next() {
            Some(value) => Step::Yield(value),
            None => match self.output.take() {
                Some(output) => Step::Done(output),
                None => panic!("sequence resumed after completion"),
            },
        }
    }
}

/// Creates a sequence that finishes immediately with the given return value.
///
/// The yield type is unconstrained and usually pinned down by the caller, as
/// with [`std::iter::empty`].
///
/// # Examples
///
/// ```rust
/// use togglepoint::sequence::{Sequence, done};
///
/// let sequence = done::<i32, _>("finished");
/// assert_eq!(sequence.run(), "finished");
/// ```
#[inline]
pub fn done<Y, R>(output: R) -> Done<Y, R> {
    Done {
        output: Some(output),
        marker: PhantomData,
    }
}

/// A sequence that yields nothing, created by [`done`].
#[derive(Debug, Clone)]
pub struct Done<Y, R> {
    output: Option<R>,
    marker: PhantomData<fn() -> Y>,
}

impl<Y, R> Sequence for Done<Y, R> {
    type Yield = Y;
    type Return = R;

    fn resume(&mut self) -> Step<Y, R> {
        match self.output.take() {
            Some(output) => Step::Done(output),
            None => panic!("sequence resumed after completion"),
        }
    }
}

/// An iterator over the yielded values of a sequence, created by
/// [`Sequence::values`].
///
/// Once the underlying sequence finishes, the iterator is fused and the
/// return value is held for [`into_return`](Self::into_return).
pub struct Values<S>
where
    S: Sequence,
{
    sequence: S,
    output: Option<S::Return>,
}

impl<S> Values<S>
where
    S: Sequence,
{
    #[inline]
    pub(super) fn new(sequence: S) -> Self {
        Self {
            sequence,
            output: None,
        }
    }

    /// Recovers the final return value of the underlying sequence.
    ///
    /// Returns `None` when the sequence has not finished yet, so callers
    /// that abandon iteration early observe the missing return value rather
    /// than a fabricated one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::sequence::{Sequence, from_iter};
    ///
    /// let values = from_iter([1, 2], "finished").values();
    /// assert_eq!(values.into_return(), None);
    ///
    /// let mut values = from_iter([1, 2], "finished").values();
    /// values.by_ref().for_each(drop);
    /// assert_eq!(values.into_return(), Some("finished"));
    /// ```
    #[inline]
    pub fn into_return(self) -> Option<S::Return> {
        self.output
    }
}

impl<S> Iterator for Values<S>
where
    S: Sequence,
{
    type Item = S::Yield;

    fn next(&mut self) -> Option<S::Yield> {
        if self.output.is_some() {
            return None;
        }

        match self.sequence.resume() {
            Step::Yield(value) => Some(value),
            Step::Done(output) => {
                self.output = Some(output);

                None
            }
        }
    }
}

impl<S> Debug for Values<S>
where
    S: Sequence + Debug,
    S::Return: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Values")
            .field("sequence", &self.sequence)
            .field("output", &self.output)
            .finish()
    }
}
