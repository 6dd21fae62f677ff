//! Lazy-sequence dispatch of sequence-returning callables.

use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::sequence::{Sequence, Step};

/// The lazy-sequence dispatch strategy.
///
/// Produced by [`toggle_point`](crate::toggle_point) for
/// [`GeneratorMode`](super::GeneratorMode). Here the target and the
/// replacement hand back [`Sequence`]s, and [`call`](Self::call) hands back
/// one as well: a [`ToggleSequence`] that delegates every resume to
/// whichever branch the evaluator chose, through to its final return value.
///
/// # Examples
///
/// ```rust
/// use togglepoint::sequence::{Sequence, from_iter};
/// use togglepoint::toggle::{GeneratorMode, ToggleConfig};
/// use togglepoint::toggle_point;
///
/// let pager = toggle_point(
///     |_: &(), page: u32| from_iter([1, 2], page),
///     ToggleConfig::new(
///         |_: &(), page: &u32| *page == 1,
///         |_: &(), _: u32| from_iter([3], 1),
///     )
///     .mode::<GeneratorMode>(),
/// );
///
/// let mut values = pager.call(&(), 2).values();
/// assert_eq!(values.by_ref().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(values.into_return(), Some(2));
///
/// let redirected: Vec<_> = pager.call(&(), 1).values().collect();
/// assert_eq!(redirected, vec![3]);
/// ```
#[derive(Clone)]
pub struct SequenceToggle<F, W, T> {
    target: F,
    when: W,
    then: T,
}

impl<F, W, T> SequenceToggle<F, W, T> {
    #[inline]
    pub(crate) const fn new(target: F, when: W, then: T) -> Self {
        Self { target, when, then }
    }

    /// Invokes the toggle point, producing a suspended sequence.
    ///
    /// Calling runs nothing. The evaluator fires at the first
    /// [`resume`](Sequence::resume), the chosen branch is constructed at
    /// that same moment, and every later resume is delegated to it. Dropping
    /// the returned sequence before it finishes drops the branch with it,
    /// abandoning the remaining work.
    ///
    /// # Arguments
    ///
    /// * `context` - The invocation context shared by all three callables
    /// * `arguments` - The argument list handed to the chosen branch
    pub fn call<'a, C, A, TargetSeq, ThenSeq>(
        &'a self,
        context: &'a C,
        arguments: A,
    ) -> ToggleSequence<'a, F, W, T, C, A, TargetSeq, ThenSeq>
    where
        F: Fn(&C, A) -> TargetSeq,
        W: Fn(&C, &A) -> bool,
        T: Fn(&C, A) -> ThenSeq,
        TargetSeq: Sequence,
        ThenSeq: Sequence<Yield = TargetSeq::Yield, Return = TargetSeq::Return>,
    {
        ToggleSequence {
            toggle: self,
            context,
            state: ToggleSequenceState::Pending(arguments),
        }
    }
}

impl<F, W, T> Debug for SequenceToggle<F, W, T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SequenceToggle").finish_non_exhaustive()
    }
}

/// Either of two sequences with the same yield and return types.
///
/// Lets a single spot hold whichever of two differently typed sequences was
/// chosen, resuming it without caring which one it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch<T, F> {
    /// The replacement sequence.
    Then(T),
    /// The target sequence.
    Target(F),
}

impl<T, F> Branch<T, F> {
    /// Returns `true` if this branch holds the replacement sequence.
    #[inline]
    pub const fn is_then(&self) -> bool {
        matches!(self, Self::Then(_))
    }

    /// Returns `true` if this branch holds the target sequence.
    #[inline]
    pub const fn is_target(&self) -> bool {
        matches!(self, Self::Target(_))
    }
}

impl<T, F> Sequence for Branch<T, F>
where
    T: Sequence,
    F: Sequence<Yield = T::Yield, Return = T::Return>,
{
    type Yield = T::Yield;
    type Return = T::Return;

    #[inline]
    fn resume(&mut self) -> Step<T::Yield, T::Return> {
        match self {
            Self::Then(sequence) => sequence.resume(),
            Self::Target(sequence) => sequence.resume(),
        }
    }
}

enum ToggleSequenceState<A, TargetSeq, ThenSeq> {
    /// The arguments are held; neither the evaluator nor a branch has run.
    Pending(A),
    /// The chosen branch is running and owns all further resumes.
    Active(Branch<ThenSeq, TargetSeq>),
    /// The branch finished and returned its value.
    Finished,
}

/// The suspended sequence produced by [`SequenceToggle::call`].
///
/// Holds the argument list until the first resume, then delegates to the
/// branch the evaluator chose. The final return value of that branch becomes
/// the return value of this sequence.
///
/// # Panics
///
/// Resuming after the branch has finished panics, as the final return value
/// has already been handed out.
#[must_use = "sequences do nothing unless resumed"]
pub struct ToggleSequence<'a, F, W, T, C, A, TargetSeq, ThenSeq> {
    toggle: &'a SequenceToggle<F, W, T>,
    context: &'a C,
    state: ToggleSequenceState<A, TargetSeq, ThenSeq>,
}

impl<C, A, F, W, T, TargetSeq, ThenSeq> Sequence
    for ToggleSequence<'_, F, W, T, C, A, TargetSeq, ThenSeq>
where
    F: Fn(&C, A) -> TargetSeq,
    W: Fn(&C, &A) -> bool,
    T: Fn(&C, A) -> ThenSeq,
    TargetSeq: Sequence,
    ThenSeq: Sequence<Yield = TargetSeq::Yield, Return = TargetSeq::Return>,
{
    type Yield = TargetSeq::Yield;
    type Return = TargetSeq::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        loop {
            match mem::replace(&mut self.state, ToggleSequenceState::Finished) {
                ToggleSequenceState::Pending(arguments) => {
                    let toggle = self.toggle;
                    let branch = if (toggle.when)(self.context, &arguments) {
                        Branch::Then((toggle.then)(self.context, arguments))
                    } else {
                        Branch::Target((toggle.target)(self.context, arguments))
                    };

                    self.state = ToggleSequenceState::Active(branch);
                }
                ToggleSequenceState::Active(mut branch) => {
                    let step = branch.resume();

                    // A finished branch stays behind as Finished.
                    if step.is_yield() {
                        self.state = ToggleSequenceState::Active(branch);
                    }

                    return step;
                }
                ToggleSequenceState::Finished => {
                    panic!("toggle sequence resumed after completion")
                }
            }
        }
    }
}

impl<F, W, T, C, A, TargetSeq, ThenSeq> Debug
    for ToggleSequence<'_, F, W, T, C, A, TargetSeq, ThenSeq>
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            ToggleSequenceState::Pending(_) => "<pending>",
            ToggleSequenceState::Active(_) => "<active>",
            ToggleSequenceState::Finished => "<finished>",
        };

        formatter
            .debug_tuple("ToggleSequence")
            .field(&state)
            .finish()
    }
}
