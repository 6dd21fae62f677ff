//! Calling-convention modes and their compile-time strategy selection.
//!
//! A toggle point runs in one of three modes, one per calling convention of
//! the wrapped target. [`Mode`] is the runtime description of that choice,
//! suitable for configuration files and diagnostics. [`ToggleMode`] is its
//! type-level counterpart: a sealed trait implemented by one marker type per
//! mode, so that [`toggle_point`](crate::toggle_point) picks the matching
//! strategy during compilation and an unsupported mode cannot slip through to
//! run time.
//!
//! # Examples
//!
//! ```rust
//! use togglepoint::toggle::Mode;
//!
//! assert_eq!(Mode::default(), Mode::Sync);
//! assert_eq!("generator".parse::<Mode>(), Ok(Mode::Generator));
//! assert!("lazy".parse::<Mode>().is_err());
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use static_assertions::assert_impl_all;

use super::error::UnrecognizedModeError;
#[cfg(feature = "async")]
use super::future::FutureToggle;
#[cfg(feature = "generator")]
use super::generator::SequenceToggle;
use super::sync::FnToggle;

/// The calling convention a toggle point dispatches under.
///
/// The mode decides how the target, the evaluator and the replacement are
/// invoked and what the wrapper hands back to the caller:
///
/// * [`Sync`](Self::Sync) - plain calls returning their value directly
/// * [`Async`](Self::Async) - calls returning futures, awaited in order
/// * [`Generator`](Self::Generator) - calls returning lazy sequences,
///   delegated to until they finish
///
/// # Examples
///
/// ```rust
/// use togglepoint::toggle::Mode;
///
/// assert_eq!(Mode::Async.as_str(), "async");
/// assert_eq!(Mode::Async.to_string(), "async");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Direct invocation of plain functions.
    #[default]
    Sync,
    /// Invocation of future-returning functions.
    Async,
    /// Invocation of sequence-returning functions.
    Generator,
}

assert_impl_all!(Mode: Copy, Send, Sync);

impl Mode {
    /// Every recognized mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Sync, Self::Async, Self::Generator];

    /// Returns the lowercase name of this mode.
    ///
    /// The name round-trips through [`FromStr`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use togglepoint::toggle::Mode;
    ///
    /// assert_eq!(Mode::Generator.as_str(), "generator");
    /// ```
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
            Self::Generator => "generator",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnrecognizedModeError;

    /// Parses a lowercase mode name.
    ///
    /// # Errors
    ///
    /// Returns [`UnrecognizedModeError`] when `source` names none of the
    /// recognized modes.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source {
            "sync" => Ok(Self::Sync),
            "async" => Ok(Self::Async),
            "generator" => Ok(Self::Generator),
            _ => Err(UnrecognizedModeError::new(source)),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// The type-level selection of a dispatch strategy.
///
/// Implemented by exactly one marker type per [`Mode`]. The associated
/// [`Wrapped`](Self::Wrapped) type is the strategy that
/// [`toggle_point`](crate::toggle_point) produces for that mode, so a request
/// for a mode outside this closed set fails during compilation instead of at
/// the first call.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait ToggleMode: sealed::Sealed {
    /// The runtime description of this mode.
    const MODE: Mode;

    /// The wrapper produced for a target `F`, an evaluator `W` and a
    /// replacement `T`.
    type Wrapped<F, W, T>;

    /// Bundles the three callables into this mode's wrapper.
    ///
    /// Construction never invokes any of them.
    fn wrap<F, W, T>(target: F, when: W, then: T) -> Self::Wrapped<F, W, T>;
}

/// Marker selecting the synchronous strategy, [`FnToggle`].
#[derive(Debug, Clone, Copy)]
pub enum SyncMode {}

impl sealed::Sealed for SyncMode {}

impl ToggleMode for SyncMode {
    const MODE: Mode = Mode::Sync;

    type Wrapped<F, W, T> = FnToggle<F, W, T>;

    #[inline]
    fn wrap<F, W, T>(target: F, when: W, then: T) -> Self::Wrapped<F, W, T> {
        FnToggle::new(target, when, then)
    }
}

/// Marker selecting the asynchronous strategy, [`FutureToggle`].
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy)]
pub enum AsyncMode {}

#[cfg(feature = "async")]
impl sealed::Sealed for AsyncMode {}

#[cfg(feature = "async")]
impl ToggleMode for AsyncMode {
    const MODE: Mode = Mode::Async;

    type Wrapped<F, W, T> = FutureToggle<F, W, T>;

    #[inline]
    fn wrap<F, W, T>(target: F, when: W, then: T) -> Self::Wrapped<F, W, T> {
        FutureToggle::new(target, when, then)
    }
}

/// Marker selecting the lazy-sequence strategy, [`SequenceToggle`].
#[cfg(feature = "generator")]
#[derive(Debug, Clone, Copy)]
pub enum GeneratorMode {}

#[cfg(feature = "generator")]
impl sealed::Sealed for GeneratorMode {}

#[cfg(feature = "generator")]
impl ToggleMode for GeneratorMode {
    const MODE: Mode = Mode::Generator;

    type Wrapped<F, W, T> = SequenceToggle<F, W, T>;

    #[inline]
    fn wrap<F, W, T>(target: F, when: W, then: T) -> Self::Wrapped<F, W, T> {
        SequenceToggle::new(target, when, then)
    }
}
