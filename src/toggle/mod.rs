//! Conditional redirection of callables behind a single wrapping utility.
//!
//! [`toggle_point`] turns a target callable and a [`ToggleConfig`] into a
//! wrapper that, on every call, asks the configured evaluator whether to run
//! the target or its replacement. The configuration's mode picks the
//! dispatch strategy during compilation:
//!
//! * [`SyncMode`] wraps plain callables in an [`FnToggle`]
//! * [`AsyncMode`] wraps future-returning callables in a [`FutureToggle`]
//! * [`GeneratorMode`] wraps sequence-returning callables in a
//!   [`SequenceToggle`]
//!
//! Whatever the mode, the wrapper forwards the invocation context and the
//! argument list unchanged to whichever callable runs, and it adds no error
//! handling of its own. A failure inside the target, the evaluator or the
//! replacement reaches the caller exactly as it was raised.
//!
//! # Examples
//!
//! ```rust
//! use togglepoint::toggle::ToggleConfig;
//! use togglepoint::toggle_point;
//!
//! let greet = toggle_point(
//!     |name: &String, formal: bool| {
//!         if formal {
//!             format!("Good day, {name}")
//!         } else {
//!             format!("Hi, {name}")
//!         }
//!     },
//!     ToggleConfig::new(
//!         |name: &String, _: &bool| name.is_empty(),
//!         |_: &String, _: bool| "Hello, stranger".to_string(),
//!     ),
//! );
//!
//! assert_eq!(greet.call(&"Ada".to_string(), false), "Hi, Ada");
//! assert_eq!(greet.call(&String::new(), false), "Hello, stranger");
//! ```

mod config;
mod error;
#[cfg(feature = "async")]
mod future;
#[cfg(feature = "generator")]
mod generator;
mod mode;
mod sync;

pub use config::ToggleConfig;
pub use error::{ConfigurationError, UnrecognizedModeError};
#[cfg(feature = "async")]
pub use future::FutureToggle;
#[cfg(feature = "generator")]
pub use generator::{Branch, SequenceToggle, ToggleSequence};
#[cfg(feature = "async")]
pub use mode::AsyncMode;
#[cfg(feature = "generator")]
pub use mode::GeneratorMode;
pub use mode::{Mode, SyncMode, ToggleMode};
pub use sync::FnToggle;

/// Wraps a target callable so that a configured evaluator can redirect its
/// calls to a replacement.
///
/// The configuration's mode marker `M` selects the dispatch strategy, so the
/// shape of the returned wrapper is fixed during compilation and a mode
/// outside the recognized set does not compile. Wrapping invokes none of the
/// callables; their signatures are enforced where the wrapper's `call` is
/// instantiated.
///
/// # Arguments
///
/// * `target` - The callable whose calls may be redirected
/// * `configuration` - The evaluator, the replacement and the mode
///
/// # Examples
///
/// Plain callables dispatch under the default mode:
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
///
/// Sequence-returning callables dispatch under [`GeneratorMode`], and
/// future-returning ones under [`AsyncMode`]; see [`SequenceToggle`] and
/// [`FutureToggle`] for examples of those strategies.
#[inline]
pub fn toggle_point<M, F, W, T>(
    target: F,
    configuration: ToggleConfig<W, T, M>,
) -> M::Wrapped<F, W, T>
where
    M: ToggleMode,
{
    let (when, then) = configuration.into_parts();

    M::wrap(target, when, then)
}
