//! # togglepoint
//!
//! Feature toggle combinators for Rust: wrap a callable so that a runtime
//! predicate can redirect each invocation to a replacement behavior, without
//! changing how the callable is invoked.
//!
//! ## Overview
//!
//! A *toggle point* is the conditional fork where execution is redirected
//! from a default behavior (the *target*) to a replacement behavior (the
//! *then* branch) whenever an evaluator predicate (the *when* branch) holds.
//! This crate provides [`toggle_point`](toggle::toggle_point), which builds
//! such a fork around a callable while preserving its calling convention:
//!
//! - **Sync**: plain function calls ([`FnToggle`](toggle::FnToggle))
//! - **Async**: future-returning calls ([`FutureToggle`](toggle::FutureToggle))
//! - **Generator**: lazy-sequence calls that yield values and terminate in a
//!   return value ([`SequenceToggle`](toggle::SequenceToggle))
//!
//! The invocation context is an explicit `&C` first parameter threaded
//! through the target, the evaluator, the replacement, and the wrapped
//! callable itself, so all three observe the same context on a given call.
//!
//! The wrapper is a pure routing layer: it holds no state between calls,
//! re-evaluates the predicate on every invocation, and never catches,
//! retries, or transforms failures from the callables it routes between.
//!
//! ## Feature Flags
//!
//! - `async`: the asynchronous strategy (enabled by default)
//! - `generator`: the lazy-sequence protocol and strategy (enabled by default)
//! - `serde`: serialization for [`Mode`](toggle::Mode)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use togglepoint::prelude::*;
//!
//! struct Session {
//!     beta_tester: bool,
//! }
//!
//! let legacy_checkout = |_session: &Session, amount: i64| amount * 100;
//! let rewritten_checkout = |_session: &Session, amount: i64| amount * 99;
//! let when = |session: &Session, _amount: &i64| session.beta_tester;
//!
//! let checkout = toggle_point(
//!     legacy_checkout,
//!     ToggleConfig::new(when, rewritten_checkout),
//! );
//!
//! assert_eq!(checkout.call(&Session { beta_tester: false }, 5), 500);
//! assert_eq!(checkout.call(&Session { beta_tester: true }, 5), 495);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use togglepoint::prelude::*;
/// ```
pub mod prelude {

    pub use crate::toggle::*;

    #[cfg(feature = "generator")]
    pub use crate::sequence::*;
}

#[cfg(feature = "generator")]
pub mod sequence;

pub mod toggle;

pub use toggle::toggle_point;
