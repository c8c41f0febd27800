//! Tools to check the arguments a mock was invoked with.
//!
//! An [`ArgMatcher`] checks a single argument. Tuples of them form an
//! [`InvocationMatcher`], which checks the whole argument tuple of a
//! call. See [`MockFn::check_called_with`](crate::MockFn::check_called_with).

mod any;
mod eq;
mod invocation_matcher;
mod predicate;

pub use any::{any, Any};
pub use eq::{contains, eq, not, Contains, Eq, Not};
pub use predicate::{predicate, Predicate};
pub use invocation_matcher::{AnyInvocation, InvocationMatcher, Mismatch};

use std::fmt;

/// Matcher for a single argument of a call.
///
/// The [`Display`](fmt::Display) implementation should describe what
/// the matcher expects; it is shown next to the actual argument when
/// a check fails.
///
/// ```
/// use faux_fn::matcher::{self, ArgMatcher};
///
/// assert!(matcher::eq(5).matches(&5));
/// assert!(!matcher::eq(5).matches(&4));
/// assert!(matcher::any().matches(&"anything"));
/// ```
pub trait ArgMatcher<Arg: ?Sized>: fmt::Display {
    /// Returns whether the argument matches.
    fn matches(&self, argument: &Arg) -> bool;
}
