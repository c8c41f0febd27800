//! A library to mock standalone functions and callbacks.
//!
//! `faux_fn` provides [`MockFn`], a recording stand-in for a function.
//! Hand it to the code under test instead of the real function, stub
//! what it should return, and inspect how it was called afterwards.
//!
//! # Stubbing
//!
//! A mock resolves every invocation using, in order:
//!
//! 1. the one-shot behaviors queued with the `queue_*_once` methods,
//!    each used exactly once and in the order they were queued.
//! 2. the persistent behavior set with the `set_*` methods. It
//!    defaults to returning `O::default()`.
//!
//! ```
//! use faux_fn::MockFn;
//!
//! let mut filter = MockFn::<(i32,), bool>::new();
//! filter
//!     .queue_return_value_once(true)
//!     .queue_return_value_once(false);
//!
//! let kept: Vec<_> = [1, 2, 3]
//!     .into_iter()
//!     .filter(|&e| filter.invoke((e,)).unwrap())
//!     .collect();
//!
//! // the third call fell back to the default `false`
//! assert_eq!(kept, vec![1]);
//! assert_eq!(filter.call_count(), 3);
//! assert_eq!(filter.call_args(1), Ok(&(2,)));
//! ```
//!
//! # Wrapping a real function
//!
//! A mock may wrap the function it stands in for. The original only
//! runs when a pass-through is requested.
//!
//! ```
//! use faux_fn::MockFn;
//!
//! let mut sum = MockFn::<(i32, i32), i32>::wrap(|(a, b)| Ok(a + b)).named("sum");
//! sum.queue_return_value_once(0).set_pass_through();
//!
//! assert_eq!(sum.invoke((1, 2)), Ok(0));
//! assert_eq!(sum.invoke((1, 2)), Ok(3));
//! ```
//!
//! # Failures
//!
//! Implementations return a `Result`. Errors are handed back to the
//! caller as [`Failure::Raised`] and recorded alongside the call.
//!
//! ```
//! use faux_fn::{Failure, MockFn};
//!
//! let mut compile = MockFn::<(), (), &str>::new();
//! compile.set_failure("you are using the wrong JDK");
//!
//! assert_eq!(compile.invoke(()), Err(Failure::Raised("you are using the wrong JDK")));
//! assert!(compile.calls().all(|call| call.failed()));
//! ```
//!
//! # Checking calls
//!
//! See the [`matcher`] module for the matchers accepted by
//! [`MockFn::check_called_with`].

mod deferred;
mod error;
mod mock_fn;
mod shared;

pub mod matcher;

pub use error::{Error, Failure};
pub use mock_fn::{Behavior, CallRecord, Implementation, MockFn};
pub use shared::Shared;
