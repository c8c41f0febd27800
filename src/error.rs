use std::fmt::{self, Formatter};

/// Faults raised by the recorder itself.
///
/// Every variant carries the name of the mock that raised it so
/// failures in tests with several mocks are easy to trace back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A pass-through was requested but the mock was created without
    /// an original implementation.
    #[error("✗ '{name}' has no original implementation to pass through to")]
    NoOriginalImplementation { name: String },

    /// A call was looked up past the end of the recorded history.
    #[error("✗ '{name}' was called {calls} time(s); there is no call at index {index}")]
    IndexOutOfRange {
        name: String,
        index: usize,
        calls: usize,
    },

    /// The number of recorded calls was not the expected one.
    #[error("✗ '{name}' was expected to be called {expected} time(s) but was called {actual} time(s)")]
    CallCount {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// No recorded call matched the expected arguments.
    #[error("✗ '{name}' was not called with the expected arguments\n\n{details}")]
    NotCalledWith { name: String, details: String },
}

/// Why an invocation did not produce a value.
///
/// `Raised` holds whatever the implementation (or the original
/// function) returned as its error, untouched. `Mock` means the
/// recorder could not run a behavior at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<E> {
    Mock(Error),
    Raised(E),
}

impl<E> Failure<E> {
    /// Returns the raised error, if this failure came from the stubbed
    /// behavior rather than from the recorder.
    pub fn raised(&self) -> Option<&E> {
        match self {
            Failure::Raised(e) => Some(e),
            Failure::Mock(_) => None,
        }
    }
}

impl<E> From<Error> for Failure<E> {
    fn from(error: Error) -> Self {
        Failure::Mock(error)
    }
}

impl<E: fmt::Display> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Mock(error) => fmt::Display::fmt(error, f),
            Failure::Raised(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Failure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Failure::Mock(error) => Some(error),
            Failure::Raised(error) => Some(error),
        }
    }
}
