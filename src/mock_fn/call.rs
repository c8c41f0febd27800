use crate::error::Failure;

/// A single invocation of a [`MockFn`](crate::MockFn).
///
/// Records are appended by the mock as it is invoked and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord<I, O, E, R> {
    args: I,
    result: Result<O, Failure<E>>,
    receiver: Option<R>,
}

impl<I, O, E, R> CallRecord<I, O, E, R> {
    pub(crate) fn new(args: I, result: Result<O, Failure<E>>, receiver: Option<R>) -> Self {
        CallRecord {
            args,
            result,
            receiver,
        }
    }

    /// The arguments the mock was invoked with.
    pub fn args(&self) -> &I {
        &self.args
    }

    /// What the invocation produced: the returned value or the failure
    /// handed back to the caller.
    pub fn result(&self) -> &Result<O, Failure<E>> {
        &self.result
    }

    /// The receiver the mock was invoked on, if any.
    pub fn receiver(&self) -> Option<&R> {
        self.receiver.as_ref()
    }

    pub fn returned(&self) -> Option<&O> {
        self.result.as_ref().ok()
    }

    pub fn failed(&self) -> bool {
        self.result.is_err()
    }
}
