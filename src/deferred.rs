//! Stubbing mocks that hand back a future.
//!
//! A mock of an `async` function produces a future. The call record
//! keeps that future, not what it resolves to; await the value returned
//! by [`MockFn::invoke`] to get the resolution.

use std::future::{self, Ready};

use crate::MockFn;

impl<I, T, E, R> MockFn<I, Ready<T>, E, R> {
    /// Makes every invocation past the one-shot behaviors return a
    /// future resolving to `value`.
    ///
    /// ```
    /// use std::future::Ready;
    ///
    /// let mut fetch = faux_fn::MockFn::<(), Ready<&str>>::returning(std::future::ready(""));
    /// fetch.set_resolved_value("peanut butter");
    ///
    /// let data = futures::executor::block_on(fetch.invoke(()).unwrap());
    /// assert_eq!(data, "peanut butter");
    /// ```
    pub fn set_resolved_value(&mut self, value: T) -> &mut Self {
        self.set_return_value(future::ready(value))
    }

    /// Queues a single invocation returning a future resolving to
    /// `value`.
    pub fn queue_resolved_value_once(&mut self, value: T) -> &mut Self {
        self.queue_return_value_once(future::ready(value))
    }
}

impl<I, T, X, E, R> MockFn<I, Ready<Result<T, X>>, E, R> {
    /// Makes every invocation past the one-shot behaviors return a
    /// future resolving to `Err(error)`.
    pub fn set_rejected_value(&mut self, error: X) -> &mut Self {
        self.set_return_value(future::ready(Err(error)))
    }

    /// Queues a single invocation returning a future resolving to
    /// `Err(error)`.
    pub fn queue_rejected_value_once(&mut self, error: X) -> &mut Self {
        self.queue_return_value_once(future::ready(Err(error)))
    }
}
