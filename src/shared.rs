use std::{fmt, sync::Arc};

use parking_lot::{Mutex, MutexGuard};

use crate::{Failure, MockFn};

/// A cloneable handle to a [`MockFn`] that can be invoked from several
/// threads.
///
/// Each invocation holds the lock for its whole duration, so stubbed
/// implementations must not invoke the same mock again.
///
/// ```
/// use faux_fn::{MockFn, Shared};
///
/// let shared = Shared::new(MockFn::<(u32,), u32>::returning(7));
/// let worker = shared.clone();
///
/// std::thread::spawn(move || worker.invoke((1,)).unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.call_count(), 1);
/// ```
pub struct Shared<I, O, E = std::convert::Infallible, R = ()> {
    mock: Arc<Mutex<MockFn<I, O, E, R>>>,
}

impl<I, O, E, R> Shared<I, O, E, R> {
    pub fn new(mock: MockFn<I, O, E, R>) -> Self {
        Shared {
            mock: Arc::new(Mutex::new(mock)),
        }
    }

    /// Locks the mock to configure or inspect it.
    pub fn lock(&self) -> MutexGuard<'_, MockFn<I, O, E, R>> {
        self.mock.lock()
    }

    pub fn call_count(&self) -> usize {
        self.mock.lock().call_count()
    }

    /// Unwraps the mock if this is the only handle left.
    pub fn try_unwrap(self) -> Result<MockFn<I, O, E, R>, Self> {
        Arc::try_unwrap(self.mock)
            .map(Mutex::into_inner)
            .map_err(|mock| Shared { mock })
    }
}

impl<I: Clone, O: Clone, E: Clone, R> Shared<I, O, E, R> {
    pub fn invoke(&self, args: I) -> Result<O, Failure<E>> {
        self.mock.lock().invoke(args)
    }

    pub fn invoke_on(&self, receiver: R, args: I) -> Result<O, Failure<E>> {
        self.mock.lock().invoke_on(receiver, args)
    }
}

impl<I, O, E, R> Clone for Shared<I, O, E, R> {
    fn clone(&self) -> Self {
        Shared {
            mock: Arc::clone(&self.mock),
        }
    }
}

impl<I, O, E, R> From<MockFn<I, O, E, R>> for Shared<I, O, E, R> {
    fn from(mock: MockFn<I, O, E, R>) -> Self {
        Shared::new(mock)
    }
}

impl<I, O: fmt::Debug, E, R> fmt::Debug for Shared<I, O, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // do not block if the mock is being invoked elsewhere
        match self.mock.try_lock() {
            Some(mock) => f.debug_tuple("Shared").field(&*mock).finish(),
            None => f.write_str("Shared(<locked>)"),
        }
    }
}
