mod behavior;
mod call;

pub use behavior::{Behavior, Implementation};
pub use call::CallRecord;

use behavior::Once;

use std::{collections::VecDeque, convert::Infallible, fmt};

use tracing::{debug, trace};

use crate::{
    error::{Error, Failure},
    matcher::InvocationMatcher,
};

const DEFAULT_NAME: &str = "faux_fn";

/// A recording stand-in for a function.
///
/// * `I`: the tuple of arguments, e.g. `(i32, i32)` or `(String,)`.
/// * `O`: the value the function produces.
/// * `E`: the error an implementation may raise. Defaults to
///   [`Infallible`].
/// * `R`: the receiver ("this") the function may be invoked on.
///   Defaults to `()`.
///
/// Each invocation runs the first queued one-shot [`Behavior`] or,
/// once the queue is empty, the persistent one. Every invocation is
/// recorded, including the ones that failed.
///
/// # Cloneable arguments and results
///
/// [`invoke`](Self::invoke) and [`invoke_on`](Self::invoke_on) need
/// `I`, `O` and `E` to be `Clone`: the arguments are kept in the call
/// record while the closures consume their own copy, and the outcome is
/// both recorded and handed back. Types such as [`std::io::Error`] are
/// not `Clone`; share them behind an [`Arc`](std::sync::Arc) instead.
///
/// ```
/// use std::{io, sync::Arc};
///
/// use faux_fn::{Failure, MockFn};
///
/// let mut read = MockFn::<(String,), Vec<u8>, Arc<io::Error>>::new().named("read");
/// read.queue_failure_once(Arc::new(io::Error::new(io::ErrorKind::NotFound, "no such file")));
///
/// match read.invoke(("config.toml".to_string(),)) {
///     Err(Failure::Raised(error)) => assert_eq!(error.kind(), io::ErrorKind::NotFound),
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// assert_eq!(read.invoke(("config.toml".to_string(),)).ok(), Some(vec![]));
/// ```
///
/// # Examples
///
/// ```
/// let mut mock = faux_fn::MockFn::<(i32,), i32>::new();
/// mock.queue_return_value_once(10).queue_return_value_once(20);
/// mock.set_return_value(5);
///
/// assert_eq!(mock.invoke((1,)), Ok(10));
/// assert_eq!(mock.invoke((2,)), Ok(20));
/// assert_eq!(mock.invoke((3,)), Ok(5));
///
/// assert_eq!(mock.call_count(), 3);
/// assert_eq!(mock.call_args(1), Ok(&(2,)));
/// ```
pub struct MockFn<I, O, E = Infallible, R = ()> {
    name: String,
    calls: Vec<CallRecord<I, O, E, R>>,
    once: VecDeque<Once<I, O, E, R>>,
    persistent: Behavior<I, O, E, R>,
    original: Option<Implementation<I, O, E, R>>,
}

impl<I, O: Default, E, R> MockFn<I, O, E, R> {
    /// Creates a mock that returns `O::default()` until told otherwise.
    pub fn new() -> Self {
        Self::returning(O::default())
    }

    /// Creates a mock wrapping `original`.
    ///
    /// The original only runs when a pass-through is requested through
    /// [`set_pass_through`](Self::set_pass_through) or
    /// [`queue_pass_through_once`](Self::queue_pass_through_once).
    pub fn wrap(original: impl FnMut(I) -> Result<O, E> + Send + 'static) -> Self {
        Self::new().original(original)
    }
}

impl<I, O: Default, E, R> Default for MockFn<I, O, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O, E, R> MockFn<I, O, E, R> {
    /// Creates a mock whose persistent behavior returns `value`.
    pub fn returning(value: O) -> Self {
        MockFn {
            name: DEFAULT_NAME.to_string(),
            calls: vec![],
            once: VecDeque::new(),
            persistent: Behavior::ReturnValue(value),
            original: None,
        }
    }

    /// Names the mock. The name shows up in errors and logs.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Sets the original implementation used by pass-through
    /// behaviors.
    pub fn original(
        mut self,
        mut original: impl FnMut(I) -> Result<O, E> + Send + 'static,
    ) -> Self {
        self.original = Some(Box::new(move |_: Option<&R>, input| original(input)));
        self
    }

    /// Analog of [`original`](Self::original) where the original also
    /// receives the receiver of the call.
    pub fn original_with_receiver(
        mut self,
        original: impl FnMut(Option<&R>, I) -> Result<O, E> + Send + 'static,
    ) -> Self {
        self.original = Some(Box::new(original));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn has_original(&self) -> bool {
        self.original.is_some()
    }

    /// Whether one-shot behaviors are still queued.
    pub fn has_pending_once(&self) -> bool {
        !self.once.is_empty()
    }

    /// Sets the value returned once every one-shot behavior has been
    /// used.
    pub fn set_return_value(&mut self, value: O) -> &mut Self {
        self.persistent = Behavior::ReturnValue(value);
        self
    }

    /// Queues a value to be returned by a single invocation.
    ///
    /// The value is moved out on use, so it does not need to be
    /// cloneable.
    pub fn queue_return_value_once(&mut self, value: O) -> &mut Self {
        self.once.push_back(Behavior::ReturnValue(value).into());
        self
    }

    /// Sets the closure run once every one-shot behavior has been used.
    ///
    /// The input of the closure is the tuple of arguments.
    ///
    /// ```
    /// let mut mock = faux_fn::MockFn::<(i32,), i32>::new().named("add42");
    /// mock.set_implementation(|(x,)| Ok(x + 42));
    /// assert_eq!(mock.invoke((1,)), Ok(43));
    /// ```
    pub fn set_implementation(
        &mut self,
        mut stub: impl FnMut(I) -> Result<O, E> + Send + 'static,
    ) -> &mut Self {
        self.persistent = Behavior::implementation(move |_: Option<&R>, input| stub(input));
        self
    }

    /// Analog of [`set_implementation`](Self::set_implementation)
    /// where the closure also receives the receiver of the call.
    pub fn set_implementation_with_receiver(
        &mut self,
        stub: impl FnMut(Option<&R>, I) -> Result<O, E> + Send + 'static,
    ) -> &mut Self {
        self.persistent = Behavior::implementation(stub);
        self
    }

    /// Queues a closure to be run by a single invocation.
    ///
    /// The closure may consume what it captured.
    pub fn queue_implementation_once(
        &mut self,
        stub: impl FnOnce(I) -> Result<O, E> + Send + 'static,
    ) -> &mut Self {
        self.once
            .push_back(Once::implementation(move |_: Option<&R>, input| stub(input)));
        self
    }

    /// Analog of
    /// [`queue_implementation_once`](Self::queue_implementation_once)
    /// where the closure also receives the receiver of the call.
    pub fn queue_implementation_with_receiver_once(
        &mut self,
        stub: impl FnOnce(Option<&R>, I) -> Result<O, E> + Send + 'static,
    ) -> &mut Self {
        self.once.push_back(Once::implementation(stub));
        self
    }

    /// Makes every invocation past the one-shot behaviors run the
    /// original implementation.
    pub fn set_pass_through(&mut self) -> &mut Self {
        self.persistent = Behavior::PassThrough;
        self
    }

    /// Queues a single invocation of the original implementation.
    pub fn queue_pass_through_once(&mut self) -> &mut Self {
        self.once.push_back(Behavior::PassThrough.into());
        self
    }

    /// Replaces the persistent behavior with one built by hand.
    pub fn set_behavior(&mut self, behavior: Behavior<I, O, E, R>) -> &mut Self {
        self.persistent = behavior;
        self
    }

    /// Queues a hand-built behavior for a single invocation.
    pub fn queue_behavior_once(&mut self, behavior: Behavior<I, O, E, R>) -> &mut Self {
        self.once.push_back(behavior.into());
        self
    }

    /// Makes every invocation past the one-shot behaviors raise
    /// `error`.
    pub fn set_failure(&mut self, error: E) -> &mut Self
    where
        E: Clone + Send + 'static,
    {
        self.set_implementation(move |_| Err(error.clone()))
    }

    /// Queues a single invocation that raises `error`.
    pub fn queue_failure_once(&mut self, error: E) -> &mut Self
    where
        E: Send + 'static,
    {
        self.queue_implementation_once(move |_| Err(error))
    }

    /// Clears the recorded calls and the queued one-shot behaviors.
    ///
    /// The persistent behavior and the original implementation are
    /// kept.
    pub fn reset(&mut self) {
        trace!(
            mock = %self.name,
            calls = self.calls.len(),
            queued = self.once.len(),
            "reset"
        );
        self.calls.clear();
        self.once.clear();
    }

    /// Clears the recorded calls only.
    pub fn clear(&mut self) {
        trace!(mock = %self.name, calls = self.calls.len(), "cleared calls");
        self.calls.clear();
    }

    /// Number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn was_called(&self) -> bool {
        !self.calls.is_empty()
    }

    /// Every recorded invocation, oldest first.
    pub fn calls(&self) -> impl Iterator<Item = &CallRecord<I, O, E, R>> + '_ {
        self.calls.iter()
    }

    /// The invocation at `index`.
    pub fn call(&self, index: usize) -> Result<&CallRecord<I, O, E, R>, Error> {
        self.calls.get(index).ok_or_else(|| Error::IndexOutOfRange {
            name: self.name.clone(),
            index,
            calls: self.calls.len(),
        })
    }

    pub fn last_call(&self) -> Option<&CallRecord<I, O, E, R>> {
        self.calls.last()
    }

    /// The arguments of the invocation at `index`.
    pub fn call_args(&self, index: usize) -> Result<&I, Error> {
        self.call(index).map(CallRecord::args)
    }

    /// The outcome of every invocation, oldest first.
    pub fn results(&self) -> impl Iterator<Item = &Result<O, Failure<E>>> + '_ {
        self.calls.iter().map(CallRecord::result)
    }

    /// The receiver of every invocation, oldest first.
    pub fn receivers(&self) -> impl Iterator<Item = Option<&R>> + '_ {
        self.calls.iter().map(CallRecord::receiver)
    }

    /// Fails unless the mock was invoked exactly `expected` times.
    pub fn check_called_times(&self, expected: usize) -> Result<(), Error> {
        if self.calls.len() == expected {
            return Ok(());
        }

        Err(Error::CallCount {
            name: self.name.clone(),
            expected,
            actual: self.calls.len(),
        })
    }

    /// Fails unless at least one recorded invocation matches.
    ///
    /// ```
    /// use faux_fn::{matcher::eq, MockFn};
    ///
    /// let mut mock = MockFn::<(i32, i32), i32>::returning(1);
    /// mock.invoke((33, 33)).unwrap();
    /// mock.invoke((4, 4)).unwrap();
    ///
    /// assert!(mock.check_called_with((eq(33), eq(33))).is_ok());
    /// assert!(mock.check_called_with((eq(4), eq(33))).is_err());
    /// ```
    pub fn check_called_with(&self, matcher: impl InvocationMatcher<I>) -> Result<(), Error> {
        if self.calls.is_empty() {
            return Err(Error::NotCalledWith {
                name: self.name.clone(),
                details: "✗ it was never called".to_string(),
            });
        }

        let mut mismatches = Vec::with_capacity(self.calls.len());
        for (i, call) in self.calls.iter().enumerate() {
            match matcher.matches(call.args()) {
                Ok(()) => return Ok(()),
                Err(mismatch) => mismatches.push(format!("✗ call {}: {}", i, mismatch)),
            }
        }

        Err(Error::NotCalledWith {
            name: self.name.clone(),
            details: mismatches.join("\n\n"),
        })
    }

    /// Fails unless the invocation at `index` matches.
    pub fn check_nth_called_with(
        &self,
        index: usize,
        matcher: impl InvocationMatcher<I>,
    ) -> Result<(), Error> {
        let call = self.call(index)?;
        matcher
            .matches(call.args())
            .map_err(|mismatch| Error::NotCalledWith {
                name: self.name.clone(),
                details: format!("✗ call {}: {}", index, mismatch),
            })
    }
}

impl<I: Clone, O: Clone, E: Clone, R> MockFn<I, O, E, R> {
    /// Invokes the mock without a receiver.
    pub fn invoke(&mut self, args: I) -> Result<O, Failure<E>> {
        self.dispatch(None, args)
    }

    /// Invokes the mock on `receiver`.
    ///
    /// The receiver is handed to receiver-aware implementations and
    /// kept in the call record.
    pub fn invoke_on(&mut self, receiver: R, args: I) -> Result<O, Failure<E>> {
        self.dispatch(Some(receiver), args)
    }

    /// Borrows the mock as a plain closure, for code that expects a
    /// callback.
    ///
    /// ```
    /// fn for_each(items: &[i32], mut callback: impl FnMut((i32,))) {
    ///     items.iter().for_each(|&item| callback((item,)));
    /// }
    ///
    /// let mut mock = faux_fn::MockFn::<(i32,), i32>::new();
    /// mock.set_implementation(|(x,)| Ok(42 + x));
    ///
    /// {
    ///     let mut callback = mock.as_fn();
    ///     for_each(&[0, 1], |args| {
    ///         callback(args).unwrap();
    ///     });
    /// }
    ///
    /// assert_eq!(mock.call_count(), 2);
    /// assert_eq!(mock.call_args(1), Ok(&(1,)));
    /// assert_eq!(mock.results().next(), Some(&Ok(42)));
    /// ```
    pub fn as_fn(&mut self) -> impl FnMut(I) -> Result<O, Failure<E>> + '_ {
        move |args| self.invoke(args)
    }

    fn dispatch(&mut self, receiver: Option<R>, args: I) -> Result<O, Failure<E>> {
        let index = self.calls.len();
        let input = args.clone();
        let original = self.original.as_mut();

        let result = match self.once.pop_front() {
            Some(once) => {
                trace!(
                    mock = %self.name,
                    call = index,
                    remaining = self.once.len(),
                    "invoked with one-shot behavior"
                );
                once.call(receiver.as_ref(), input, original, &self.name)
            }
            None => {
                trace!(mock = %self.name, call = index, "invoked with persistent behavior");
                self.persistent.call(receiver.as_ref(), input, original, &self.name)
            }
        };

        if let Err(Failure::Mock(error)) = &result {
            debug!(mock = %self.name, call = index, %error, "mock could not produce a value");
        }

        self.calls.push(CallRecord::new(args, result.clone(), receiver));
        result
    }
}

impl<I, R: Clone, E> MockFn<I, Option<R>, E, R> {
    /// Makes every invocation past the one-shot behaviors return the
    /// receiver it was invoked on, or `None` without one.
    pub fn set_return_receiver(&mut self) -> &mut Self {
        self.set_implementation_with_receiver(|receiver, _| Ok(receiver.cloned()))
    }
}

impl<I, O: fmt::Debug, E, R> fmt::Debug for MockFn<I, O, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockFn")
            .field("name", &self.name)
            .field("calls", &self.calls.len())
            .field("once", &self.once)
            .field("persistent", &self.persistent)
            .field("has_original", &self.original.is_some())
            .finish()
    }
}
