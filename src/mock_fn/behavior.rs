use std::fmt::{self, Formatter};

use crate::error::{Error, Failure};

/// A closure standing in for the mocked function.
///
/// The first argument is the receiver the mock was invoked on, if
/// any. The second is the tuple of arguments.
pub type Implementation<I, O, E, R> = Box<dyn FnMut(Option<&R>, I) -> Result<O, E> + Send>;

type OnceImplementation<I, O, E, R> = Box<dyn FnOnce(Option<&R>, I) -> Result<O, E> + Send>;

/// The rule that decides what an invocation returns or raises.
///
/// Usually built through the `set_*` and `queue_*_once` helpers of
/// [`MockFn`](crate::MockFn). A behavior built by hand is installed
/// with [`set_behavior`](crate::MockFn::set_behavior) or
/// [`queue_behavior_once`](crate::MockFn::queue_behavior_once).
///
/// ```
/// use faux_fn::{Behavior, MockFn};
///
/// let mut mock = MockFn::<(i32,), i32>::new();
/// mock.set_behavior(Behavior::implementation(|_, (x,)| Ok(x * 2)))
///     .queue_behavior_once(Behavior::ReturnValue(-1));
///
/// assert_eq!(mock.invoke((4,)), Ok(-1));
/// assert_eq!(mock.invoke((4,)), Ok(8));
/// ```
pub enum Behavior<I, O, E, R> {
    /// Always yields the value.
    ReturnValue(O),
    /// Runs the closure with the receiver and arguments of the call.
    Implementation(Implementation<I, O, E, R>),
    /// Runs the original function the mock was created with.
    PassThrough,
}

/// An entry of the one-shot queue.
///
/// Closures queued for a single use are kept as `FnOnce` so they may
/// consume what they captured.
pub(crate) enum Once<I, O, E, R> {
    Behavior(Behavior<I, O, E, R>),
    Implementation(OnceImplementation<I, O, E, R>),
}

impl<I, O, E, R> Behavior<I, O, E, R> {
    pub fn implementation(
        stub: impl FnMut(Option<&R>, I) -> Result<O, E> + Send + 'static,
    ) -> Self {
        Behavior::Implementation(Box::new(stub))
    }

    /// Runs a persistent behavior, leaving it in place for the next
    /// invocation.
    pub(crate) fn call(
        &mut self,
        receiver: Option<&R>,
        input: I,
        original: Option<&mut Implementation<I, O, E, R>>,
        name: &str,
    ) -> Result<O, Failure<E>>
    where
        O: Clone,
    {
        match self {
            Behavior::ReturnValue(value) => Ok(value.clone()),
            Behavior::Implementation(stub) => stub(receiver, input).map_err(Failure::Raised),
            Behavior::PassThrough => pass_through(receiver, input, original, name),
        }
    }

    fn call_once(
        self,
        receiver: Option<&R>,
        input: I,
        original: Option<&mut Implementation<I, O, E, R>>,
        name: &str,
    ) -> Result<O, Failure<E>> {
        match self {
            Behavior::ReturnValue(value) => Ok(value),
            Behavior::Implementation(mut stub) => stub(receiver, input).map_err(Failure::Raised),
            Behavior::PassThrough => pass_through(receiver, input, original, name),
        }
    }
}

impl<I, O, E, R> Once<I, O, E, R> {
    pub(crate) fn implementation(
        stub: impl FnOnce(Option<&R>, I) -> Result<O, E> + Send + 'static,
    ) -> Self {
        Once::Implementation(Box::new(stub))
    }

    /// Runs a one-shot entry, consuming it.
    pub(crate) fn call(
        self,
        receiver: Option<&R>,
        input: I,
        original: Option<&mut Implementation<I, O, E, R>>,
        name: &str,
    ) -> Result<O, Failure<E>> {
        match self {
            Once::Behavior(behavior) => behavior.call_once(receiver, input, original, name),
            Once::Implementation(stub) => stub(receiver, input).map_err(Failure::Raised),
        }
    }
}

impl<I, O, E, R> From<Behavior<I, O, E, R>> for Once<I, O, E, R> {
    fn from(behavior: Behavior<I, O, E, R>) -> Self {
        Once::Behavior(behavior)
    }
}

fn pass_through<I, O, E, R>(
    receiver: Option<&R>,
    input: I,
    original: Option<&mut Implementation<I, O, E, R>>,
    name: &str,
) -> Result<O, Failure<E>> {
    let original = original.ok_or_else(|| Error::NoOriginalImplementation {
        name: name.to_string(),
    })?;

    original(receiver, input).map_err(Failure::Raised)
}

impl<I, O: fmt::Debug, E, R> fmt::Debug for Behavior<I, O, E, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::ReturnValue(value) => f.debug_tuple("ReturnValue").field(value).finish(),
            Behavior::Implementation(_) => f.write_str("Implementation"),
            Behavior::PassThrough => f.write_str("PassThrough"),
        }
    }
}

impl<I, O: fmt::Debug, E, R> fmt::Debug for Once<I, O, E, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Once::Behavior(behavior) => behavior.fmt(f),
            Once::Implementation(_) => f.write_str("Implementation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    #[test]
    fn persistent_return_value_is_reused() {
        let mut behavior: Behavior<(), u32, Infallible, ()> = Behavior::ReturnValue(12);
        assert_eq!(behavior.call(None, (), None, "mock"), Ok(12));
        assert_eq!(behavior.call(None, (), None, "mock"), Ok(12));
    }

    #[test]
    fn once_moves_non_cloneable_values() {
        #[derive(Debug, PartialEq)]
        struct NonCloneable(i32);

        let once: Once<(), NonCloneable, Infallible, ()> =
            Behavior::ReturnValue(NonCloneable(2)).into();
        assert_eq!(once.call(None, (), None, "mock"), Ok(NonCloneable(2)));
    }

    #[test]
    fn once_implementation_consumes_its_captures() {
        let owned = vec![String::from("milk"), String::from("eggs")];
        let once: Once<(), Vec<String>, Infallible, ()> =
            Once::implementation(move |_, ()| Ok(owned));

        assert_eq!(format!("{:?}", once), "Implementation");
        assert_eq!(
            once.call(None, (), None, "mock"),
            Ok(vec![String::from("milk"), String::from("eggs")])
        );
    }

    #[test]
    fn implementation_sees_receiver_and_input() {
        let mut behavior: Behavior<(i32,), i32, Infallible, i32> =
            Behavior::implementation(|receiver, (x,)| Ok(receiver.copied().unwrap_or(0) + x));

        assert_eq!(behavior.call(Some(&40), (2,), None, "mock"), Ok(42));
        assert_eq!(behavior.call(None, (2,), None, "mock"), Ok(2));
    }

    #[test]
    fn pass_through_requires_an_original() {
        let mut behavior: Behavior<(), u32, Infallible, ()> = Behavior::PassThrough;
        assert_eq!(
            behavior.call(None, (), None, "lonely"),
            Err(Failure::Mock(Error::NoOriginalImplementation {
                name: "lonely".to_string()
            }))
        );

        let mut original: Implementation<(), u32, Infallible, ()> =
            Box::new(|_: Option<&()>, ()| Ok(7));
        assert_eq!(behavior.call(None, (), Some(&mut original), "lonely"), Ok(7));
    }
}
