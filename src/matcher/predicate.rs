use std::fmt::{self, Formatter};

use super::ArgMatcher;

/// Matches arguments accepted by a closure.
///
/// Created by [`predicate`](fn@predicate) or the
/// [`predicate!`](crate::predicate!) macro. Failed checks show the
/// description between angle brackets in place of an expected value.
pub struct Predicate<F> {
    description: String,
    check: F,
}

impl<Arg, F> ArgMatcher<Arg> for Predicate<F>
where
    Arg: ?Sized,
    F: Fn(&Arg) -> bool,
{
    fn matches(&self, argument: &Arg) -> bool {
        (self.check)(argument)
    }
}

impl<F> fmt::Display for Predicate<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.description)
    }
}

/// Creates a [`Predicate`] matcher described by `description`.
///
/// ```
/// use faux_fn::matcher::{predicate, ArgMatcher};
///
/// let in_stock = predicate("in stock", |count: &u32| *count > 0);
/// assert!(in_stock.matches(&3));
/// assert!(!in_stock.matches(&0));
/// assert_eq!(in_stock.to_string(), "<in stock>");
/// ```
pub fn predicate<Arg, F>(description: impl Into<String>, check: F) -> Predicate<F>
where
    Arg: ?Sized,
    F: Fn(&Arg) -> bool,
{
    Predicate {
        description: description.into(),
        check,
    }
}

/// Creates a [`Predicate`](crate::matcher::Predicate) described by the
/// source of the closure.
///
/// Annotate the closure parameter so the argument type is known.
///
/// ```
/// use faux_fn::{matcher::ArgMatcher, predicate};
///
/// let dairy = predicate!(|item: &String| item.ends_with("milk"));
/// assert!(dairy.matches(&"oat milk".to_string()));
/// assert!(!dairy.matches(&"bread".to_string()));
/// ```
#[macro_export]
macro_rules! predicate {
    ($check:expr $(,)?) => {
        $crate::matcher::predicate(stringify!($check), $check)
    };
}
