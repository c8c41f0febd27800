use std::{
    borrow::Borrow,
    fmt::{self, Formatter},
};

use super::ArgMatcher;

/// Matches arguments equal to the expected value.
///
/// The argument is compared through [`Borrow`], so `Eq<T>` checks
/// arguments of type `T`, `&T`, `Box<T>` and so on.
pub struct Eq<Expected>(Expected);

/// Creates an [`Eq`](struct@Eq) matcher.
pub fn eq<Expected: fmt::Debug + PartialEq>(expected: Expected) -> Eq<Expected> {
    Eq(expected)
}

impl<Arg, Expected> ArgMatcher<Arg> for Eq<Expected>
where
    Arg: Borrow<Expected> + ?Sized,
    Expected: fmt::Debug + PartialEq,
{
    fn matches(&self, actual: &Arg) -> bool {
        actual.borrow() == &self.0
    }
}

impl<Expected: fmt::Debug> fmt::Display for Eq<Expected> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Matches slice-like arguments holding the expected element.
///
/// ```
/// use faux_fn::matcher::{contains, ArgMatcher};
///
/// let list = vec!["milk".to_string(), "eggs".to_string()];
/// assert!(contains("eggs".to_string()).matches(&list));
/// assert!(!contains("flour".to_string()).matches(&list));
/// ```
pub struct Contains<Item>(Item);

/// Creates a [`Contains`] matcher.
pub fn contains<Item: fmt::Debug + PartialEq>(item: Item) -> Contains<Item> {
    Contains(item)
}

impl<Arg, Item> ArgMatcher<Arg> for Contains<Item>
where
    Arg: AsRef<[Item]> + ?Sized,
    Item: fmt::Debug + PartialEq,
{
    fn matches(&self, actual: &Arg) -> bool {
        actual.as_ref().contains(&self.0)
    }
}

impl<Item: fmt::Debug> fmt::Display for Contains<Item> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[.., {:?}, ..]", self.0)
    }
}

/// Inverts another matcher.
pub struct Not<M>(M);

/// Creates a [`Not`] matcher.
///
/// ```
/// use faux_fn::matcher::{eq, not, ArgMatcher};
///
/// assert!(not(eq(0)).matches(&7));
/// assert_eq!(not(eq(0)).to_string(), "!0");
/// ```
pub fn not<M>(matcher: M) -> Not<M> {
    Not(matcher)
}

impl<Arg, M> ArgMatcher<Arg> for Not<M>
where
    Arg: ?Sized,
    M: ArgMatcher<Arg>,
{
    fn matches(&self, actual: &Arg) -> bool {
        !self.0.matches(actual)
    }
}

impl<M: fmt::Display> fmt::Display for Not<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.0)
    }
}
