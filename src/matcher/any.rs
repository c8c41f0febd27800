use std::fmt::{self, Formatter};

use super::ArgMatcher;

/// Matches any argument.
pub struct Any;

impl<Arg: ?Sized> ArgMatcher<Arg> for Any {
    fn matches(&self, _: &Arg) -> bool {
        true
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("_")
    }
}

/// Creates an [`Any`] matcher.
pub fn any() -> Any {
    Any
}
