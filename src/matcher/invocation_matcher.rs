use std::fmt::{self, Formatter};

use paste::paste;

use super::ArgMatcher;

/// Matcher for the whole argument tuple of a call.
///
/// Implementors provide an expectation for each argument.
///
/// This trait is implemented for tuples of [`ArgMatcher`] of up to
/// ten elements, matching mocks whose arguments are tuples of the same
/// length. The trait is sealed so its methods may change without a
/// breaking release.
///
/// # Examples
///
/// ## Simple
///
/// ```
/// use faux_fn::matcher::{self, InvocationMatcher};
///
/// let matcher = (matcher::eq(5), matcher::any());
/// assert!(matcher.matches(&(5, "hello")).is_ok());
/// assert!(matcher.matches(&(3, "hello")).is_err());
/// ```
///
/// ## Single argument
///
/// ```
/// use faux_fn::matcher::{self, InvocationMatcher};
///
/// // single argument mocks take a one-element tuple
/// // don't forget the trailing comma to denote it is a tuple
/// let matcher = (matcher::eq(20),);
/// assert!(matcher.matches(&(20,)).is_ok());
/// ```
pub trait InvocationMatcher<Args>: private::Sealed {
    /// Returns `Ok(())` when all arguments match.
    ///
    /// Returns `Err(Mismatch)` if any argument fails to match. The
    /// mismatch details the expected and actual value of every
    /// argument.
    fn matches(&self, args: &Args) -> Result<(), Mismatch>;
}

mod private {
    pub trait Sealed {}
}

/// Describes why an [`InvocationMatcher`] rejected a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    arguments: Vec<ArgumentMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ArgumentMatch {
    did_match: bool,
    expected: String,
    actual: String,
}

impl ArgumentMatch {
    fn new<Arg: fmt::Debug>(matcher: &impl ArgMatcher<Arg>, actual: &Arg) -> Self {
        ArgumentMatch {
            did_match: matcher.matches(actual),
            expected: matcher.to_string(),
            actual: format!("{:?}", actual),
        }
    }
}

impl Mismatch {
    fn check(mut arguments: Vec<ArgumentMatch>) -> Result<(), Mismatch> {
        if arguments.iter().all(|arg| arg.did_match) {
            return Ok(());
        }

        arguments.iter_mut().for_each(|arg| {
            let width = arg.expected.len().max(arg.actual.len());
            arg.expected = format!("{:<width$}", arg.expected, width = width);
            arg.actual = format!("{:<width$}", arg.actual, width = width);
        });

        Err(Mismatch { arguments })
    }

    /// Positions of the arguments that did not match.
    pub fn positions(&self) -> Vec<usize> {
        self.arguments
            .iter()
            .enumerate()
            .filter(|(_, arg)| !arg.did_match)
            .map(|(i, _)| i)
            .collect()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let [ArgumentMatch {
            expected, actual, ..
        }] = self.arguments.as_slice()
        {
            return write!(
                f,
                "Argument did not match.
  Expected: {}
  Actual:   {}",
                expected.trim_end(),
                actual.trim_end()
            );
        }

        f.write_str("Arguments did not match\n")?;

        let expected: Vec<_> = self.arguments.iter().map(|a| a.expected.as_str()).collect();
        let actual: Vec<_> = self.arguments.iter().map(|a| a.actual.as_str()).collect();
        writeln!(f, "  Expected: [{}]", expected.join(", "))?;
        writeln!(f, "  Actual:   [{}]", actual.join(", "))?;

        let mut mismatches = self
            .arguments
            .iter()
            .enumerate()
            .filter(|(_, arg)| !arg.did_match);

        if let Some((i, arg)) = mismatches.next() {
            write!(
                f,
                "  Argument {}:
    Expected: {}
    Actual:   {}",
                i,
                arg.expected.trim_end(),
                arg.actual.trim_end()
            )?;
        }

        mismatches.try_for_each(|(i, arg)| {
            write!(
                f,
                "\n  Argument {}:
    Expected: {}
    Actual:   {}",
                i,
                arg.expected.trim_end(),
                arg.actual.trim_end()
            )
        })
    }
}

impl std::error::Error for Mismatch {}

/// Matches every call regardless of its arguments.
pub struct AnyInvocation;

impl private::Sealed for AnyInvocation {}

impl<Args> InvocationMatcher<Args> for AnyInvocation {
    /// Always returns Ok(())
    fn matches(&self, _: &Args) -> Result<(), Mismatch> {
        Ok(())
    }
}

impl private::Sealed for () {}

impl InvocationMatcher<()> for () {
    /// Always succeeds, as there are no arguments to match against.
    fn matches(&self, _: &()) -> Result<(), Mismatch> {
        Ok(())
    }
}

// implement InvocationMatcher for tuples of ArgMatchers
macro_rules! tuple {
    ($($idx:tt),+) => (
        paste! {
            impl<$([<A $idx>]: fmt::Debug),+, $([<AM $idx>]: ArgMatcher<[<A $idx>]>),+>
                InvocationMatcher<($([<A $idx>],)+)> for ($([<AM $idx>],)+)
            {
                /// Succeeds if every argument matches its corresponding [`ArgMatcher`].
                fn matches(&self, args: &($([<A $idx>],)+)) -> Result<(), Mismatch> {
                    Mismatch::check(vec![
                        $(ArgumentMatch::new(&self.$idx, &args.$idx)),+
                    ])
                }            }

            impl<$([<AM $idx>]),+> private::Sealed for ($([<AM $idx>],)+) {}
        }
    )
}

tuple! { 0 }
tuple! { 0, 1 }
tuple! { 0, 1, 2 }
tuple! { 0, 1, 2, 3 }
tuple! { 0, 1, 2, 3, 4 }
tuple! { 0, 1, 2, 3, 4, 5 }
tuple! { 0, 1, 2, 3, 4, 5, 6 }
tuple! { 0, 1, 2, 3, 4, 5, 6, 7 }
tuple! { 0, 1, 2, 3, 4, 5, 6, 7, 8 }
tuple! { 0, 1, 2, 3, 4, 5, 6, 7, 8, 9 }
