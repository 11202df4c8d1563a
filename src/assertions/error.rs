//! Assertions for errors and their `source()` chains.

use crate::eval::{chain, dump_error};
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use std::any::type_name;
use std::error::Error as StdError;

/// Checks on an error value.
///
/// Built by [`error`] over a present error, or by
/// [`ResultTest::error`](crate::ResultTest::error) which may hold none. Every
/// check on an absent error is skipped except [`ErrorTest::contains`], since
/// the absence was already reported when the wrapper was built.
#[derive(Debug, Clone)]
pub struct ErrorTest<'a> {
    meta: TestMeta<'a>,
    actual: Option<&'a (dyn StdError + 'static)>,
}

/// Start a chain of checks on `actual`.
///
/// ```
/// use std::io;
///
/// let t = gt::Recorder::new();
/// let err = io::Error::new(io::ErrorKind::NotFound, "no such user");
/// gt::error(&t, &err).is::<io::Error>().contains("no such user");
/// assert_eq!(t.errors(), 0);
/// ```
pub fn error<'a>(t: &'a dyn Reporter, actual: &'a (dyn StdError + 'static)) -> ErrorTest<'a> {
    ErrorTest {
        meta: TestMeta::new(t),
        actual: Some(actual),
    }
}

impl<'a> ErrorTest<'a> {
    chain_methods!();

    #[track_caller]
    pub(crate) fn from_option(
        t: &'a dyn Reporter,
        actual: Option<&'a (dyn StdError + 'static)>,
    ) -> Self {
        let meta = TestMeta::new(t);
        if actual.is_none() {
            meta.report("expected error, but got no error");
        }
        Self { meta, actual }
    }

    fn holds<E: StdError + 'static>(&self) -> Option<bool> {
        self.actual.map(|err| chain(err).any(|e| e.is::<E>()))
    }

    /// Fail unless an error of type `E` is somewhere in the chain.
    #[track_caller]
    pub fn is<E: StdError + 'static>(self) -> Self {
        if let (Some(false), Some(err)) = (self.holds::<E>(), self.actual) {
            self.meta.report(format!(
                "expected {}, but not got from {:?}",
                type_name::<E>(),
                dump_error(err)
            ));
        }
        self
    }

    /// Fail if an error of type `E` is somewhere in the chain.
    #[track_caller]
    pub fn is_not<E: StdError + 'static>(self) -> Self {
        if let (Some(true), Some(err)) = (self.holds::<E>(), self.actual) {
            self.meta.report(format!(
                "not expected {}, but got from {:?}",
                type_name::<E>(),
                dump_error(err)
            ));
        }
        self
    }

    /// Fail unless some error in the chain has type `E` and equals `expected`.
    #[track_caller]
    pub fn is_value<E>(self, expected: &E) -> Self
    where
        E: StdError + PartialEq + 'static,
    {
        if let Some(err) = self.actual {
            let found = chain(err)
                .filter_map(|e| e.downcast_ref::<E>())
                .any(|e| e == expected);
            if !found {
                self.meta.report(format!(
                    "expected {:?}, but not got from {:?}",
                    expected,
                    dump_error(err)
                ));
            }
        }
        self
    }

    /// Fail unless the top-level message contains `substr`.
    #[track_caller]
    pub fn contains(self, substr: &str) -> Self {
        match self.actual {
            None => self.meta.report(format!(
                "expected error containing {:?}, but got no error",
                substr
            )),
            Some(err) => {
                let msg = err.to_string();
                if !msg.contains(substr) {
                    self.meta.report(format!(
                        "expected error message containing {:?}, but got {:?}",
                        substr, msg
                    ));
                }
            }
        }
        self
    }
}

/// Call `f` with the first error of type `E` in the chain of `actual`.
///
/// Fails without calling `f` when no such error exists.
#[track_caller]
pub fn error_as<E: StdError + 'static>(
    t: &dyn Reporter,
    actual: &(dyn StdError + 'static),
    f: impl FnOnce(&E),
) {
    match chain(actual).find_map(|e| e.downcast_ref::<E>()) {
        Some(found) => f(found),
        None => TestMeta::new(t).report(format!(
            "expected {}, but got {:?}",
            type_name::<E>(),
            dump_error(actual)
        )),
    }
}

/// Outcome of [`no_error`], able to abort the test afterwards.
#[derive(Debug, Clone)]
pub struct NoErrorTest<'a> {
    meta: TestMeta<'a>,
    errored: bool,
}

/// Fail if `actual` is an `Err`.
///
/// ```
/// let t = gt::Recorder::new();
/// let parsed: Result<u8, _> = "12".parse::<u8>();
/// gt::no_error(&t, &parsed).required();
/// assert_eq!(t.errors(), 0);
/// ```
#[track_caller]
pub fn no_error<'a, T, E: StdError + 'static>(
    t: &'a dyn Reporter,
    actual: &Result<T, E>,
) -> NoErrorTest<'a> {
    let meta = TestMeta::new(t);
    if let Err(err) = actual {
        meta.report(format!("expected no error, but got {}", dump_error(err)));
    }
    NoErrorTest {
        meta,
        errored: actual.is_err(),
    }
}

impl NoErrorTest<'_> {
    /// Abort the test if there was an error.
    pub fn required(self) {
        if self.errored {
            self.meta.fail_now();
        }
    }
}
