//! Assertions on the outcome of a fallible call.

use super::error::ErrorTest;
use crate::eval::dump_error;
use crate::meta::TestMeta;
use crate::reporter::Reporter;
use std::error::Error as StdError;

/// Wraps the `Result` of a call under test.
///
/// Calls returning several values are checked through a tuple `T`.
#[derive(Debug, Clone)]
pub struct ResultTest<T, E> {
    actual: Result<T, E>,
}

/// Capture the result of a call.
///
/// ```
/// let t = gt::Recorder::new();
/// let n = gt::ret("42".parse::<i32>()).no_error(&t);
/// assert_eq!(n, Some(42));
///
/// gt::ret("x".parse::<i32>()).error(&t).contains("invalid digit");
/// assert_eq!(t.errors(), 0);
/// ```
pub fn ret<T, E>(actual: Result<T, E>) -> ResultTest<T, E> {
    ResultTest { actual }
}

impl<T, E: StdError + 'static> ResultTest<T, E> {
    /// Fail on `Ok` and return checks over the error.
    #[track_caller]
    pub fn error<'a>(&'a self, t: &'a dyn Reporter) -> ErrorTest<'a> {
        match &self.actual {
            Ok(_) => {
                TestMeta::new(t).report("got no error, but should get errored");
                ErrorTest::from_option(t, None)
            }
            Err(err) => ErrorTest::from_option(t, Some(err)),
        }
    }

    /// Fail on `Err`, otherwise hand back the returned value.
    #[track_caller]
    pub fn no_error(self, t: &dyn Reporter) -> Option<T> {
        match self.actual {
            Ok(value) => Some(value),
            Err(err) => {
                TestMeta::new(t).report(format!(
                    "got errored, but should not get error: {}",
                    dump_error(&err)
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;
    use std::io;

    fn open(name: &str) -> Result<(String, usize), io::Error> {
        if name.is_empty() {
            Err(io::Error::new(io::ErrorKind::InvalidInput, "empty name"))
        } else {
            Ok((name.to_uppercase(), name.len()))
        }
    }

    #[test]
    fn test_no_error_returns_values() {
        let r = Recorder::new();
        let got = ret(open("blue")).no_error(&r);
        assert_eq!(got, Some(("BLUE".to_string(), 4)));
        assert_eq!(r.errors(), 0);
    }

    #[test]
    fn test_no_error_on_err() {
        let r = Recorder::new();
        let got = ret(open("")).no_error(&r);
        assert_eq!(got, None);
        assert_eq!(r.errors(), 1);
        assert!(r.messages()[0].starts_with("got errored, but should not get error: empty name"));
    }

    #[test]
    fn test_error_on_err() {
        let r = Recorder::new();
        let result = ret(open(""));
        result.error(&r).is::<io::Error>().contains("empty");
        assert_eq!(r.errors(), 0);
    }

    #[test]
    fn test_error_on_ok() {
        let r = Recorder::new();
        let result = ret(open("blue"));
        result.error(&r);
        assert_eq!(r.errors(), 2);
        assert!(r.messages()[0].starts_with("got no error, but should get errored"));
        assert!(r.messages()[1].starts_with("expected error, but got no error"));
    }
}
