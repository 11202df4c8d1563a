//! One-shot checks that do not need a wrapper.

use crate::diff::diff;
use crate::eval::{dump_error, IsNil};
use crate::meta::TestMeta;
use crate::reporter::Reporter;
use std::error::Error as StdError;
use std::fmt::Debug;

/// Fail unless `actual` equals `expected`.
///
/// ```
/// let t = gt::Recorder::new();
/// gt::equal(&t, vec![1, 2], vec![1, 2]);
/// gt::ne(&t, "a", "b");
/// assert_eq!(t.errors(), 0);
/// ```
#[track_caller]
pub fn equal<T: PartialEq + Debug>(t: &dyn Reporter, actual: T, expected: T) {
    if actual != expected {
        TestMeta::new(t).report(format!(
            "values should be matched, but not match\n{}",
            diff(&expected, &actual)
        ));
    }
}

/// Short form of [`equal`].
#[track_caller]
pub fn eq<T: PartialEq + Debug>(t: &dyn Reporter, actual: T, expected: T) {
    equal(t, actual, expected)
}

/// Fail if `actual` equals `expected`.
#[track_caller]
pub fn not_equal<T: PartialEq + Debug>(t: &dyn Reporter, actual: T, expected: T) {
    if actual == expected {
        TestMeta::new(t).report(format!(
            "values should not be matched, but match\n{}",
            diff(&expected, &actual)
        ));
    }
}

/// Short form of [`not_equal`].
#[track_caller]
pub fn ne<T: PartialEq + Debug>(t: &dyn Reporter, actual: T, expected: T) {
    not_equal(t, actual, expected)
}

#[track_caller]
pub fn nil<T: IsNil + ?Sized>(t: &dyn Reporter, actual: &T) {
    if !actual.is_nil() {
        TestMeta::new(t).report("value should be nil, but not nil");
    }
}

#[track_caller]
pub fn not_nil<T: IsNil + ?Sized>(t: &dyn Reporter, actual: &T) {
    if actual.is_nil() {
        TestMeta::new(t).report("value should not be nil, but nil");
    }
}

/// Fail unless `actual` is an `Err` exactly when `expected` is true.
#[track_caller]
pub fn expect_error<T, E: StdError + 'static>(
    t: &dyn Reporter,
    expected: bool,
    actual: &Result<T, E>,
) {
    match (expected, actual) {
        (true, Ok(_)) => TestMeta::new(t).report("expected error, but got no error"),
        (false, Err(err)) => TestMeta::new(t).report(format!(
            "expected no error, but got error: {}",
            dump_error(err)
        )),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;
    use std::num::ParseIntError;

    #[test]
    fn test_equal() {
        let r = Recorder::new();
        equal(&r, 1, 1);
        eq(&r, "a", "a");
        not_equal(&r, 1, 2);
        ne(&r, vec![1], vec![2]);
        assert_eq!(r.errors(), 0);

        equal(&r, 1, 2);
        not_equal(&r, "a", "a");
        assert_eq!(r.errors(), 2);
        insta::assert_snapshot!(r.messages()[0].lines().take(3).collect::<Vec<_>>().join("\n"), @r###"
        values should be matched, but not match
        actual: 1
        expect: 2
        "###);
    }

    #[test]
    fn test_nil() {
        let r = Recorder::new();
        nil(&r, &None::<u8>);
        nil(&r, &Vec::<u8>::new());
        not_nil(&r, &Some(0));
        not_nil(&r, "abc".as_bytes());
        assert_eq!(r.errors(), 0);

        nil(&r, &Some(0));
        not_nil(&r, &[0u8; 0]);
        assert_eq!(r.errors(), 2);
        assert!(r.messages()[0].starts_with("value should be nil, but not nil"));
        assert!(r.messages()[1].starts_with("value should not be nil, but nil"));
    }

    #[test]
    fn test_expect_error() {
        let r = Recorder::new();
        let bad: Result<i32, ParseIntError> = "x".parse();
        let good: Result<i32, ParseIntError> = "1".parse();
        expect_error(&r, true, &bad);
        expect_error(&r, false, &good);
        assert_eq!(r.errors(), 0);

        expect_error(&r, true, &good);
        expect_error(&r, false, &bad);
        assert_eq!(r.errors(), 2);
        assert!(r.messages()[0].starts_with("expected error, but got no error"));
        assert!(r.messages()[1].starts_with("expected no error, but got error: invalid digit"));
    }
}
