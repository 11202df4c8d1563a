//! Assertions for arbitrary values.

use crate::diff::diff;
use crate::eval::IsNil;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use std::fmt::Debug;

/// Basic comparisons on a captured value.
#[derive(Debug, Clone)]
pub struct ValueTest<'a, T> {
    meta: TestMeta<'a>,
    actual: T,
}

/// Start a chain of value checks.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct User {
///     name: String,
/// }
///
/// let t = gt::Recorder::new();
/// let u = User { name: "blue".into() };
/// gt::value(&t, &u).equal(&User { name: "blue".into() });
/// gt::value(&t, &u).equal(&User { name: "orange".into() });
/// assert_eq!(t.errors(), 1);
/// ```
pub fn value<T>(t: &dyn Reporter, actual: T) -> ValueTest<'_, T> {
    ValueTest {
        meta: TestMeta::new(t),
        actual,
    }
}

/// Short form of [`value`].
pub fn v<T>(t: &dyn Reporter, actual: T) -> ValueTest<'_, T> {
    value(t, actual)
}

impl<'a, T> ValueTest<'a, T> {
    chain_methods!();

    /// The captured value.
    pub fn actual(&self) -> &T {
        &self.actual
    }

    /// Release the captured value.
    pub fn into_inner(self) -> T {
        self.actual
    }
}

impl<'a, T: PartialEq + Debug> ValueTest<'a, T> {
    /// Fail unless the value equals `expect`.
    #[track_caller]
    pub fn equal(self, expect: T) -> Self {
        if self.actual != expect {
            self.meta
                .report(format!("values are not matched\n{}", diff(&expect, &self.actual)));
        }
        self
    }

    /// Fail if the value equals `expect`.
    #[track_caller]
    pub fn not_equal(self, expect: T) -> Self {
        if self.actual == expect {
            self.meta
                .report(format!("values should not be matched, {:?}", self.actual));
        }
        self
    }

    /// Fail if the value equals none of `expects`.
    #[track_caller]
    pub fn is_in(self, expects: &[T]) -> Self {
        if !expects.iter().any(|e| *e == self.actual) {
            self.meta.report(format!(
                "values should be in {:?}, but not found {:?}",
                expects, self.actual
            ));
        }
        self
    }
}

impl<'a, T: Debug> ValueTest<'a, T> {
    /// [`ValueTest::equal`] with a caller-supplied comparison.
    #[track_caller]
    pub fn equal_by(self, expect: T, eq: impl FnOnce(&T, &T) -> bool) -> Self {
        if !eq(&self.actual, &expect) {
            self.meta
                .report(format!("values are not matched\n{}", diff(&expect, &self.actual)));
        }
        self
    }
}

impl<'a, T: IsNil + Debug> ValueTest<'a, T> {
    /// Fail unless the value is nil.
    #[track_caller]
    pub fn nil(self) -> Self {
        if !self.actual.is_nil() {
            self.meta.report(format!(
                "expected nil, but got {:?} ({})",
                self.actual,
                std::any::type_name::<T>()
            ));
        }
        self
    }

    /// Fail if the value is nil.
    #[track_caller]
    pub fn not_nil(self) -> Self {
        if self.actual.is_nil() {
            self.meta.report("expected not nil, but got nil");
        }
        self
    }
}
