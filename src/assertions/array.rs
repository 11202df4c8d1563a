//! Assertions for slices.

use crate::diff::diff;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use std::fmt::Debug;

/// Slice checks, on top of whole-value comparison.
#[derive(Debug, Clone)]
pub struct ArrayTest<'a, T> {
    meta: TestMeta<'a>,
    actual: &'a [T],
}

/// Start a chain of slice checks.
///
/// ```
/// let t = gt::Recorder::new();
/// let v = vec![1, 2, 3, 5];
/// gt::array(&t, &v)
///     .length(4)
///     .have(5)
///     .contain(&[2, 3])
///     .equal_at(2, 3);
/// assert_eq!(t.errors(), 0);
/// ```
pub fn array<'a, T>(t: &'a dyn Reporter, actual: &'a [T]) -> ArrayTest<'a, T> {
    ArrayTest {
        meta: TestMeta::new(t),
        actual,
    }
}

/// Short form of [`array`].
pub fn a<'a, T>(t: &'a dyn Reporter, actual: &'a [T]) -> ArrayTest<'a, T> {
    array(t, actual)
}

impl<'a, T> ArrayTest<'a, T> {
    chain_methods!();

    fn out_of_range(&self, idx: usize) -> Option<String> {
        if idx < self.actual.len() {
            return None;
        }
        Some(format!(
            "array length is {}, then {} is out of range",
            self.actual.len(),
            idx
        ))
    }

    /// Fail unless there are exactly `expect` elements.
    #[track_caller]
    pub fn length(self, expect: usize) -> Self {
        if self.actual.len() != expect {
            self.meta.report(format!(
                "array length is expected to be {}, but actual is {}",
                expect,
                self.actual.len()
            ));
        }
        self
    }

    /// Fail unless there are more than `expect` elements.
    #[track_caller]
    pub fn longer(self, expect: usize) -> Self {
        if self.actual.len() <= expect {
            self.meta.report(format!(
                "array length is expected to be longer than {}, but actual is {}",
                expect,
                self.actual.len()
            ));
        }
        self
    }

    /// Fail unless there are fewer than `expect` elements.
    #[track_caller]
    pub fn shorter(self, expect: usize) -> Self {
        if self.actual.len() >= expect {
            self.meta.report(format!(
                "array length is expected to be shorter than {}, but actual is {}",
                expect,
                self.actual.len()
            ));
        }
        self
    }

    /// Call `f` with the element at `idx`. An out-of-range index fails
    /// without calling `f`.
    #[track_caller]
    pub fn at(self, idx: usize, f: impl FnOnce(&dyn Reporter, &T)) -> Self {
        match self.out_of_range(idx) {
            Some(msg) => self.meta.report(msg),
            None => self.meta.with_reporter(|t| f(t, &self.actual[idx])),
        }
        self
    }

    /// Call `then` with the first element accepted by `matches`. Fails when
    /// no element matches.
    #[track_caller]
    pub fn match_then(
        self,
        matches: impl Fn(&T) -> bool,
        then: impl FnOnce(&dyn Reporter, &T),
    ) -> Self {
        match self.actual.iter().find(|v| matches(v)) {
            Some(found) => self.meta.with_reporter(|t| then(t, found)),
            None => self.meta.report("no matched elements in array"),
        }
        self
    }
}

impl<'a, T: Debug> ArrayTest<'a, T> {
    /// Fail unless `f` accepts at least one element.
    #[track_caller]
    pub fn any(self, f: impl Fn(&T) -> bool) -> Self {
        if !self.actual.iter().any(|v| f(v)) {
            self.meta.report("no matched elements in array");
        }
        self
    }

    /// Fail at the first element `f` rejects.
    #[track_caller]
    pub fn all(self, f: impl Fn(&T) -> bool) -> Self {
        if let Some(unmatched) = self.actual.iter().find(|v| !f(v)) {
            self.meta
                .report(format!("unmatched element found in array: {:?}", unmatched));
        }
        self
    }
}

impl<'a, T: PartialEq + Debug> ArrayTest<'a, T> {
    /// Fail unless the slice equals `expect` element by element.
    #[track_caller]
    pub fn equal(self, expect: &[T]) -> Self {
        if self.actual != expect {
            self.meta
                .report(format!("arrays are not matched\n{}", diff(expect, self.actual)));
        }
        self
    }

    /// Fail if the slice equals `expect`.
    #[track_caller]
    pub fn not_equal(self, expect: &[T]) -> Self {
        if self.actual == expect {
            self.meta
                .report(format!("arrays should not be matched, {:?}", self.actual));
        }
        self
    }

    /// Fail unless the element at `idx` equals `expect`.
    #[track_caller]
    pub fn equal_at(self, idx: usize, expect: T) -> Self {
        if let Some(msg) = self.out_of_range(idx) {
            self.meta.report(msg);
        } else if self.actual[idx] != expect {
            self.meta.report(format!(
                "array[{}] is expected {:?}, but actual is {:?}",
                idx, expect, self.actual[idx]
            ));
        }
        self
    }

    /// Fail if the element at `idx` equals `expect`, or `idx` is out of range.
    #[track_caller]
    pub fn not_equal_at(self, idx: usize, expect: T) -> Self {
        if let Some(msg) = self.out_of_range(idx) {
            self.meta.report(msg);
        } else if self.actual[idx] == expect {
            self.meta.report(format!(
                "array[{}] is not expected {:?}, but actual is {:?}",
                idx, expect, self.actual[idx]
            ));
        }
        self
    }

    /// Fail unless some element equals `expect`.
    #[track_caller]
    pub fn have(self, expect: T) -> Self {
        if !self.actual.contains(&expect) {
            self.meta.report(format!(
                "{:?} expects to have {:?}, but not contains",
                self.actual, expect
            ));
        }
        self
    }

    /// Fail if some element equals `expect`.
    #[track_caller]
    pub fn not_have(self, expect: T) -> Self {
        if self.actual.contains(&expect) {
            self.meta.report(format!(
                "{:?} does not expect to have {:?}, but contains",
                self.actual, expect
            ));
        }
        self
    }

    /// Fail unless `expect` occurs as a contiguous run of elements.
    #[track_caller]
    pub fn contain(self, expect: &[T]) -> Self {
        if !self.contains_run(expect) {
            self.meta.report(format!(
                "{:?} expects to contain {:?}, but not contains",
                self.actual, expect
            ));
        }
        self
    }

    /// Fail if `expect` occurs as a contiguous run of elements.
    #[track_caller]
    pub fn not_contain(self, expect: &[T]) -> Self {
        if self.contains_run(expect) {
            self.meta.report(format!(
                "{:?} does not expect to contain {:?}, but contains",
                self.actual, expect
            ));
        }
        self
    }

    /// Fail at the first pair of equal elements.
    #[track_caller]
    pub fn distinct(self) -> Self {
        for (i, left) in self.actual.iter().enumerate() {
            if let Some(offset) = self.actual[i + 1..].iter().position(|right| right == left) {
                self.meta.report(format!(
                    "array[{}] and array[{}] are not distinct ({:?})",
                    i,
                    i + 1 + offset,
                    left
                ));
                break;
            }
        }
        self
    }

    // An empty run matches at any starting position, so it is found in every
    // non-empty slice and in no empty one.
    fn contains_run(&self, expect: &[T]) -> bool {
        (0..self.actual.len()).any(|start| {
            self.actual[start..].len() >= expect.len()
                && self.actual[start..start + expect.len()] == *expect
        })
    }
}
