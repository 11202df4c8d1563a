//! Assertions for primitive numbers.

use crate::diff::diff;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use std::fmt::Debug;

/// Primitive integer and float types.
pub trait Number: PartialOrd + Copy + Debug {}

macro_rules! impl_number {
    ($($ty:ty),*) => {
        $(impl Number for $ty {})*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Ordering checks on a number.
#[derive(Debug, Clone)]
pub struct NumberTest<'a, T> {
    meta: TestMeta<'a>,
    actual: T,
}

/// Start a chain of numeric checks.
///
/// ```
/// let t = gt::Recorder::new();
/// gt::number(&t, 10).greater(5).less(12).not_equal(11);
/// assert_eq!(t.errors(), 0);
/// ```
pub fn number<T: Number>(t: &dyn Reporter, actual: T) -> NumberTest<'_, T> {
    NumberTest {
        meta: TestMeta::new(t),
        actual,
    }
}

/// Short form of [`number`].
pub fn n<T: Number>(t: &dyn Reporter, actual: T) -> NumberTest<'_, T> {
    number(t, actual)
}

impl<'a, T: Number> NumberTest<'a, T> {
    chain_methods!();

    #[track_caller]
    pub fn equal(self, expect: T) -> Self {
        if self.actual != expect {
            self.meta.report(format!(
                "expected equal, but not matched\n{}",
                diff(&expect, &self.actual)
            ));
        }
        self
    }

    #[track_caller]
    pub fn not_equal(self, expect: T) -> Self {
        if self.actual == expect {
            self.meta.report(format!(
                "expected not equal, but matched\n{}",
                diff(&expect, &self.actual)
            ));
        }
        self
    }

    /// Fail unless the value is strictly greater than `than`.
    #[track_caller]
    pub fn greater(self, than: T) -> Self {
        if !(than < self.actual) {
            self.meta.report(format!(
                "expected greater than {:?}, but got {:?}",
                than, self.actual
            ));
        }
        self
    }

    /// Fail unless the value is strictly less than `than`.
    #[track_caller]
    pub fn less(self, than: T) -> Self {
        if !(self.actual < than) {
            self.meta.report(format!(
                "expected less than {:?}, but got {:?}",
                than, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn greater_or_equal(self, than: T) -> Self {
        if !(than <= self.actual) {
            self.meta.report(format!(
                "expected greater than or equal to {:?}, but got {:?}",
                than, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn less_or_equal(self, than: T) -> Self {
        if !(self.actual <= than) {
            self.meta.report(format!(
                "expected less than or equal to {:?}, but got {:?}",
                than, self.actual
            ));
        }
        self
    }
}
