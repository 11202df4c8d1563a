//! Assertions for points in time.

use crate::diff::diff;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use chrono::{DateTime, TimeZone};

/// Checks on a `DateTime`.
///
/// Comparisons are made on the instant, so the same moment expressed in two
/// zones is equal.
#[derive(Debug, Clone)]
pub struct TimeTest<'a, Tz: TimeZone> {
    meta: TestMeta<'a>,
    actual: DateTime<Tz>,
}

/// Start a chain of time checks.
///
/// ```
/// use chrono::{Duration, Utc};
///
/// let t = gt::Recorder::new();
/// let now = Utc::now();
/// gt::time(&t, now).after(now - Duration::seconds(1)).equal(now);
/// assert_eq!(t.errors(), 0);
/// ```
pub fn time<Tz: TimeZone>(t: &dyn Reporter, actual: DateTime<Tz>) -> TimeTest<'_, Tz> {
    TimeTest {
        meta: TestMeta::new(t),
        actual,
    }
}

impl<'a, Tz: TimeZone> TimeTest<'a, Tz> {
    chain_methods!();

    #[track_caller]
    pub fn equal<Tz2: TimeZone>(self, expect: DateTime<Tz2>) -> Self {
        if self.actual.naive_utc() != expect.naive_utc() {
            self.meta
                .report(format!("values are not matched\n{}", diff(&expect, &self.actual)));
        }
        self
    }

    #[track_caller]
    pub fn not_equal<Tz2: TimeZone>(self, expect: DateTime<Tz2>) -> Self {
        if self.actual.naive_utc() == expect.naive_utc() {
            self.meta
                .report(format!("values should not be matched, {:?}", self.actual));
        }
        self
    }

    /// Fail unless the time is strictly before `expect`.
    #[track_caller]
    pub fn before<Tz2: TimeZone>(self, expect: DateTime<Tz2>) -> Self {
        if self.actual.naive_utc() >= expect.naive_utc() {
            self.meta.report(format!(
                "value should be before than {:?}, {:?}",
                expect, self.actual
            ));
        }
        self
    }

    /// Fail unless the time is strictly after `expect`.
    #[track_caller]
    pub fn after<Tz2: TimeZone>(self, expect: DateTime<Tz2>) -> Self {
        if self.actual.naive_utc() <= expect.naive_utc() {
            self.meta.report(format!(
                "value should be after than {:?}, {:?}",
                expect, self.actual
            ));
        }
        self
    }
}
