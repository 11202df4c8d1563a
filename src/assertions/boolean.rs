//! Assertions for flags.

use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;

/// Truth checks on a captured `bool`.
#[derive(Debug, Clone)]
pub struct BoolTest<'a> {
    meta: TestMeta<'a>,
    actual: bool,
}

/// Start a chain of boolean checks.
///
/// ```
/// let t = gt::Recorder::new();
/// gt::boolean(&t, 2 > 1).is_true();
/// gt::is_false(&t, "abc".is_empty());
/// assert_eq!(t.errors(), 0);
/// ```
pub fn boolean(t: &dyn Reporter, actual: bool) -> BoolTest<'_> {
    BoolTest {
        meta: TestMeta::new(t),
        actual,
    }
}

/// Short form of [`boolean`].
pub fn b(t: &dyn Reporter, actual: bool) -> BoolTest<'_> {
    boolean(t, actual)
}

/// `boolean(t, actual).is_true()`.
#[track_caller]
pub fn is_true(t: &dyn Reporter, actual: bool) -> BoolTest<'_> {
    boolean(t, actual).is_true()
}

/// `boolean(t, actual).is_false()`.
#[track_caller]
pub fn is_false(t: &dyn Reporter, actual: bool) -> BoolTest<'_> {
    boolean(t, actual).is_false()
}

impl<'a> BoolTest<'a> {
    chain_methods!();

    /// Fail unless the value is `true`.
    #[track_caller]
    pub fn is_true(self) -> Self {
        if !self.actual {
            self.meta.report("expected true, but false");
        }
        self
    }

    /// Fail unless the value is `false`.
    #[track_caller]
    pub fn is_false(self) -> Self {
        if self.actual {
            self.meta.report("expected false, but true");
        }
        self
    }
}
