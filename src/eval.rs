//! Evaluation hooks shared by the assertion wrappers.
//!
//! Equality is plain [`PartialEq`]: a type changes how it is compared by
//! changing its `PartialEq` impl. The nil check is the [`IsNil`] trait, which
//! downstream types may implement for themselves.

use std::error::Error as StdError;
use std::fs;
use std::path::Path;

/// Values that have an "absent" state.
///
/// ```
/// use gt::IsNil;
///
/// assert!(None::<i32>.is_nil());
/// assert!(Vec::<u8>::new().is_nil());
/// assert!(!Some(0).is_nil());
/// ```
pub trait IsNil {
    fn is_nil(&self) -> bool;
}

impl<T> IsNil for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsNil for [T] {
    fn is_nil(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> IsNil for [T; N] {
    fn is_nil(&self) -> bool {
        N == 0
    }
}

impl<T> IsNil for Vec<T> {
    fn is_nil(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ?Sized> IsNil for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> IsNil for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: IsNil + ?Sized> IsNil for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: IsNil + ?Sized> IsNil for &mut T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

/// Whether `path` names something whose metadata can be read.
///
/// Any failure, including permission errors, counts as absent.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Render an error and its `source()` chain, outermost first.
pub fn dump_error(err: &(dyn StdError + 'static)) -> String {
    let mut output = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        output.push_str(": ");
        output.push_str(&cause.to_string());
        source = cause.source();
    }
    output
}

/// Iterate an error and every error in its `source()` chain.
pub(crate) fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}
