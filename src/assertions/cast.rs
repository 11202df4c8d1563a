//! Checked downcasts that abort the test on a type mismatch.

use crate::meta::TestMeta;
use crate::reporter::Reporter;
use std::any::{type_name, Any};

#[track_caller]
fn cannot_cast<T>(t: &dyn Reporter) {
    let meta = TestMeta::new(t);
    meta.report(format!("expected {}, but can not cast", type_name::<T>()));
    meta.fail_now();
}

/// Downcast `v` to `T`, aborting the test when it is something else.
///
/// Note that a `&Box<dyn Any>` is itself an `Any`; pass `&*boxed` to look
/// inside the box.
///
/// ```
/// use std::any::Any;
///
/// let t = gt::Recorder::new();
/// let v: Box<dyn Any> = Box::new(String::from("blue"));
/// let s = gt::cast::<String>(&t, &*v);
/// assert_eq!(s.map(String::as_str), Some("blue"));
/// ```
#[track_caller]
pub fn cast<'v, T: Any>(t: &dyn Reporter, v: &'v dyn Any) -> Option<&'v T> {
    let casted = v.downcast_ref::<T>();
    if casted.is_none() {
        cannot_cast::<T>(t);
    }
    casted
}

/// Short form of [`cast`].
#[track_caller]
pub fn c<'v, T: Any>(t: &dyn Reporter, v: &'v dyn Any) -> Option<&'v T> {
    cast(t, v)
}

/// Owned form of [`cast`].
#[track_caller]
pub fn cast_box<T: Any>(t: &dyn Reporter, v: Box<dyn Any>) -> Option<T> {
    match v.downcast::<T>() {
        Ok(casted) => Some(*casted),
        Err(_) => {
            cannot_cast::<T>(t);
            None
        }
    }
}
