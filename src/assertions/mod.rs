//! Per-type assertion wrappers.

mod array;
mod boolean;
mod cast;
mod error;
mod file;
mod generic;
mod map;
mod number;
mod result;
mod string;
mod time;
mod value;

pub use array::{a, array, ArrayTest};
pub use boolean::{b, boolean, is_false, is_true, BoolTest};
pub use cast::{c, cast, cast_box};
pub use error::{error, error_as, no_error, ErrorTest, NoErrorTest};
pub use file::{f, file, FileTest};
pub use generic::{eq, equal, expect_error, ne, nil, not_equal, not_nil};
pub use map::{m, map, AssocMap, MapTest};
pub use number::{n, number, Number, NumberTest};
pub use result::{ret, ResultTest};
pub use string::{s, string, StringTest};
pub use time::{time, TimeTest};
pub use value::{v, value, ValueTest};
