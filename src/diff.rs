//! Human-readable differences between an expected and an actual value.

use crate::config;
use similar::{ChangeTag, TextDiff};
use std::fmt::Debug;

/// Describe how `actual` differs from `expect`.
///
/// Composite values (anything whose pretty `Debug` form spans several
/// lines) get a line diff, `-` for `expect` and `+` for `actual`. Scalars are
/// printed side by side.
///
/// ```
/// assert_eq!(gt::diff(&2, &1), "actual: 1\nexpect: 2");
/// ```
pub fn diff<E, A>(expect: &E, actual: &A) -> String
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    diff_with_context(expect, actual, config::current().diff_context)
}

/// [`diff`] with an explicit number of context lines around each change.
pub fn diff_with_context<E, A>(expect: &E, actual: &A, context: usize) -> String
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    let expect_text = format!("{:#?}", expect);
    let actual_text = format!("{:#?}", actual);

    if !expect_text.contains('\n') && !actual_text.contains('\n') {
        return format!("actual: {:?}\nexpect: {:?}", actual, expect);
    }
    if expect_text == actual_text {
        return format!("diff: values render identically\n{}", actual_text);
    }

    let mut output = String::from("diff:\n--- expect\n+++ actual");
    let text_diff = TextDiff::from_lines(expect_text.as_str(), actual_text.as_str());
    for (idx, group) in text_diff.grouped_ops(context).iter().enumerate() {
        if idx > 0 {
            output.push_str("\n...");
        }
        for op in group {
            for change in text_diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                output.push('\n');
                output.push(sign);
                output.push_str(change.value().trim_end_matches('\n'));
            }
        }
    }
    output
}
