use crate::config::ScopedConfig;
use crate::formatter::wrap;
use crate::{Recorder, Reporter, TestReporter};
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use unicode_width::UnicodeWidthStr;

const LONG_DESCRIPTION: &str = "This is a very long description that contains more than 80 \
characters to test how describe handles longer text inputs that might need special \
formatting in error messages.";

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default()
}

#[test]
fn test_passing_checks_with_describe() {
    let t = TestReporter::named("describe");
    crate::value(&t, 42).describe("Number test").equal(42);
    crate::array(&t, &[1, 2, 3])
        .describe(format!("Array of {} elements", 3))
        .length(3);
    crate::value(&t, "hello").describe("String test").equal("hello");
    crate::value(&t, true)
        .describe(format!("Boolean test: {}", true))
        .equal(true);
    assert!(!t.failed());
}

#[test]
fn test_method_chaining_with_describe() {
    let r = Recorder::new();
    crate::value(&r, 5)
        .describe("Method chaining test")
        .not_equal(4)
        .equal(5);
    crate::array(&r, &["a", "b"])
        .describe("Array method chaining")
        .have("a")
        .not_have("c")
        .length(2);
    assert_eq!(r.errors(), 0);
}

#[test]
fn test_long_description_is_wrapped() {
    let _scoped = ScopedConfig::hold();
    let r = Recorder::new();
    crate::value(&r, 1).describe(LONG_DESCRIPTION).equal(2);

    let message = &r.messages()[0];
    let (description, rest) = message.split_once("\n\n").unwrap();
    assert!(rest.starts_with("values are not matched"));

    let lines: Vec<&str> = description.lines().collect();
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|line| line.width() <= 80));
    assert_eq!(lines.join(" "), LONG_DESCRIPTION);
    assert_eq!(wrap(LONG_DESCRIPTION, 80), lines);
}

#[test]
fn test_failure_carries_location() {
    let _scoped = ScopedConfig::hold();
    let r = Recorder::new();
    crate::number(&r, 1).greater(2);
    let message = &r.messages()[0];
    assert!(message.contains("\n  --> src/tests.rs:"));
}

#[test]
fn test_soft_failures_fail_test_on_drop() {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let t = TestReporter::named("soft");
        crate::value(&t, 1).equal(2);
        crate::string(&t, "abc").has_suffix("x");
        crate::value(&t, 3).equal(3);
    }));

    let message = panic_message(result.unwrap_err());
    assert!(message.starts_with("soft failed with 2 failure(s)"));
    assert!(message.contains("[1] values are not matched"));
    assert!(message.contains("[2] value should have suffix \"x\", \"abc\""));
}

#[test]
fn test_must_aborts_at_first_failure() {
    let reached = std::cell::Cell::new(false);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let t = TestReporter::named("must");
        crate::array(&t, &[1, 2]).must().length(3);
        reached.set(true);
    }));

    assert!(!reached.get());
    let message = panic_message(result.unwrap_err());
    assert!(message.starts_with("must failed with 1 failure(s)"));
}

#[test]
fn test_required_stops_after_earlier_soft_failure() {
    let reached = std::cell::Cell::new(false);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let t = TestReporter::named("required");
        crate::value(&t, "a").equal("b");
        crate::value(&t, "unrelated").required();
        reached.set(true);
    }));

    assert!(!reached.get());
    assert!(result.is_err());
}

#[test]
fn test_nested_callbacks_share_escalation() {
    let r = Recorder::new();
    let mut users = HashMap::new();
    users.insert("blue", vec![1, 2, 3]);

    crate::map(&r, &users).must().at("blue", |t, ids| {
        crate::array(t, ids.as_slice()).length(3).have(5);
    });
    assert_eq!(r.errors(), 1);
    assert_eq!(r.fails(), 1);
}

#[test]
fn test_result_and_cast_together() {
    let r = Recorder::new();
    let parsed = crate::ret("17".parse::<u32>()).no_error(&r);
    crate::value(&r, parsed).equal(Some(17));

    let boxed: Box<dyn std::any::Any> = Box::new(parsed);
    let back = crate::cast::<Option<u32>>(&r, &*boxed);
    crate::value(&r, back.copied().flatten()).equal(Some(17));
    assert_eq!(r.errors(), 0);
}
