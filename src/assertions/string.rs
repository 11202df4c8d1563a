//! Assertions for text.

use crate::diff::diff;
use crate::errors::GtError;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use regex::Regex;

/// Text checks on a captured string.
#[derive(Debug, Clone)]
pub struct StringTest<'a> {
    meta: TestMeta<'a>,
    actual: String,
}

/// Start a chain of string checks.
///
/// ```
/// let t = gt::Recorder::new();
/// gt::string(&t, "hello world")
///     .has_prefix("hello")
///     .contains("o w")
///     .matches(r"^h\w+ \w+$");
/// assert_eq!(t.errors(), 0);
/// ```
pub fn string(t: &dyn Reporter, actual: impl Into<String>) -> StringTest<'_> {
    StringTest {
        meta: TestMeta::new(t),
        actual: actual.into(),
    }
}

/// Short form of [`string`].
pub fn s(t: &dyn Reporter, actual: impl Into<String>) -> StringTest<'_> {
    string(t, actual)
}

impl<'a> StringTest<'a> {
    chain_methods!();

    #[track_caller]
    pub fn equal(self, expect: &str) -> Self {
        if self.actual != expect {
            self.meta.report(format!(
                "values are not matched\n{}",
                diff(expect, self.actual.as_str())
            ));
        }
        self
    }

    #[track_caller]
    pub fn not_equal(self, expect: &str) -> Self {
        if self.actual == expect {
            self.meta
                .report(format!("values should not be matched, {:?}", self.actual));
        }
        self
    }

    #[track_caller]
    pub fn is_empty(self) -> Self {
        if !self.actual.is_empty() {
            self.meta
                .report(format!("value should be empty, {:?}", self.actual));
        }
        self
    }

    #[track_caller]
    pub fn is_not_empty(self) -> Self {
        if self.actual.is_empty() {
            self.meta.report("value should not be empty");
        }
        self
    }

    #[track_caller]
    pub fn contains(self, sub: &str) -> Self {
        if !self.actual.contains(sub) {
            self.meta.report(format!(
                "value should contain {:?}, {:?}",
                sub, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn not_contains(self, sub: &str) -> Self {
        if self.actual.contains(sub) {
            self.meta.report(format!(
                "value should not contain {:?}, {:?}",
                sub, self.actual
            ));
        }
        self
    }

    /// Pass if at least one of `subs` occurs.
    #[track_caller]
    pub fn contains_any(self, subs: &[&str]) -> Self {
        if !subs.iter().any(|sub| self.actual.contains(sub)) {
            self.meta.report(format!(
                "value should contain any of {:?}, but got: {:?}",
                subs, self.actual
            ));
        }
        self
    }

    /// Fail on the first of `subs` that occurs.
    #[track_caller]
    pub fn contains_none(self, subs: &[&str]) -> Self {
        if let Some(found) = subs.iter().find(|sub| self.actual.contains(*sub)) {
            self.meta.report(format!(
                "value should not contain any of {:?}, but contains {:?} in: {:?}",
                subs, found, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn has_prefix(self, prefix: &str) -> Self {
        if !self.actual.starts_with(prefix) {
            self.meta.report(format!(
                "value should have prefix {:?}, {:?}",
                prefix, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn not_has_prefix(self, prefix: &str) -> Self {
        if self.actual.starts_with(prefix) {
            self.meta.report(format!(
                "value should not have prefix {:?}, {:?}",
                prefix, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn has_suffix(self, suffix: &str) -> Self {
        if !self.actual.ends_with(suffix) {
            self.meta.report(format!(
                "value should have suffix {:?}, {:?}",
                suffix, self.actual
            ));
        }
        self
    }

    #[track_caller]
    pub fn not_has_suffix(self, suffix: &str) -> Self {
        if self.actual.ends_with(suffix) {
            self.meta.report(format!(
                "value should not have suffix {:?}, {:?}",
                suffix, self.actual
            ));
        }
        self
    }

    /// Fail unless the regular expression `pattern` matches somewhere.
    ///
    /// An invalid pattern is reported and aborts the test.
    #[track_caller]
    pub fn matches(self, pattern: &str) -> Self {
        if self.is_match(pattern) == Some(false) {
            self.meta.report(format!(
                "value should match '{}', {:?}",
                pattern, self.actual
            ));
        }
        self
    }

    /// Fail if the regular expression `pattern` matches somewhere.
    #[track_caller]
    pub fn not_matches(self, pattern: &str) -> Self {
        if self.is_match(pattern) == Some(true) {
            self.meta.report(format!(
                "value should not match '{}', {:?}",
                pattern, self.actual
            ));
        }
        self
    }

    #[track_caller]
    fn is_match(&self, pattern: &str) -> Option<bool> {
        match Regex::new(pattern) {
            Ok(re) => Some(re.is_match(&self.actual)),
            Err(source) => {
                let err = GtError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                };
                self.meta.report(err.to_string());
                self.meta.fail_now();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Recorder;

    #[test]
    fn test_equal() {
        let r = Recorder::new();
        string(&r, "hello").equal("hello").not_equal("world");
        assert_eq!(r.errors(), 0);

        string(&r, "hello").equal("world");
        string(&r, "hello").not_equal("hello");
        assert_eq!(r.errors(), 2);
        assert!(r.messages()[0].starts_with("values are not matched\nactual: \"hello\"\nexpect: \"world\""));
    }

    #[test]
    fn test_empty() {
        let r = Recorder::new();
        string(&r, "").is_empty();
        string(&r, "x").is_not_empty();
        assert_eq!(r.errors(), 0);

        string(&r, "x").is_empty();
        string(&r, String::new()).is_not_empty();
        assert_eq!(r.errors(), 2);
    }

    #[test]
    fn test_contains() {
        let r = Recorder::new();
        string(&r, "abcdef")
            .contains("cd")
            .not_contains("xy")
            .contains_any(&["xy", "ef"])
            .contains_none(&["xy", "zz"]);
        assert_eq!(r.errors(), 0);

        string(&r, "abcdef").contains("xy");
        string(&r, "abcdef").not_contains("cd");
        string(&r, "abcdef").contains_any(&["xy", "zz"]);
        string(&r, "abcdef").contains_none(&["xy", "bc", "de"]);
        assert_eq!(r.errors(), 4);
        assert!(r.messages()[3].contains("but contains \"bc\" in: \"abcdef\""));
    }

    #[test]
    fn test_prefix_suffix() {
        let r = Recorder::new();
        string(&r, "abcdef")
            .has_prefix("abc")
            .not_has_prefix("bcd")
            .has_suffix("def")
            .not_has_suffix("cde");
        assert_eq!(r.errors(), 0);

        string(&r, "abcdef").has_prefix("bcd");
        string(&r, "abcdef").not_has_prefix("abc");
        string(&r, "abcdef").has_suffix("cde");
        string(&r, "abcdef").not_has_suffix("def");
        assert_eq!(r.errors(), 4);
    }

    #[test]
    fn test_matches() {
        let r = Recorder::new();
        string(&r, "abc-123").matches(r"\d+").not_matches(r"^\d");
        assert_eq!(r.errors(), 0);

        string(&r, "abc-123").matches(r"^\d");
        string(&r, "abc-123").not_matches(r"\d+");
        assert_eq!(r.errors(), 2);
        assert!(r.messages()[0].starts_with("value should match '^\\d', \"abc-123\""));
    }

    #[test]
    fn test_invalid_pattern_aborts() {
        let r = Recorder::new();
        string(&r, "abc").matches("(");
        assert_eq!(r.errors(), 1);
        assert_eq!(r.fails(), 1);
        assert!(r.messages()[0].starts_with("invalid pattern, ("));
    }

    #[test]
    fn test_describe() {
        let r = Recorder::new();
        string(&r, "hello")
            .describe("Username should match expected value")
            .equal("world");
        assert!(r.messages()[0].starts_with("Username should match expected value\n\nvalues are not matched"));
    }
}
