//! Failure sinks that assertion wrappers report into.

use std::cell::{Cell, RefCell};
use std::fmt;

/// Receives assertion failures.
///
/// Wrappers call [`Reporter::error`] for every violated predicate and
/// [`Reporter::fail_now`] when a test has to stop. Reporters take `&self` so
/// that any number of wrappers can share one.
pub trait Reporter {
    /// Record a failure and keep running.
    fn error(&self, message: &str);

    /// Abort the current test.
    ///
    /// Reporters backing real tests panic here and never return. Recording
    /// reporters may return, in which case the wrapper carries on.
    fn fail_now(&self);

    /// Whether any failure has been recorded so far.
    fn failed(&self) -> bool;
}

/// Reporter for `#[test]` functions.
///
/// Failures are collected while the test runs. [`Reporter::fail_now`] panics
/// with everything collected so far, and dropping a reporter that holds
/// failures panics too, so soft failures still fail the test once the
/// reporter goes out of scope.
///
/// ```should_panic
/// let t = gt::TestReporter::new();
/// gt::value(&t, 1).equal(2);
/// gt::value(&t, "a").equal("a");
/// // `t` is dropped here and the test fails with one message.
/// ```
#[derive(Default)]
pub struct TestReporter {
    name: Option<String>,
    failures: RefCell<Vec<String>>,
}

impl TestReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter whose panic message starts with `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            failures: RefCell::new(Vec::new()),
        }
    }

    /// Failure messages recorded so far.
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    fn summary(&self) -> String {
        let failures = self.failures.borrow();
        let name = self.name.as_deref().unwrap_or("test");
        let mut output = format!("{} failed with {} failure(s)", name, failures.len());
        for (idx, failure) in failures.iter().enumerate() {
            output.push_str(&format!("\n\n[{}] {}", idx + 1, failure));
        }
        output
    }
}

impl fmt::Debug for TestReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestReporter")
            .field("name", &self.name)
            .field("failures", &self.failures.borrow().len())
            .finish()
    }
}

impl Reporter for TestReporter {
    fn error(&self, message: &str) {
        log::debug!("assertion failed: {}", message);
        self.failures.borrow_mut().push(message.to_string());
    }

    fn fail_now(&self) {
        let summary = self.summary();
        // Nothing left for Drop to report once we unwind.
        self.failures.borrow_mut().clear();
        log::error!("{}", summary);
        panic!("{}", summary);
    }

    fn failed(&self) -> bool {
        !self.failures.borrow().is_empty()
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.failures.borrow().is_empty() || std::thread::panicking() {
            return;
        }
        panic!("{}", self.summary());
    }
}

/// Reporter that only records what happens to it.
///
/// Errors reported after the first `fail_now` are not recorded, which is what
/// a caller would observe if the abort had really stopped the test.
#[derive(Debug, Default)]
pub struct Recorder {
    messages: RefCell<Vec<String>>,
    fails: Cell<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded failure messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of recorded errors.
    pub fn errors(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Number of `fail_now` calls.
    pub fn fails(&self) -> usize {
        self.fails.get()
    }
}

impl Reporter for Recorder {
    fn error(&self, message: &str) {
        if self.fails.get() == 0 {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn fail_now(&self) {
        self.fails.set(self.fails.get() + 1);
    }

    fn failed(&self) -> bool {
        !self.messages.borrow().is_empty() || self.fails.get() > 0
    }
}

/// Escalates every error of the wrapped reporter into `fail_now`.
#[derive(Clone, Copy)]
pub struct FailFast<'a> {
    inner: &'a dyn Reporter,
}

impl<'a> FailFast<'a> {
    pub fn new(inner: &'a dyn Reporter) -> Self {
        Self { inner }
    }
}

impl Reporter for FailFast<'_> {
    fn error(&self, message: &str) {
        self.inner.error(message);
        self.inner.fail_now();
    }

    fn fail_now(&self) {
        self.inner.fail_now();
    }

    fn failed(&self) -> bool {
        self.inner.failed()
    }
}
