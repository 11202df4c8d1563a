//! State shared by every assertion wrapper.

use crate::config;
use crate::formatter::{format_error_message, with_location};
use crate::reporter::{FailFast, Reporter};
use std::fmt;
use std::panic::Location;

/// Reporter, description and escalation mode of one wrapper chain.
#[derive(Clone)]
pub(crate) struct TestMeta<'a> {
    reporter: &'a dyn Reporter,
    description: Option<String>,
    fail_fast: bool,
}

impl<'a> TestMeta<'a> {
    pub(crate) fn new(reporter: &'a dyn Reporter) -> Self {
        Self {
            reporter,
            description: None,
            fail_fast: false,
        }
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    pub(crate) fn set_fail_fast(&mut self) {
        self.fail_fast = true;
    }

    /// Format `message` and hand it to the reporter.
    #[track_caller]
    pub(crate) fn report(&self, message: impl AsRef<str>) {
        let config = config::current();
        let mut output = format_error_message(
            self.description.as_deref(),
            message.as_ref(),
            config.description_width,
        );
        if config.show_location {
            output = with_location(&output, Location::caller());
        }

        self.reporter.error(&output);
        if self.fail_fast {
            self.reporter.fail_now();
        }
    }

    /// Abort right away.
    pub(crate) fn fail_now(&self) {
        self.reporter.fail_now();
    }

    /// Abort if the reporter has seen a failure already.
    pub(crate) fn required(&self) {
        if self.reporter.failed() {
            match &self.description {
                Some(description) => log::error!("required check failed: {}", description),
                None => log::error!("required check failed"),
            }
            self.reporter.fail_now();
        }
    }

    /// Run `f` with the reporter callbacks should receive.
    pub(crate) fn with_reporter<R>(&self, f: impl FnOnce(&dyn Reporter) -> R) -> R {
        if self.fail_fast {
            let escalating = FailFast::new(self.reporter);
            f(&escalating)
        } else {
            f(self.reporter)
        }
    }
}

impl fmt::Debug for TestMeta<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMeta")
            .field("description", &self.description)
            .field("fail_fast", &self.fail_fast)
            .finish()
    }
}

/// Adds `describe`, `must` and `required` to a wrapper with a `meta` field.
macro_rules! chain_methods {
    () => {
        /// Attach a description shown with every later failure of this chain.
        ///
        /// Use `describe(format!(..))` for a formatted description.
        pub fn describe(mut self, description: impl Into<String>) -> Self {
            self.meta.set_description(description.into());
            self
        }

        /// Escalate every later failure of this chain into an immediate abort.
        pub fn must(mut self) -> Self {
            self.meta.set_fail_fast();
            self
        }

        /// Abort now if the reporter has already recorded a failure.
        pub fn required(self) -> Self {
            self.meta.required();
            self
        }
    };
}

pub(crate) use chain_methods;
