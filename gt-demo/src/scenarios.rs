//! Failing scenarios shown by the demo.

use gt::Reporter;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::io;

#[allow(dead_code)]
#[derive(Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn user(name: &str) -> User {
    User {
        id: 123,
        name: name.to_string(),
        email: format!("{}@example.com", name),
        active: true,
    }
}

#[derive(Debug)]
struct LookupError {
    source: io::Error,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lookup failed")
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A named piece of test code expected to fail.
pub struct Scenario {
    pub name: &'static str,
    pub run: fn(&dyn Reporter),
}

/// What a scenario reported.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutput {
    pub name: &'static str,
    pub aborted: bool,
    pub messages: Vec<String>,
}

impl Scenario {
    pub fn execute(&self) -> ScenarioOutput {
        let recorder = gt::Recorder::new();
        (self.run)(&recorder);
        ScenarioOutput {
            name: self.name,
            aborted: recorder.fails() > 0,
            messages: recorder.messages(),
        }
    }
}

fn number_without_description(t: &dyn Reporter) {
    gt::value(t, 123).equal(456);
}

fn number_with_description(t: &dyn Reporter) {
    gt::value(t, 123)
        .describe(format!("User ID should be {} for user {}", 456, "Alice"))
        .equal(456);
}

fn struct_diff(t: &dyn Reporter) {
    gt::value(t, &user("Alice"))
        .describe("User record should round-trip through storage")
        .equal(&user("Alicia"));
}

fn array_element(t: &dyn Reporter) {
    let ids = [3, 5, 8];
    gt::array(t, &ids)
        .describe("Fibonacci list should contain 13")
        .have(13)
        .length(4);
}

fn map_key(t: &dyn Reporter) {
    let mut stock = HashMap::new();
    stock.insert("blue", 5);
    gt::map(t, &stock)
        .describe("Inventory should track orange")
        .has_key("orange");
}

fn string_pattern(t: &dyn Reporter) {
    gt::string(t, "user-42")
        .describe("Identifiers are numeric")
        .matches(r"^\d+$");
}

fn error_chain(t: &dyn Reporter) {
    let err = LookupError {
        source: io::Error::new(io::ErrorKind::TimedOut, "connection timed out"),
    };
    gt::error(t, &err).is::<fmt::Error>().contains("not found");
}

fn must_stops_early(t: &dyn Reporter) {
    gt::number(t, 17).must().greater_or_equal(18);
    gt::boolean(t, false).is_true();
}

fn long_description(t: &dyn Reporter) {
    gt::boolean(t, false)
        .describe(
            "This description is long enough that it has to be wrapped over several \
             lines before the failure message is printed underneath it",
        )
        .is_true();
}

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "number without description",
        run: number_without_description,
    },
    Scenario {
        name: "number with description",
        run: number_with_description,
    },
    Scenario {
        name: "struct diff",
        run: struct_diff,
    },
    Scenario {
        name: "array element",
        run: array_element,
    },
    Scenario {
        name: "map key",
        run: map_key,
    },
    Scenario {
        name: "string pattern",
        run: string_pattern,
    },
    Scenario {
        name: "error chain",
        run: error_chain,
    },
    Scenario {
        name: "must stops early",
        run: must_stops_early,
    },
    Scenario {
        name: "long description",
        run: long_description,
    },
];
