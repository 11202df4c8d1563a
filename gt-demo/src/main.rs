//! Prints the failure messages gt produces for a set of failing checks.
//!
//! Run with `--json` for machine-readable output.

mod scenarios;

use scenarios::{ScenarioOutput, SCENARIOS};

fn print_text(outputs: &[ScenarioOutput]) {
    for output in outputs {
        let marker = if output.aborted { " (aborted)" } else { "" };
        println!("=== {}{}", output.name, marker);
        for message in &output.messages {
            println!("{}\n", message);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    gt::config::init_from_env()?;
    let mut config = gt::config::current();
    config.show_location = false;
    gt::config::install(config);

    let outputs: Vec<ScenarioOutput> = SCENARIOS.iter().map(|s| s.execute()).collect();

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        print_text(&outputs);
    }
    Ok(())
}
