use super::{Outcome, Reporter};
use crate::model::{Status, TestResult};
use colored::Colorize;

/// Prints one colored line per result on stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn line(result: &TestResult, outcome: &Outcome<'_>) -> String {
        let id = result.case_id().bold();
        let status = result.status().as_str();
        match outcome {
            Outcome::Failed(error) => format!(
                "{}\t{}\t{}\t=> {}",
                id,
                status.magenta(),
                result.name(),
                error
            ),
            _ if result.status() == Status::Pass => {
                format!("{}\t{}\t{}\t", id, status.bright_green(), result.name())
            }
            _ => format!("{}\t{}\t{}\t", id, status.bright_red(), result.name()),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, result: &TestResult, outcome: Outcome<'_>) {
        println!("{}", Self::line(result, &outcome));
    }
}
