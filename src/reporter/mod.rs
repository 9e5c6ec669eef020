pub mod console;

use crate::connection::error::ApiError;
use crate::model::TestResult;

/// What happened to a result while publishing.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// Listed without publishing (dry run).
    Extracted,
    Published,
    Failed(&'a ApiError),
}

/// Receives per-result outcomes from the publisher.
pub trait Reporter {
    fn report(&self, result: &TestResult, outcome: Outcome<'_>);
}

#[cfg(test)]
pub mod recording {
    use super::*;
    use std::cell::RefCell;

    /// Keeps `(case id, outcome)` pairs for assertions.
    #[derive(Default)]
    pub struct RecordingReporter {
        entries: RefCell<Vec<(String, String)>>,
    }

    impl RecordingReporter {
        pub fn entries(&self) -> Vec<(String, String)> {
            self.entries.borrow().clone()
        }
    }

    impl Reporter for RecordingReporter {
        fn report(&self, result: &TestResult, outcome: Outcome<'_>) {
            let outcome = match outcome {
                Outcome::Extracted => "extracted".to_owned(),
                Outcome::Published => "published".to_owned(),
                Outcome::Failed(error) => format!("failed: {}", error),
            };
            self.entries
                .borrow_mut()
                .push((result.case_id().to_owned(), outcome));
        }
    }
}
