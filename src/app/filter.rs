//! Selection of the results worth sending to a run.

use crate::model::TestResult;
use crate::testrail::entity::Test;
use crate::testrail::{extract_case_id, BLOCKED_STATUS_ID};
use std::collections::BTreeSet;

/// Case ids of the tests currently marked as blocked in a run.
pub fn blocked_cases(tests: &[Test]) -> BTreeSet<u64> {
    tests
        .iter()
        .filter(|test| test.status_id == BLOCKED_STATUS_ID)
        .map(|test| test.case_id)
        .collect()
}

/// Case ids of every test in a run.
pub fn run_cases(tests: &[Test]) -> BTreeSet<u64> {
    tests.iter().map(|test| test.case_id).collect()
}

/// Drops the results whose case is blocked. Returns the number dropped.
pub fn exclude_blocked(results: &mut Vec<TestResult>, blocked: &BTreeSet<u64>) -> usize {
    let before = results.len();
    results.retain(|result| match extract_case_id(result.case_id()) {
        Some(case_id) => !blocked.contains(&case_id),
        None => true,
    });
    before - results.len()
}

/// Keeps only the results whose case belongs to the run. Returns the number
/// dropped, malformed ids included.
pub fn retain_members(results: &mut Vec<TestResult>, members: &BTreeSet<u64>) -> usize {
    let before = results.len();
    results.retain(|result| {
        extract_case_id(result.case_id())
            .map(|case_id| members.contains(&case_id))
            .unwrap_or(false)
    });
    before - results.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn results(ids: &[&str]) -> Vec<TestResult> {
        ids.iter()
            .map(|id| {
                TestResult::builder()
                    .case_id(*id)
                    .name("Test")
                    .status(Status::Pass)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    fn ids(results: &[TestResult]) -> Vec<&str> {
        results.iter().map(|r| r.case_id()).collect()
    }

    fn tests() -> Vec<Test> {
        vec![
            Test { case_id: 1, status_id: 1 },
            Test { case_id: 2, status_id: 2 },
            Test { case_id: 3, status_id: 3 },
            Test { case_id: 4, status_id: 2 },
        ]
    }

    #[test]
    fn test_blocked_cases() {
        assert_eq!(
            blocked_cases(&tests()),
            vec![2, 4].into_iter().collect::<BTreeSet<u64>>()
        );
    }

    #[test]
    fn test_exclude_blocked_keeps_malformed_ids() {
        let mut selection = results(&["C1", "C2", "bogus", "c4"]);

        let dropped = exclude_blocked(&mut selection, &blocked_cases(&tests()));

        assert_eq!(dropped, 2);
        assert_eq!(ids(&selection), vec!["C1", "bogus"]);
    }

    #[test]
    fn test_retain_members() {
        let mut selection = results(&["C1", "C9", "bogus", "3"]);

        let dropped = retain_members(&mut selection, &run_cases(&tests()));

        assert_eq!(dropped, 2);
        assert_eq!(ids(&selection), vec!["C1", "3"]);
    }
}
