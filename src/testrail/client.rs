use super::entity::{Plan, Run, Test, TestsPage};
use super::extract_case_id;
use super::payload::{BatchPayload, ResultPayload};
use crate::connection::error::ApiError;
use crate::connection::ApiTransport;
use crate::model::TestResult;
use serde_json::Value;

const API_PREFIX: &str = "/api/v2/";

/// Typed TestRail operations composed over an [`ApiTransport`].
pub struct TestRailApi<T> {
    transport: T,
}

impl<T: ApiTransport> TestRailApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// True if the run exists and is not completed. Lookup failures are
    /// logged and reported as unavailable.
    pub fn is_test_run_open(&self, run_id: u64) -> bool {
        match self.get_run(run_id) {
            Ok(run) => !run.is_completed,
            Err(e) => {
                error!("Cannot fetch Test Run #{}: {}", run_id, e);
                false
            }
        }
    }

    /// True if the plan exists and is not completed. Lookup failures are
    /// logged and reported as unavailable.
    pub fn is_test_plan_open(&self, plan_id: u64) -> bool {
        match self.get_plan(plan_id) {
            Ok(plan) => !plan.is_completed,
            Err(e) => {
                error!("Cannot fetch Test Plan #{}: {}", plan_id, e);
                false
            }
        }
    }

    /// Ids of the runs of a plan that are still open, in plan order.
    pub fn list_open_runs_in_plan(&self, plan_id: u64) -> Result<Vec<u64>, ApiError> {
        let plan = self.get_plan(plan_id)?;
        Ok(plan
            .entries
            .into_iter()
            .flat_map(|entry| entry.runs)
            .filter(|run| !run.is_completed)
            .map(|run| run.id)
            .collect())
    }

    /// Every test of a run, following pagination links when present.
    pub fn list_tests(&self, run_id: u64) -> Result<Vec<Test>, ApiError> {
        let mut tests = Vec::new();
        let mut uri = Some(format!("get_tests/{}", run_id));
        while let Some(current) = uri.take() {
            let page: TestsPage = serde_json::from_value(self.transport.send_get(&current)?)?;
            match page {
                TestsPage::List(list) => tests.extend(list),
                TestsPage::Paginated { tests: list, links } => {
                    tests.extend(list);
                    uri = links.next.as_deref().and_then(relative_uri);
                }
            }
        }
        debug!("Test Run #{} holds {} test(s)", run_id, tests.len());
        Ok(tests)
    }

    /// Publishes one result. Errors from TestRail are returned untouched so
    /// the caller decides whether they matter.
    pub fn publish_one(&self, run_id: u64, result: &TestResult) -> Result<Value, ApiError> {
        let case_id = extract_case_id(result.case_id())
            .ok_or_else(|| ApiError::MalformedCaseId(result.case_id().to_owned()))?;
        let data = serde_json::to_value(ResultPayload::new(result))?;
        self.transport.send_post(
            &format!("add_result_for_case/{}/{}", run_id, case_id),
            &data,
        )
    }

    /// Publishes all results in a single request. The whole batch is refused,
    /// and `None` returned, as soon as one case id cannot be normalized.
    pub fn publish_batch(
        &self,
        run_id: u64,
        version: Option<&str>,
        results: &[TestResult],
    ) -> Result<Option<Value>, ApiError> {
        let mut entries = Vec::with_capacity(results.len());
        for result in results {
            match extract_case_id(result.case_id()) {
                Some(case_id) => entries.push(
                    ResultPayload::new(result)
                        .for_case(case_id)
                        .with_version(version),
                ),
                None => {
                    error!(
                        "Malformed test case id '{}' ({}), batch for Test Run #{} not sent",
                        result.case_id(),
                        result.name(),
                        run_id
                    );
                    return Ok(None);
                }
            }
        }
        let data = serde_json::to_value(BatchPayload { results: entries })?;
        self.transport
            .send_post(&format!("add_results_for_cases/{}", run_id), &data)
            .map(Some)
    }

    fn get_run(&self, run_id: u64) -> Result<Run, ApiError> {
        let response = self.transport.send_get(&format!("get_run/{}", run_id))?;
        Ok(serde_json::from_value(response)?)
    }

    fn get_plan(&self, plan_id: u64) -> Result<Plan, ApiError> {
        let response = self.transport.send_get(&format!("get_plan/{}", plan_id))?;
        Ok(serde_json::from_value(response)?)
    }
}

/// Turns a pagination link such as `/api/v2/get_tests/1&offset=250` into a
/// uri relative to the API root.
fn relative_uri(link: &str) -> Option<String> {
    link.find(API_PREFIX)
        .map(|start| link[start + API_PREFIX.len()..].to_owned())
        .filter(|uri| !uri.is_empty())
}
