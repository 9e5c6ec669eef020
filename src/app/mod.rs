pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod summary;
pub(crate) mod target;

pub use self::error::PublishError;
pub use self::summary::{CaseFailure, RunSummary, Summary};
pub use self::target::Target;

use crate::configuration::constants::common::DEFAULT_DELAY;
use crate::connection::ApiTransport;
use crate::model::TestResult;
use crate::reporter::{Outcome, Reporter};
use crate::connection::error::ApiError;
use crate::testrail::{extract_case_id, TestRailApi};
use std::thread::sleep;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Version stamped on every published result.
    pub version: Option<String>,
    /// Skip cases currently marked as blocked in the run.
    pub exclude_blocked: bool,
    /// Only publish cases that are part of the run.
    pub check_membership: bool,
    /// One `add_results_for_cases` request per run instead of one per case.
    pub bulk: bool,
    /// Pause after each request, TestRail enforces a rate limit.
    pub delay: Duration,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            version: None,
            exclude_blocked: false,
            check_membership: false,
            bulk: false,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Sends extracted results to a Test Run, or to every open run of a Test
/// Plan, one request at a time.
pub struct Publisher<'a, T> {
    api: &'a TestRailApi<T>,
    reporter: &'a dyn Reporter,
    options: PublishOptions,
}

impl<'a, T: ApiTransport> Publisher<'a, T> {
    pub fn new(api: &'a TestRailApi<T>, reporter: &'a dyn Reporter, options: PublishOptions) -> Self {
        Self {
            api,
            reporter,
            options,
        }
    }

    pub fn publish(&self, target: Target, results: &[TestResult]) -> Result<Summary, PublishError> {
        match target {
            Target::Run(run_id) => self.publish_run(run_id, results).map(Summary::from),
            Target::Plan(plan_id) => self.publish_plan(plan_id, results),
        }
    }

    /// Replays the same results against every open run of the plan, in plan
    /// order. Only the plan itself being unavailable is fatal.
    fn publish_plan(&self, plan_id: u64, results: &[TestResult]) -> Result<Summary, PublishError> {
        if !self.api.is_test_plan_open(plan_id) {
            return Err(PublishError::PlanUnavailable(plan_id));
        }
        info!("Publish in Test Plan #{}", plan_id);
        let runs = self
            .api
            .list_open_runs_in_plan(plan_id)
            .map_err(|source| PublishError::PlanRuns { plan_id, source })?;
        debug!("Open runs of Test Plan #{}: {:?}", plan_id, runs);

        let mut summary = Summary::default();
        for run_id in runs {
            match self.publish_run(run_id, results) {
                Ok(run) => summary.runs.push(run),
                Err(e) => error!("{}", e),
            }
        }
        Ok(summary)
    }

    pub fn publish_run(&self, run_id: u64, results: &[TestResult]) -> Result<RunSummary, PublishError> {
        if !self.api.is_test_run_open(run_id) {
            return Err(PublishError::RunUnavailable(run_id));
        }
        info!("Publish in Test Run #{}", run_id);

        let mut summary = RunSummary::new(run_id);
        let mut selection: Vec<TestResult> = results
            .iter()
            .cloned()
            .map(|result| result.with_version(self.options.version.clone()))
            .collect();

        if self.options.check_membership || self.options.exclude_blocked {
            let tests = self
                .api
                .list_tests(run_id)
                .map_err(|source| PublishError::RunTests { run_id, source })?;
            if self.options.check_membership {
                summary.not_in_run =
                    filter::retain_members(&mut selection, &filter::run_cases(&tests));
                debug!(
                    "{} result(s) not part of Test Run #{}",
                    summary.not_in_run, run_id
                );
            }
            if self.options.exclude_blocked {
                info!("Option \"Don't publish blocked testcases\" activated");
                let blocked = filter::blocked_cases(&tests);
                info!(
                    "Blocked testcases excluded: {}",
                    blocked
                        .iter()
                        .map(u64::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                summary.blocked = filter::exclude_blocked(&mut selection, &blocked);
            }
        }

        if self.options.bulk {
            self.send_batch(&mut summary, &selection);
        } else {
            self.send_each(&mut summary, &selection);
        }
        info!(
            "{} result(s) published in Test Run #{}.",
            summary.published, run_id
        );
        Ok(summary)
    }

    fn send_each(&self, summary: &mut RunSummary, selection: &[TestResult]) {
        for result in selection {
            match self.api.publish_one(summary.run_id, result) {
                Ok(_) => {
                    summary.published += 1;
                    debug!("{}\t{}\t{}\t", result.case_id(), result.status(), result.name());
                    self.reporter.report(result, Outcome::Published);
                }
                Err(e) if e.is_case_not_in_run() => {
                    debug!(
                        "{}\t{}\t{}\tnot in Test Run #{}",
                        result.case_id(),
                        result.status(),
                        result.name(),
                        summary.run_id
                    );
                }
                Err(e) => {
                    error!(
                        "{}\t{}\t{}\tnot published: {}",
                        result.case_id(),
                        result.status(),
                        result.name(),
                        e
                    );
                    self.reporter.report(result, Outcome::Failed(&e));
                    summary.failures.push(CaseFailure {
                        case_id: result.case_id().to_owned(),
                        message: e.to_string(),
                    });
                }
            }
            self.pause();
        }
    }

    fn send_batch(&self, summary: &mut RunSummary, selection: &[TestResult]) {
        if selection.is_empty() {
            return;
        }
        let outcome =
            self.api
                .publish_batch(summary.run_id, self.options.version.as_deref(), selection);
        match outcome {
            Ok(Some(_)) => {
                summary.published = selection.len();
                for result in selection {
                    self.reporter.report(result, Outcome::Published);
                }
            }
            Ok(None) => {
                let malformed = selection
                    .iter()
                    .map(TestResult::case_id)
                    .find(|case_id| extract_case_id(case_id).is_none())
                    .unwrap_or_default();
                let e = ApiError::MalformedCaseId(malformed.to_owned());
                for result in selection {
                    self.reporter.report(result, Outcome::Failed(&e));
                    summary.failures.push(CaseFailure {
                        case_id: result.case_id().to_owned(),
                        message: format!("Batch rejected: {}", e),
                    });
                }
            }
            Err(e) => {
                error!("Batch for Test Run #{} not published: {}", summary.run_id, e);
                for result in selection {
                    self.reporter.report(result, Outcome::Failed(&e));
                    summary.failures.push(CaseFailure {
                        case_id: result.case_id().to_owned(),
                        message: e.to_string(),
                    });
                }
            }
        }
        self.pause();
    }

    fn pause(&self) {
        if self.options.delay > Duration::from_millis(0) {
            sleep(self.options.delay);
        }
    }
}
