use crate::connection::error::ApiError;
use thiserror::Error;

/// Failures that stop a publication. Individual case failures are never
/// represented here, they end up in the run summary.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("You have to indicate a Test Run or a Test Plan ID")]
    MissingTarget,
    #[error("A TestRail configuration file is required, see --tr-config")]
    MissingConfig,
    #[error("Test Run #{run_id} and Test Plan #{plan_id} cannot both be targeted")]
    ConflictingTargets { run_id: u64, plan_id: u64 },
    #[error("Test Run #{0} is not available")]
    RunUnavailable(u64),
    #[error("Test Plan #{0} is not available")]
    PlanUnavailable(u64),
    #[error("Cannot list the runs of Test Plan #{plan_id}: {source}")]
    PlanRuns {
        plan_id: u64,
        #[source]
        source: ApiError,
    },
    #[error("Cannot list the tests of Test Run #{run_id}: {source}")]
    RunTests {
        run_id: u64,
        #[source]
        source: ApiError,
    },
}
