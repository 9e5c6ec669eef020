use super::Status;

/// One Robot Framework test attributed to a TestRail case.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct TestResult {
    /// Case identifier as written in the report, e.g. `C1234`.
    case_id: String,
    name: String,
    status: Status,
    #[builder(default = "None")]
    comment: Option<String>,
    /// Elapsed seconds, 0 when the report has no timestamps.
    #[builder(default = "0")]
    duration: u64,
    #[builder(default = "None")]
    version: Option<String>,
}

impl TestResult {
    pub fn builder() -> TestResultBuilder {
        TestResultBuilder::default()
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        if version.is_some() {
            self.version = version;
        }
        self
    }
}
