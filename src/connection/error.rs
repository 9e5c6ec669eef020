use thiserror::Error;

/// Message returned by TestRail when a case is not part of the targeted run.
const CASE_NOT_IN_RUN: &str = "No (active) test found for the run/case combination";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("TestRail API returned HTTP {status} ({message})")]
    Http { status: u16, message: String },
    #[error("Failed to reach TestRail: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected TestRail response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Malformed test case id '{0}'")]
    MalformedCaseId(String),
}

impl ApiError {
    /// Expected when a superset of results is published against a run that
    /// only holds some of the cases.
    pub fn is_case_not_in_run(&self) -> bool {
        match self {
            ApiError::Http { message, .. } => message.contains(CASE_NOT_IN_RUN),
            _ => false,
        }
    }
}
