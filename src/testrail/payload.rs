use crate::model::TestResult;
use serde_derive::Serialize;

/// Body of `add_result_for_case`, or one entry of `add_results_for_cases`.
#[derive(Debug, Serialize)]
pub(crate) struct ResultPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    case_id: Option<u64>,
    status_id: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed: Option<String>,
}

impl<'a> ResultPayload<'a> {
    pub fn new(result: &'a TestResult) -> Self {
        Self {
            case_id: None,
            status_id: result.status().testrail_id(),
            version: result.version(),
            comment: result.comment(),
            elapsed: match result.duration() {
                0 => None,
                seconds => Some(format!("{}s", seconds)),
            },
        }
    }

    pub fn for_case(mut self, case_id: u64) -> Self {
        self.case_id = Some(case_id);
        self
    }

    pub fn with_version(mut self, version: Option<&'a str>) -> Self {
        if version.is_some() {
            self.version = version;
        }
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchPayload<'a> {
    pub results: Vec<ResultPayload<'a>>,
}
