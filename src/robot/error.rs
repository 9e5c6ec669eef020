use crate::model::UnknownStatus;
use crate::time::error::Error as TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Cannot read report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
    #[error("Report ended before the document was complete")]
    Truncated,
    #[error("Test '{test}' has no status")]
    MissingStatus { test: String },
    #[error("Test '{test}': {source}")]
    Status {
        test: String,
        #[source]
        source: UnknownStatus,
    },
    #[error("Test '{test}': {source}")]
    Time {
        test: String,
        #[source]
        source: TimeError,
    },
    #[error("Cannot build result: {0}")]
    Build(String),
}
