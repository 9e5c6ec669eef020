use thiserror::Error;

/// An error that occurred while parsing a duration or a report timestamp.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{0}")]
    Syntax(String),
    #[error("{0}")]
    UnitNotSupported(String),
    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid elapsed time '{0}'")]
    Elapsed(String),
}
