//! Robot Framework `output.xml` reading.

mod comment;
pub mod error;
mod extractor;

pub use self::error::ExtractError;
pub use self::extractor::RobotResults;

use crate::model::TestResult;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens a report for streaming extraction.
pub fn open(path: &Path) -> Result<RobotResults<BufReader<File>>, ExtractError> {
    let file = File::open(path)?;
    Ok(RobotResults::new(BufReader::new(file)))
}

/// Reads every result of a report.
pub fn extract_file(path: &Path) -> Result<Vec<TestResult>, ExtractError> {
    open(path)?.collect()
}
