mod status;
mod test_result;

pub use status::{Status, UnknownStatus};
pub use test_result::TestResult;
