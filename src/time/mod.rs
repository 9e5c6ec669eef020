pub mod error;
pub mod timestamp;
pub mod timeunit;
