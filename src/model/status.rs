use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome of a Robot Framework test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown test status '{0}'")]
pub struct UnknownStatus(pub String);

impl Status {
    /// Identifier of the matching TestRail result status.
    pub fn testrail_id(self) -> u8 {
        match self {
            Status::Pass => 1,
            Status::Skip => 4,
            Status::Fail => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Skip => "SKIP",
        }
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Status::Pass),
            "FAIL" => Ok(Status::Fail),
            "SKIP" => Ok(Status::Skip),
            _ => Err(UnknownStatus(s.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testrail_mapping() {
        assert_eq!(Status::Pass.testrail_id(), 1);
        assert_eq!(Status::Skip.testrail_id(), 4);
        assert_eq!(Status::Fail.testrail_id(), 5);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!("FAIL".parse::<Status>(), Ok(Status::Fail));
        assert_eq!(
            "NOT RUN".parse::<Status>(),
            Err(UnknownStatus("NOT RUN".to_owned()))
        );
        assert!("pass".parse::<Status>().is_err());
    }
}
