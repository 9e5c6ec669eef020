use super::error::PublishError;
use std::fmt;

/// Where results are published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Run(u64),
    Plan(u64),
}

impl Target {
    /// Picks the target from optional command line ids. Exactly one of them
    /// must be given; an id of 0 counts as absent.
    pub fn from_ids(run_id: Option<u64>, plan_id: Option<u64>) -> Result<Self, PublishError> {
        match (run_id.filter(|id| *id > 0), plan_id.filter(|id| *id > 0)) {
            (Some(run_id), None) => Ok(Target::Run(run_id)),
            (None, Some(plan_id)) => Ok(Target::Plan(plan_id)),
            (Some(run_id), Some(plan_id)) => {
                Err(PublishError::ConflictingTargets { run_id, plan_id })
            }
            (None, None) => Err(PublishError::MissingTarget),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::Run(id) => write!(f, "Test Run #{}", id),
            Target::Plan(id) => write!(f, "Test Plan #{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids() {
        assert_eq!(Target::from_ids(Some(12), None).unwrap(), Target::Run(12));
        assert_eq!(Target::from_ids(None, Some(3)).unwrap(), Target::Plan(3));
        assert_eq!(Target::from_ids(Some(0), Some(3)).unwrap(), Target::Plan(3));
    }

    #[test]
    fn test_from_ids_requires_exactly_one_target() {
        assert!(matches!(
            Target::from_ids(None, None),
            Err(PublishError::MissingTarget)
        ));
        assert!(matches!(
            Target::from_ids(Some(1), Some(2)),
            Err(PublishError::ConflictingTargets { run_id: 1, plan_id: 2 })
        ));
    }
}
