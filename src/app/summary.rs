/// A result TestRail refused.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseFailure {
    pub case_id: String,
    pub message: String,
}

/// Outcome of publishing into one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub run_id: u64,
    pub published: usize,
    pub failures: Vec<CaseFailure>,
    pub blocked: usize,
    pub not_in_run: usize,
}

impl RunSummary {
    pub fn new(run_id: u64) -> Self {
        Self {
            run_id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub runs: Vec<RunSummary>,
}

impl Summary {
    pub fn published(&self) -> usize {
        self.runs.iter().map(|run| run.published).sum()
    }

    pub fn failures(&self) -> usize {
        self.runs.iter().map(|run| run.failures.len()).sum()
    }
}

impl From<RunSummary> for Summary {
    fn from(run: RunSummary) -> Self {
        Self { runs: vec![run] }
    }
}
