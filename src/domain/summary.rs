use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoOutcome {
    Committed,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: RepoOutcome) {
        match outcome {
            RepoOutcome::Committed => self.succeeded += 1,
            RepoOutcome::Skipped => self.skipped += 1,
            RepoOutcome::Failed => self.errored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.errored
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Succeeded: {}", self.succeeded)?;
        writeln!(f, "Skipped: {}", self.skipped)?;
        write!(f, "Errors: {}", self.errored)
    }
}
