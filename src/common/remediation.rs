// Remediation outcomes
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Bucket;

/// The result of attempting to reconfigure a single bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemediationOutcome {
    /// Name of the bucket.
    pub name: String,

    /// Region the bucket lives in.
    pub region: String,

    /// Whether the new configuration was applied and verified.
    pub succeeded: bool,
}

impl RemediationOutcome {
    /// Record an outcome for the given `Bucket`.
    pub fn new(bucket: &Bucket, succeeded: bool) -> Self {
        Self {
            name:      bucket.name.clone(),
            region:    bucket.region.clone(),
            succeeded: succeeded,
        }
    }
}

/// Per-bucket outcomes of a remediation run, with aggregate tallies.
#[derive(Debug, Default)]
pub struct RemediationSummary {
    outcomes: Vec<RemediationOutcome>,
}

impl RemediationSummary {
    /// Return a new `RemediationSummary` over the given outcomes.
    pub fn new(outcomes: Vec<RemediationOutcome>) -> Self {
        Self {
            outcomes: outcomes,
        }
    }

    /// The individual per-bucket outcomes, in remediation order.
    pub fn outcomes(&self) -> &[RemediationOutcome] {
        &self.outcomes
    }

    /// Number of buckets a reconfiguration was attempted for.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of buckets that were reconfigured and verified.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.succeeded)
            .count()
    }

    /// Returns `true` if every attempted bucket succeeded.
    ///
    /// An empty run is complete.
    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.attempted()
    }
}
