use thiserror::Error;

/// Reasons a search can end without a complete partition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The electorate has no voters to partition.
    #[error("electorate has no voters")]
    EmptyElectorate,

    /// Districts must hold at least one voter.
    #[error("target district size must be at least 1")]
    InvalidTargetSize,

    /// The district size does not divide the voter count.
    #[error("{voters} voters cannot be split into districts of {target_size}")]
    IndivisibleElectorate { voters: usize, target_size: usize },

    /// The trial runner was given no trials to run.
    #[error("trial budget must be at least 1")]
    NoTrials,

    /// Every seed choice was tried without completing a partition.
    #[error("no feasible partition exists from any seed choice")]
    NoFeasiblePartition,

    /// The step budget ran out before the search finished.
    #[error("search exhausted its budget after {steps} growth steps")]
    SearchExhausted { steps: u64 },
}
