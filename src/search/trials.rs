use rand::Rng;
use tracing::{debug, info};

use crate::{
    electorate::{Electorate, Party},
    partition::Partition,
    search::{build_partition, search::district_count, SearchConfig, SearchError},
};

/// The best partition found across several builder runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialsOutcome {
    /// The partition with the most wins (earliest on ties).
    pub partition: Partition,
    /// Districts won by the party in `partition`.
    pub wins: usize,
    /// Wins of each trial that ran, `None` where the trial found no partition.
    pub trial_wins: Vec<Option<usize>>,
}

impl TrialsOutcome {
    /// Number of trials executed before stopping.
    #[inline] pub fn trials_run(&self) -> usize { self.trial_wins.len() }
}

/// Run up to `config.trials` independent builder runs and keep the partition in
/// which `party` wins the most districts.
///
/// All trials draw from `rng`, so a seeded source reproduces the whole run.
/// Stops early once a partition's wins exceed the `config.early_exit` threshold.
pub fn best_of_trials<E: Electorate, R: Rng + ?Sized>(
    electorate: &E,
    party: &Party,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<TrialsOutcome, SearchError> {
    if config.trials == 0 { return Err(SearchError::NoTrials) }
    let num_districts = district_count(electorate, config.target_size)?;
    let threshold = config.early_exit.threshold(num_districts, config.target_size);

    let mut best: Option<(Partition, usize)> = None;
    let mut trial_wins = Vec::with_capacity(config.trials);
    let mut exhausted = None;

    for trial in 0..config.trials {
        let partition = match build_partition(electorate, config, rng) {
            Ok(partition) => partition,
            Err(err) => {
                debug!(trial, %err, "trial found no partition");
                if matches!(err, SearchError::SearchExhausted { .. }) { exhausted = Some(err) }
                trial_wins.push(None);
                continue
            }
        };

        let wins = electorate.get_wins(&partition, party);
        debug!(trial, wins, "trial found a partition");
        trial_wins.push(Some(wins));

        if best.as_ref().is_none_or(|&(_, best_wins)| wins > best_wins) {
            best = Some((partition, wins));

            if let Some(threshold) = threshold.filter(|&threshold| wins > threshold) {
                debug!(trial, wins, threshold, "stopping early");
                break
            }
        }
    }

    match best {
        Some((partition, wins)) => {
            info!(%party, wins, districts = num_districts, trials = trial_wins.len(), "selected best partition");
            Ok(TrialsOutcome { partition, wins, trial_wins })
        }
        None => Err(exhausted.unwrap_or(SearchError::NoFeasiblePartition)),
    }
}
