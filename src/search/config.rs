use std::path::Path;

use anyhow::{ensure, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::common::read_from_json_file;

/// Default number of voters per district.
pub const DEFAULT_TARGET_SIZE: usize = 9;

/// Default number of independent builder runs.
pub const DEFAULT_TRIALS: usize = 2;

/// When the trial runner may stop before using its whole trial budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyExit {
    /// Stop once the party wins a strict majority of districts (`wins > d / 2`).
    #[default]
    DistrictMajority,
    /// Stop once `wins > target_size / 2`, comparing a district count with a voter count.
    TargetSizeHalf,
    /// Stop once `wins` exceeds the given count.
    Wins(usize),
    /// Always run every trial.
    Never,
}

impl EarlyExit {
    /// The win count that must be strictly exceeded to stop, if any.
    pub fn threshold(&self, district_count: usize, target_size: usize) -> Option<usize> {
        match *self {
            EarlyExit::DistrictMajority => Some(district_count / 2),
            EarlyExit::TargetSizeHalf => Some(target_size / 2),
            EarlyExit::Wins(wins) => Some(wins),
            EarlyExit::Never => None,
        }
    }
}

/// Parameters of a districting search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Voters per district.
    pub target_size: usize,
    /// Number of independent builder runs.
    pub trials: usize,
    /// Early stopping rule for the trial runner.
    pub early_exit: EarlyExit,
    /// Cap on growth steps per builder run; `None` searches without limit.
    pub max_steps: Option<u64>,
    /// Undo a district at once if it strands unused voters in a component
    /// whose size is not a multiple of `target_size`.
    pub prune_stranded: bool,
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            trials: DEFAULT_TRIALS,
            early_exit: EarlyExit::default(),
            max_steps: None,
            prune_stranded: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Read a configuration from a JSON file; missing fields take their defaults.
    pub fn read_from_json_file(path: &Path) -> Result<Self> {
        let config: Self = read_from_json_file(path)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations that cannot run.
    pub fn check(&self) -> Result<()> {
        ensure!(self.target_size > 0, "[SearchConfig] target_size must be at least 1");
        ensure!(self.trials > 0, "[SearchConfig] trials must be at least 1");
        Ok(())
    }

    pub fn with_target_size(mut self, target_size: usize) -> Self { self.target_size = target_size; self }

    pub fn with_trials(mut self, trials: usize) -> Self { self.trials = trials; self }

    pub fn with_early_exit(mut self, early_exit: EarlyExit) -> Self { self.early_exit = early_exit; self }

    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self { self.max_steps = max_steps; self }

    pub fn with_prune_stranded(mut self, prune_stranded: bool) -> Self { self.prune_stranded = prune_stranded; self }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self { self.seed = seed; self }

    /// Build the random source for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
