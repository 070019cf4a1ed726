use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    common::write_to_json_file,
    electorate::{Electorate, Party},
    partition::{District, DistrictClass},
    search::{SearchConfig, TrialsOutcome},
};

/// Per-district summary of a chosen plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictReport {
    pub voters: District,
    pub votes: usize,
    pub opposition: usize,
    pub class: DistrictClass,
}

/// Serializable summary of a trial run: the chosen partition plus its scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub party: Party,
    pub target_size: usize,
    pub wins: usize,
    pub trial_wins: Vec<Option<usize>>,
    pub districts: Vec<DistrictReport>,
}

impl PlanReport {
    pub fn new(electorate: &impl Electorate, party: &Party, config: &SearchConfig, outcome: &TrialsOutcome) -> Self {
        let districts = outcome.partition.iter().map(|district| {
            let (votes, opposition) = district.score(electorate, party);
            DistrictReport {
                voters: district.clone(),
                votes,
                opposition,
                class: district.classify(electorate, party),
            }
        }).collect();

        Self {
            party: party.clone(),
            target_size: config.target_size,
            wins: outcome.wins,
            trial_wins: outcome.trial_wins.clone(),
            districts,
        }
    }

    /// Write the report as JSON.
    pub fn write_to_json_file(&self, path: &Path) -> Result<()> {
        write_to_json_file(path, self)
    }
}
