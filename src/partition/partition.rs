use std::collections::VecDeque;

use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};

use crate::{electorate::Electorate, partition::District};

/// An ordered list of districts covering an electorate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    districts: Vec<District>,
}

impl Partition {
    pub fn new(districts: Vec<District>) -> Self { Self { districts } }

    /// Get the districts in the order they were accepted.
    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    /// Get the number of districts.
    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, District> { self.districts.iter() }

    #[inline] pub fn into_districts(self) -> Vec<District> { self.districts }

    /// Get the district index of every voter, `None` for voters in no district.
    pub fn assignments(&self, num_voters: usize) -> Vec<Option<u32>> {
        let mut assignments = vec![None; num_voters];
        for (part, district) in self.districts.iter().enumerate() {
            for voter in district.iter().filter(|&v| v < num_voters) {
                assignments[voter] = Some(part as u32);
            }
        }
        assignments
    }

    /// Check that this is a complete partition of `electorate` into connected
    /// districts of exactly `target_size` voters.
    pub fn validate(&self, electorate: &impl Electorate, target_size: usize) -> Result<()> {
        let num_voters = electorate.number_of_voters();
        ensure!(target_size > 0, "[Partition::validate] target_size must be positive");
        ensure!(
            self.len() * target_size == num_voters,
            "[Partition::validate] {} districts of {target_size} voters cannot cover {num_voters} voters",
            self.len(),
        );

        let mut owner = vec![None; num_voters];
        for (part, district) in self.districts.iter().enumerate() {
            ensure!(
                district.len() == target_size,
                "[Partition::validate] district {part} has {} voters, expected {target_size}",
                district.len(),
            );

            for voter in district.iter() {
                ensure!(voter < num_voters, "[Partition::validate] district {part} contains unknown voter {voter}");
                if let Some(other) = owner[voter].replace(part) {
                    bail!("[Partition::validate] voter {voter} is in districts {other} and {part}");
                }
            }

            ensure!(
                spans_district(electorate, district),
                "[Partition::validate] district {part} is not contiguous",
            );
        }

        if let Some(voter) = owner.iter().position(Option::is_none) {
            bail!("[Partition::validate] voter {voter} is not assigned to any district");
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter { self.districts.iter() }
}

/// BFS over the district's induced subgraph, starting from its lowest voter.
fn spans_district(electorate: &impl Electorate, district: &District) -> bool {
    let Some(start) = district.iter().next() else { return true };

    let mut visited = vec![false; district.len()];
    visited[0] = true;
    let mut seen = 1;
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for v in electorate.neighbors(u) {
            if let Ok(i) = district.voters().binary_search(&v) {
                if !visited[i] { visited[i] = true; seen += 1; queue.push_back(v) }
            }
        }
    }

    seen == district.len()
}
