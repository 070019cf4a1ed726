use rand::Rng;
use tracing::trace;

use crate::{
    electorate::Electorate,
    partition::{District, Partition},
    search::{contiguity::has_stranded_component, Group, Search, SearchConfig, SearchError, UsedSet},
};

impl<E: Electorate, R: Rng + ?Sized> Search<'_, E, R> {
    /// Run the backtracking builder from an empty plan.
    pub(super) fn run(&mut self) -> Result<Partition, SearchError> {
        let num_voters = self.electorate.number_of_voters();
        let mut used = UsedSet::new(num_voters);
        let mut districts = Vec::with_capacity(self.district_count);

        if self.build(&mut used, &mut districts) {
            debug_assert_eq!(used.len(), num_voters, "complete partition must cover every voter");
            return Ok(Partition::new(districts))
        }

        debug_assert!(districts.is_empty() && used.len() == 0, "failed search must undo every commit");
        if self.exhausted() {
            Err(SearchError::SearchExhausted { steps: self.steps() })
        } else {
            Err(SearchError::NoFeasiblePartition)
        }
    }

    /// Extend `districts` to a complete partition, seeding each new district from
    /// the lowest unused voter that can grow one.
    ///
    /// Every commit is undone before trying the next seed, so on failure `used`
    /// and `districts` are exactly as they were passed in.
    fn build(&mut self, used: &mut UsedSet, districts: &mut Vec<District>) -> bool {
        if districts.len() == self.district_count { return true }

        let num_voters = self.electorate.number_of_voters();
        let mut group = Group::new(num_voters);
        for seed in 0..num_voters {
            if used.contains(seed) { continue }

            group.reset(seed);
            let Some(district) = self.grow(&mut group, used) else {
                if self.exhausted() { return false }
                continue
            };

            used.commit(&district);
            if self.prune_stranded && has_stranded_component(self.electorate, used, self.target_size) {
                trace!(seed, depth = districts.len(), "district strands unused voters, undoing");
                used.release(&district);
                continue
            }

            trace!(seed, depth = districts.len(), "committed district");
            districts.push(district);

            if self.build(used, districts) { return true }

            if let Some(district) = districts.pop() { used.release(&district) }
            trace!(seed, depth = districts.len(), "backtracking");

            if self.exhausted() { return false }
        }

        false
    }
}

/// Partition `electorate` into connected districts of `config.target_size` voters
/// with one run of the randomized backtracking builder.
pub fn build_partition<E: Electorate, R: Rng + ?Sized>(
    electorate: &E,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Partition, SearchError> {
    Search::new(electorate, config, rng)?.run()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{electorate::{Party, VoterMap}, graph::Graph};

    fn uniform(graph: Graph) -> VoterMap {
        let n = graph.node_count();
        VoterMap::new(graph, vec![Party::from("A"); n]).unwrap()
    }

    fn path(n: usize) -> VoterMap {
        uniform(Graph::new(n, &(0..n).map(|u| if u + 1 < n { vec![u as u32 + 1] } else { vec![] }).collect::<Vec<_>>()))
    }

    #[test]
    fn path_splits_into_consecutive_runs() {
        let map = path(9);
        let config = SearchConfig::default().with_target_size(3);
        let partition = build_partition(&map, &config, &mut StdRng::seed_from_u64(0)).unwrap();

        let districts = partition.iter().map(|d| d.voters().to_vec()).collect::<Vec<_>>();
        assert_eq!(districts, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
    }

    #[test]
    fn path_without_pruning_backtracks_to_the_same_answer() {
        let map = path(9);
        let config = SearchConfig::default().with_target_size(3).with_prune_stranded(false);
        for seed in 0..10 {
            let partition = build_partition(&map, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
            partition.validate(&map, 3).unwrap();
        }
    }

    #[test]
    fn grid_partition_is_valid() {
        let map = uniform(Graph::grid(4, 4));
        let config = SearchConfig::default().with_target_size(4);
        for seed in 0..10 {
            let partition = build_partition(&map, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(partition.len(), 4);
            partition.validate(&map, 4).unwrap();
        }
    }

    #[test]
    fn fragmented_graph_has_no_partition() {
        // Three isolated pairs cannot host districts of three.
        let map = uniform(Graph::new(6, &[vec![1], vec![], vec![3], vec![], vec![5], vec![]]));
        for prune in [true, false] {
            let config = SearchConfig::default().with_target_size(3).with_prune_stranded(prune);
            assert_eq!(
                build_partition(&map, &config, &mut StdRng::seed_from_u64(0)),
                Err(SearchError::NoFeasiblePartition),
            );
        }
    }

    #[test]
    fn budget_reports_exhaustion() {
        let map = uniform(Graph::grid(3, 3));
        let config = SearchConfig::default().with_target_size(3).with_max_steps(Some(2));
        assert_eq!(
            build_partition(&map, &config, &mut StdRng::seed_from_u64(0)),
            Err(SearchError::SearchExhausted { steps: 2 }),
        );
    }

    #[test]
    fn indivisible_electorate_is_rejected_up_front() {
        let map = path(10);
        let config = SearchConfig::default().with_target_size(3);
        assert_eq!(
            build_partition(&map, &config, &mut StdRng::seed_from_u64(0)),
            Err(SearchError::IndivisibleElectorate { voters: 10, target_size: 3 }),
        );
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let map = uniform(Graph::grid(6, 6));
        let config = SearchConfig::default().with_target_size(6);
        let a = build_partition(&map, &config, &mut StdRng::seed_from_u64(21)).unwrap();
        let b = build_partition(&map, &config, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(a, b);
    }
}
