use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

use crate::{
    electorate::Electorate,
    partition::District,
    search::{is_connected, Group, Search, UsedSet},
};

impl<E: Electorate, R: Rng + ?Sized> Search<'_, E, R> {
    /// Grow `group` into a connected district of `target_size` voters, avoiding `used`.
    ///
    /// Neighbors are tried in a freshly shuffled order on every call, so repeated
    /// runs explore different districts. On failure `group` is left exactly as it
    /// was passed in; on success it holds the returned district.
    pub(super) fn grow(&mut self, group: &mut Group, used: &UsedSet) -> Option<District> {
        if !self.tick() { return None }

        if group.len() == self.target_size {
            return is_connected(self.electorate, group.members()).then(|| group.to_district())
        }

        // Snapshot the members, since the group changes while we expand it.
        let members = group.members().iter().copied().collect::<SmallVec<[usize; 16]>>();
        for node in members {
            let mut neighbors = self.electorate.neighbors(node).collect::<SmallVec<[usize; 8]>>();
            neighbors.shuffle(&mut *self.rng);

            for neighbor in neighbors {
                if group.contains(neighbor) || used.contains(neighbor) { continue }

                group.push(neighbor);
                if let Some(district) = self.grow(group, used) { return Some(district) }
                group.pop(neighbor);

                if self.exhausted() { return None }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{electorate::{Party, VoterMap}, graph::Graph, search::SearchConfig};

    fn uniform(graph: Graph) -> VoterMap {
        let n = graph.node_count();
        VoterMap::new(graph, vec![Party::from("A"); n]).unwrap()
    }

    fn config(target_size: usize) -> SearchConfig {
        SearchConfig::default().with_target_size(target_size)
    }

    #[test]
    fn grows_connected_district_of_target_size() {
        let map = uniform(Graph::grid(3, 3));
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut search = Search::new(&map, &config(3), &mut rng).unwrap();
            let mut group = Group::seeded(4, 9);

            let district = search.grow(&mut group, &UsedSet::new(9)).unwrap();
            assert_eq!(district.len(), 3);
            assert!(district.contains(4));
            assert!(is_connected(&map, district.voters()));
            assert_eq!(group.to_district(), district);
        }
    }

    #[test]
    fn avoids_used_voters() {
        let map = uniform(Graph::grid(3, 3));
        let mut used = UsedSet::new(9);
        used.commit(&District::new(vec![1, 3, 5, 7]));

        // Voter 0 is walled in by used voters.
        let mut rng = StdRng::seed_from_u64(1);
        let mut search = Search::new(&map, &config(3), &mut rng).unwrap();
        let mut group = Group::seeded(0, 9);
        assert_eq!(search.grow(&mut group, &used), None);
        assert_eq!(group.members(), &[0]);
    }

    #[test]
    fn fails_in_small_component_and_restores_group() {
        // Two triangles: no connected set of four exists.
        let map = uniform(Graph::new(6, &[vec![1, 2], vec![2], vec![], vec![4, 5], vec![5], vec![]]));
        let mut rng = StdRng::seed_from_u64(3);
        let mut search = Search::new(&map, &SearchConfig::default().with_target_size(3), &mut rng).unwrap();
        search.target_size = 4;

        let mut group = Group::seeded(0, 6);
        assert_eq!(search.grow(&mut group, &UsedSet::new(6)), None);
        assert_eq!(group.members(), &[0]);
        assert!(!search.exhausted());
    }

    #[test]
    fn seed_alone_is_a_district_of_one() {
        let map = uniform(Graph::grid(2, 2));
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = Search::new(&map, &config(1), &mut rng).unwrap();
        let district = search.grow(&mut Group::seeded(2, 4), &UsedSet::new(4)).unwrap();
        assert_eq!(district.voters(), &[2]);
    }

    #[test]
    fn same_seed_grows_same_district() {
        let map = uniform(Graph::grid(5, 5));
        let grow_with = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut search = Search::new(&map, &config(5), &mut rng).unwrap();
            search.grow(&mut Group::seeded(12, 25), &UsedSet::new(25)).unwrap()
        };

        assert_eq!(grow_with(9), grow_with(9));
    }

    #[test]
    fn stops_when_budget_is_spent() {
        let map = uniform(Graph::new(6, &[vec![1, 2], vec![2], vec![], vec![4, 5], vec![5], vec![]]));
        let mut rng = StdRng::seed_from_u64(3);
        let config = SearchConfig::default().with_target_size(3).with_max_steps(Some(2));
        let mut search = Search::new(&map, &config, &mut rng).unwrap();
        search.target_size = 6;

        let mut group = Group::seeded(0, 6);
        assert_eq!(search.grow(&mut group, &UsedSet::new(6)), None);
        assert!(search.exhausted());
        assert_eq!(group.members(), &[0]);
    }
}
