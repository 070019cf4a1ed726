use crate::{electorate::Party, partition::Partition};

/// Read-only view of a voter graph with one party affiliation per voter.
///
/// Voters are identified by `0..number_of_voters()`. Adjacency is expected to be
/// undirected; the search only relies on `neighbors` for reachability and
/// randomizes the order it receives them in.
pub trait Electorate {
    /// Total number of voters.
    fn number_of_voters(&self) -> usize;

    /// Voters adjacent to `voter`.
    fn neighbors(&self, voter: usize) -> impl Iterator<Item = usize> + '_;

    /// The party `voter` supports.
    fn vote(&self, voter: usize) -> &Party;

    /// Number of districts of `target_size` voters each (`voters / target_size`).
    /// Only meaningful when `target_size` divides the voter count.
    fn district_size(&self, target_size: usize) -> usize {
        self.number_of_voters() / target_size
    }

    /// Number of voters in `voters` supporting `party`.
    fn count_votes(&self, voters: &[usize], party: &Party) -> usize {
        voters.iter().filter(|&&v| self.vote(v) == party).count()
    }

    /// Number of districts in which `party` holds a strict majority of voters.
    fn get_wins(&self, partition: &Partition, party: &Party) -> usize {
        partition.iter()
            .filter(|district| 2 * self.count_votes(district.voters(), party) > district.len())
            .count()
    }
}
