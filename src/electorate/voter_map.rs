use anyhow::{ensure, Result};
use rand::Rng;

use crate::{electorate::{Electorate, Party}, graph::Graph};

/// An in-memory electorate: a voter adjacency graph plus one vote per voter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoterMap {
    graph: Graph,
    votes: Vec<Party>,
}

impl VoterMap {
    /// Construct an electorate from a graph and one vote per node.
    pub fn new(graph: Graph, votes: Vec<Party>) -> Result<Self> {
        ensure!(
            votes.len() == graph.node_count(),
            "[VoterMap::new] votes.len() ({}) must equal the number of voters ({})",
            votes.len(),
            graph.node_count(),
        );

        Ok(Self { graph, votes })
    }

    /// Construct an electorate from raw adjacency lists.
    pub fn from_adjacency(adjacency: &[Vec<u32>], votes: Vec<Party>) -> Result<Self> {
        let num_voters = adjacency.len();
        for (u, neighbors) in adjacency.iter().enumerate() {
            if let Some(&v) = neighbors.iter().find(|&&v| v as usize >= num_voters) {
                anyhow::bail!("[VoterMap::from_adjacency] voter {u} lists unknown neighbor {v} (only {num_voters} voters)");
            }
        }

        Self::new(Graph::new(num_voters, adjacency), votes)
    }

    /// Construct a `rows` x `cols` lattice electorate; `votes` are given in row-major order.
    pub fn grid(rows: usize, cols: usize, votes: Vec<Party>) -> Result<Self> {
        Self::new(Graph::grid(rows, cols), votes)
    }

    /// Construct a `rows` x `cols` lattice electorate with votes drawn uniformly from `parties`.
    pub fn random_grid(rows: usize, cols: usize, parties: &[Party], rng: &mut impl Rng) -> Result<Self> {
        ensure!(!parties.is_empty(), "[VoterMap::random_grid] at least one party is required");

        let votes = (0..rows * cols)
            .map(|_| parties[rng.random_range(0..parties.len())].clone())
            .collect();

        Self::grid(rows, cols, votes)
    }

    /// Get a reference to the voter graph.
    #[inline] pub fn graph(&self) -> &Graph { &self.graph }

    /// Get the vote of every voter, indexed by voter id.
    #[inline] pub fn votes(&self) -> &[Party] { &self.votes }

    /// Distinct parties appearing in the electorate, sorted by name.
    pub fn parties(&self) -> Vec<Party> {
        let mut parties = self.votes.clone();
        parties.sort_unstable();
        parties.dedup();
        parties
    }
}

impl Electorate for VoterMap {
    #[inline] fn number_of_voters(&self) -> usize { self.graph.node_count() }

    #[inline]
    fn neighbors(&self, voter: usize) -> impl Iterator<Item = usize> + '_ { self.graph.edges(voter) }

    #[inline] fn vote(&self, voter: usize) -> &Party { &self.votes[voter] }
}
