#![doc = "OpenMander backtracking districting search"]
mod common;
mod electorate;
mod graph;
mod partition;
mod search;

#[doc(inline)]
pub use electorate::{Electorate, Party, VoterMap};

#[doc(inline)]
pub use graph::Graph;

#[doc(inline)]
pub use partition::{District, DistrictClass, Partition};

#[doc(inline)]
pub use search::{
    best_of_trials, build_partition, is_connected,
    DistrictReport, EarlyExit, PlanReport, SearchConfig, SearchError, TrialsOutcome,
};
