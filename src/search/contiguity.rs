use std::collections::VecDeque;

use ahash::AHashSet;

use crate::{electorate::Electorate, search::UsedSet};

/// Check whether `group` induces a single connected component of the voter graph.
/// Empty and single-voter groups are trivially connected.
pub fn is_connected(electorate: &impl Electorate, group: &[usize]) -> bool {
    let Some(&start) = group.first() else { return true };
    let members = group.iter().copied().collect::<AHashSet<_>>();

    // BFS from `start`, restricted to edges with both endpoints in `group`.
    let mut visited = AHashSet::with_capacity(members.len());
    visited.insert(start);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for v in electorate.neighbors(u) {
            if members.contains(&v) && visited.insert(v) { queue.push_back(v) }
        }
    }

    visited.len() == members.len()
}

/// Check whether some connected component of unused voters has a size that is
/// not a multiple of `target_size`. Such a component can never be covered.
pub(crate) fn has_stranded_component(electorate: &impl Electorate, used: &UsedSet, target_size: usize) -> bool {
    let num_voters = electorate.number_of_voters();
    let mut visited = used.mask().to_vec();
    let mut queue = VecDeque::new();

    for start in 0..num_voters {
        if visited[start] { continue }

        visited[start] = true;
        queue.push_back(start);
        let mut size = 0;
        while let Some(u) = queue.pop_front() {
            size += 1;
            for v in electorate.neighbors(u) {
                if !visited[v] { visited[v] = true; queue.push_back(v) }
            }
        }

        if size % target_size != 0 { return true }
    }

    false
}
