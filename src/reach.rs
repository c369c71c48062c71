//! Reachability by time-respecting walks.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::{graph::Adjacency, time::Time};

/// Returns the indices of the nodes reachable from `source` by a walk whose edge times strictly
/// increase. The source itself is always included.
///
/// Walks don't have to be shortest, so the search never stops early; it explores every
/// (node, last-edge-time) state once.
pub(crate) fn reachable_set(adjacency: &Adjacency, source: usize) -> BTreeSet<usize> {
    let mut reachable = BTreeSet::new();
    let mut visited: HashSet<(usize, Option<Time>)> = HashSet::new();
    let mut queue: VecDeque<(usize, Option<Time>)> = VecDeque::new();

    visited.insert((source, None));
    queue.push_back((source, None));

    while let Some((node, last)) = queue.pop_front() {
        reachable.insert(node);

        for hop in &adjacency[node] {
            if last.is_some_and(|last| hop.time <= last) {
                continue;
            }

            let next = (hop.to, Some(hop.time));
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    reachable
}
