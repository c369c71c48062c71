//! Earliest arrival times from a single source.

use std::collections::VecDeque;

use crate::{graph::Adjacency, time::Arrival};

/// Returns, for every node index, the earliest time it can be reached from `source`.
///
/// Unlike the shortest-path search this minimizes arrival *time*, not hop count: a node is
/// expanded again whenever a strictly earlier arrival is found for it. An edge at time `t` can be
/// taken after arriving at `a` if `a <= t`, so edges sharing a timestamp chain. The source may
/// leave on any edge.
pub(crate) fn earliest_arrival_times(adjacency: &Adjacency, source: usize) -> Vec<Arrival> {
    let mut best = vec![Arrival::Unreachable; adjacency.len()];
    let mut queue: VecDeque<(usize, Arrival)> = VecDeque::new();

    best[source] = Arrival::Origin;
    queue.push_back((source, Arrival::Origin));

    while let Some((node, arrival)) = queue.pop_front() {
        // Superseded by an earlier arrival queued since.
        if arrival > best[node] {
            continue;
        }

        for hop in &adjacency[node] {
            let candidate = Arrival::At(hop.time);
            if arrival <= candidate && candidate < best[hop.to] {
                best[hop.to] = candidate;
                queue.push_back((hop.to, candidate));
            }
        }
    }

    best
}
