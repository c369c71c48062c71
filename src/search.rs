//! Breadth-first search over (node, last-edge-time) states.
//!
//! A node can be worth visiting again later: arriving at a different time makes different edges
//! available. States are therefore identified by the node *and* the time of the edge used to
//! arrive, and it is the state, not the node, that is explored at most once.
//!
//! The search records, for every state, its hop count from the source and every predecessor state
//! that reaches it with one hop less. That predecessor DAG holds all minimum-hop paths, including
//! ties that go through a shared state.

use std::collections::{BTreeSet, HashMap, VecDeque};

use tracing::trace;

use crate::{graph::Adjacency, time::Time};

/// A node index and the time of the edge used to reach it, `None` at the source.
type State = (usize, Option<Time>);

pub(crate) struct StateSearch {
    states: Vec<State>,
    /// Hop count of each state from the source.
    level: Vec<usize>,
    /// Predecessor states one level up, empty for the source state.
    predecessors: Vec<Vec<usize>>,
    /// Minimum hop count of each node, `None` if unreached.
    node_level: Vec<Option<usize>>,
    /// The states at which each node is reached with its minimum hop count.
    arrivals: Vec<Vec<usize>>,
}

impl StateSearch {
    /// Runs the search from `source`.
    ///
    /// With a `target`, the search stops once every state at the target's minimum hop count has
    /// been discovered, and target states aren't expanded. With a `departure`, the first edge
    /// must happen at or after that time.
    pub(crate) fn run(
        adjacency: &Adjacency,
        source: usize,
        target: Option<usize>,
        departure: Option<Time>,
    ) -> Self {
        let num_nodes = adjacency.len();

        let mut search = Self {
            states: vec![(source, None)],
            level: vec![0],
            predecessors: vec![Vec::new()],
            node_level: vec![None; num_nodes],
            arrivals: vec![Vec::new(); num_nodes],
        };
        let mut ids: HashMap<State, usize> = HashMap::new();
        ids.insert((source, None), 0);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);

        // The hop count at which the target was first dequeued.
        let mut stop_level: Option<usize> = None;

        while let Some(id) = queue.pop_front() {
            let (node, last) = search.states[id];
            let level = search.level[id];

            // Ties sit on the same level, the queue only moves on once they are all drained.
            if stop_level.is_some_and(|stop| level > stop) {
                break;
            }

            match search.node_level[node] {
                None => {
                    search.node_level[node] = Some(level);
                    search.arrivals[node].push(id);
                }
                Some(best) if best == level => search.arrivals[node].push(id),
                Some(_) => {}
            }

            if target == Some(node) {
                stop_level.get_or_insert(level);
                continue;
            }

            for hop in &adjacency[node] {
                let usable = match last {
                    Some(last) => hop.time > last,
                    None => departure.map_or(true, |departure| hop.time >= departure),
                };
                if !usable {
                    continue;
                }

                let next: State = (hop.to, Some(hop.time));
                match ids.get(&next) {
                    None => {
                        let next_id = search.states.len();
                        ids.insert(next, next_id);
                        search.states.push(next);
                        search.level.push(level + 1);
                        search.predecessors.push(vec![id]);
                        queue.push_back(next_id);
                    }
                    Some(&next_id) if search.level[next_id] == level + 1 => {
                        // Parallel edges at the same time lead to the same state twice in a row.
                        if search.predecessors[next_id].last() != Some(&id) {
                            search.predecessors[next_id].push(id);
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        trace!(source, states = search.states.len(), "state search done");

        search
    }

    /// Returns the minimum hop count from the source to `node`, if it was reached.
    pub(crate) fn hops_to(&self, node: usize) -> Option<usize> {
        self.node_level[node]
    }

    /// Returns the distinct minimum-hop node sequences from the source to `node`, in ascending
    /// order.
    pub(crate) fn paths_to(&self, node: usize) -> Vec<Vec<usize>> {
        let mut prefixes = vec![None; self.states.len()];
        self.collect_paths(node, &mut prefixes)
    }

    /// Returns [`paths_to`](Self::paths_to) for every node index, sharing the prefixes of states
    /// common to several targets.
    pub(crate) fn all_paths(&self) -> Vec<Vec<Vec<usize>>> {
        let mut prefixes = vec![None; self.states.len()];
        (0..self.arrivals.len())
            .map(|node| self.collect_paths(node, &mut prefixes))
            .collect()
    }

    //
    // Private
    //

    fn collect_paths(
        &self,
        node: usize,
        prefixes: &mut [Option<Vec<Vec<usize>>>],
    ) -> Vec<Vec<usize>> {
        let mut paths = BTreeSet::new();
        for &id in &self.arrivals[node] {
            self.fill_prefixes(id, prefixes);
            paths.extend(prefixes[id].iter().flatten().cloned());
        }

        paths.into_iter().collect()
    }

    /// Memoizes the distinct node sequences leading from the source to state `id`.
    ///
    /// Parallel edges at different times put the same node in many states, the sequences are
    /// deduplicated at every state so their number never exceeds the distinct node sequences.
    fn fill_prefixes(&self, id: usize, prefixes: &mut [Option<Vec<Vec<usize>>>]) {
        if prefixes[id].is_some() {
            return;
        }

        let node = self.states[id].0;
        if self.predecessors[id].is_empty() {
            prefixes[id] = Some(vec![vec![node]]);
            return;
        }

        let mut extended = BTreeSet::new();
        for &predecessor in &self.predecessors[id] {
            self.fill_prefixes(predecessor, prefixes);
            for prefix in prefixes[predecessor].iter().flatten() {
                let mut path = Vec::with_capacity(prefix.len() + 1);
                path.extend_from_slice(prefix);
                path.push(node);
                extended.insert(path);
            }
        }

        prefixes[id] = Some(extended.into_iter().collect());
    }
}
