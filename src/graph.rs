//! A module for working with temporal graphs.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Debug,
    hash::Hash,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    arrival::earliest_arrival_times,
    betweenness::compute_betweenness,
    closeness::compute_closeness,
    config::AnalysisConfig,
    edge::TemporalEdge,
    error::{Error, Result},
    reach::reachable_set,
    reachability::{compute_reachability_latency, compute_reachability_ratio},
    search::StateSearch,
    time::{Arrival, EdgeTime, Time, TimeKind, TimeWindow},
};

/// Whether edges can only be traversed from source to target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Directed,
    Undirected,
}

/// One traversable step out of a node: the index of the node it leads to and the time of the
/// edge taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Hop {
    pub(crate) to: usize,
    pub(crate) time: Time,
}

/// Outgoing hops per node index.
pub(crate) type Adjacency = Vec<Vec<Hop>>;

/// Collects nodes and timestamped edges before validating them into a [`TemporalGraph`].
#[derive(Clone, Debug)]
pub struct GraphBuilder<T> {
    mode: Mode,
    strict: bool,
    nodes: BTreeSet<T>,
    edges: BTreeMap<(T, T, usize), EdgeTime>,
}

impl<T> GraphBuilder<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Creates an empty builder. Edge endpoints are added to the node set implicitly.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            strict: false,
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Creates an empty builder which rejects edges whose endpoints weren't added with
    /// [`add_node`](Self::add_node).
    pub fn strict(mode: Mode) -> Self {
        Self {
            strict: true,
            ..Self::new(mode)
        }
    }

    pub fn add_node(&mut self, node: T) -> &mut Self {
        self.nodes.insert(node);
        self
    }

    /// Adds an edge under the next unused key for its pair of endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::graph::{GraphBuilder, Mode};
    ///
    /// let mut builder = GraphBuilder::new(Mode::Directed);
    /// builder.add_edge("a", "b", 1).add_edge("a", "b", 2);
    ///
    /// let graph = builder.build().unwrap();
    /// let keys: Vec<usize> = graph.edges_between(&"a", &"b").iter().map(|e| e.key()).collect();
    /// assert_eq!(keys, vec![0, 1]);
    /// ```
    pub fn add_edge(&mut self, source: T, target: T, time: impl Into<EdgeTime>) -> &mut Self {
        let (source, target) = self.orient(source, target);
        let key = self
            .edges
            .range((source, target, 0)..=(source, target, usize::MAX))
            .next_back()
            .map_or(0, |((_, _, key), _)| key + 1);

        self.insert(source, target, key, time.into())
    }

    /// Adds an edge under an explicit key, replacing the time of any edge already stored under
    /// the same `(source, target, key)`.
    pub fn add_keyed_edge(
        &mut self,
        source: T,
        target: T,
        key: usize,
        time: impl Into<EdgeTime>,
    ) -> &mut Self {
        let (source, target) = self.orient(source, target);
        self.insert(source, target, key, time.into())
    }

    /// Validates the collected data and builds the graph.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownNode`] if the builder is strict and an edge endpoint wasn't added.
    /// - [`Error::MixedTimeRepresentation`] if ticks and calendar instants were mixed.
    pub fn build(&self) -> Result<TemporalGraph<T>> {
        let mut expected: Option<TimeKind> = None;
        for ((source, target, _), time) in &self.edges {
            if self.strict {
                for node in [source, target] {
                    if !self.nodes.contains(node) {
                        return Err(Error::UnknownNode(format!("{node:?}")));
                    }
                }
            }

            match expected {
                None => expected = Some(time.kind()),
                Some(kind) if kind != time.kind() => {
                    return Err(Error::MixedTimeRepresentation {
                        expected: kind,
                        found: time.kind(),
                    })
                }
                Some(_) => {}
            }
        }

        let mut nodes = self.nodes.clone();
        for (source, target, _) in self.edges.keys() {
            nodes.insert(*source);
            nodes.insert(*target);
        }

        let edges = self
            .edges
            .iter()
            .map(|(&(source, target, key), time)| {
                TemporalEdge::new(source, target, key, time.normalize())
            })
            .collect();

        Ok(TemporalGraph::from_parts(
            self.mode,
            nodes.into_iter().collect(),
            edges,
        ))
    }

    //
    // Private
    //

    /// Undirected edges are stored with their endpoints in ascending order so both orientations
    /// share one key space.
    fn orient(&self, source: T, target: T) -> (T, T) {
        match self.mode {
            Mode::Undirected if target < source => (target, source),
            _ => (source, target),
        }
    }

    fn insert(&mut self, source: T, target: T, key: usize, time: EdgeTime) -> &mut Self {
        if !self.strict {
            self.nodes.insert(source);
            self.nodes.insert(target);
        }
        self.edges.insert((source, target, key), time);
        self
    }
}

/// A multigraph whose edges carry timestamps.
///
/// The graph is immutable once built: every metric is a read-only query, so a graph can be shared
/// between threads freely.
#[derive(Clone, Debug)]
pub struct TemporalGraph<T> {
    mode: Mode,
    /// The nodes, sorted by `T`'s implementation of `Ord`. A node's position is its index.
    nodes: Vec<T>,
    /// A mapping of nodes to their indices.
    index: BTreeMap<T, usize>,
    /// The edges, sorted by `(source, target, key)`.
    edges: Vec<TemporalEdge<T>>,
    /// Outgoing hops for every node index, both orientations for undirected graphs.
    adjacency: Adjacency,
}

impl<T> TemporalGraph<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Builds a graph from `(source, target, time)` triples, each becoming its own edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::graph::{Mode, TemporalGraph};
    ///
    /// let graph = TemporalGraph::from_edges(Mode::Directed, [("a", "b", 1), ("b", "c", 2)]).unwrap();
    ///
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges<I, E>(mode: Mode, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, T, E)>,
        E: Into<EdgeTime>,
    {
        let mut builder = GraphBuilder::new(mode);
        for (source, target, time) in edges {
            builder.add_edge(source, target, time);
        }

        builder.build()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_directed(&self) -> bool {
        self.mode == Mode::Directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the nodes in ascending order.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Returns the edges sorted by `(source, target, key)`.
    pub fn edges(&self) -> &[TemporalEdge<T>] {
        &self.edges
    }

    pub fn contains_node(&self, node: &T) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the nodes one edge away from `node`: successors in a directed graph, every
    /// adjacent node otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::graph::{Mode, TemporalGraph};
    ///
    /// let edges = [("a", "b", 1), ("c", "a", 2)];
    ///
    /// let directed = TemporalGraph::from_edges(Mode::Directed, edges).unwrap();
    /// assert_eq!(directed.neighbors(&"a").unwrap(), vec!["b"]);
    ///
    /// let undirected = TemporalGraph::from_edges(Mode::Undirected, edges).unwrap();
    /// assert_eq!(undirected.neighbors(&"a").unwrap(), vec!["b", "c"]);
    /// ```
    pub fn neighbors(&self, node: &T) -> Result<Vec<T>> {
        let i = self.require(node)?;

        Ok(self.adjacency[i]
            .iter()
            .map(|hop| hop.to)
            .sorted()
            .dedup()
            .map(|j| self.nodes[j])
            .collect())
    }

    /// Returns every parallel edge joining `source` to `target`. In an undirected graph the
    /// orientation of the query doesn't matter.
    pub fn edges_between(&self, source: &T, target: &T) -> Vec<&TemporalEdge<T>> {
        self.edges
            .iter()
            .filter(|edge| match self.mode {
                Mode::Directed => edge.source() == source && edge.target() == target,
                Mode::Undirected => {
                    edge.source() == source && edge.target() == target
                        || edge.source() == target && edge.target() == source
                }
            })
            .collect()
    }

    /// Returns the distinct edge timestamps in ascending order.
    pub fn distinct_times(&self) -> Vec<Time> {
        self.edges
            .iter()
            .map(|edge| edge.time())
            .sorted()
            .dedup()
            .collect()
    }

    /// Returns the earliest and latest edge timestamps, `None` for a graph without edges.
    pub fn time_span(&self) -> Option<(Time, Time)> {
        self.edges
            .iter()
            .map(|edge| edge.time())
            .minmax()
            .into_option()
    }

    /// Returns a graph with the same nodes but only the edges inside `window`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::graph::{Mode, TemporalGraph};
    /// use chronos_graph::time::{Time, TimeWindow};
    ///
    /// let graph = TemporalGraph::from_edges(Mode::Directed, [("a", "b", 1), ("b", "c", 2)]).unwrap();
    /// let slice = graph.slice(TimeWindow::since(Time(2)));
    ///
    /// assert_eq!(slice.node_count(), 3);
    /// assert_eq!(slice.edge_count(), 1);
    /// ```
    pub fn slice(&self, window: TimeWindow) -> Self {
        let edges = self
            .edges
            .iter()
            .filter(|edge| edge.in_window(&window))
            .copied()
            .collect();

        Self::from_parts(self.mode, self.nodes.clone(), edges)
    }

    /// Returns a mapping of nodes to the number of edges they take part in.
    ///
    /// In a directed graph only the source endpoint is counted (out-degree), in an undirected one
    /// both endpoints are. Nodes without edges map to 0.
    pub fn temporal_degree(&self) -> HashMap<T, usize> {
        let mut degrees: HashMap<T, usize> = self.nodes.iter().map(|node| (*node, 0)).collect();

        for edge in &self.edges {
            *degrees.entry(*edge.source()).or_default() += 1;
            if self.mode == Mode::Undirected {
                *degrees.entry(*edge.target()).or_default() += 1;
            }
        }

        degrees
    }

    /// Returns a mapping of nodes to the number of edges arriving at them. In an undirected graph
    /// this is the same as [`temporal_degree`](Self::temporal_degree).
    pub fn temporal_in_degree(&self) -> HashMap<T, usize> {
        if self.mode == Mode::Undirected {
            return self.temporal_degree();
        }

        let mut degrees: HashMap<T, usize> = self.nodes.iter().map(|node| (*node, 0)).collect();
        for edge in &self.edges {
            *degrees.entry(*edge.target()).or_default() += 1;
        }

        degrees
    }

    /// Returns every minimum-hop time-respecting path from `source` to `target`, sorted. The
    /// collection is empty when no such path exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::graph::{Mode, TemporalGraph};
    ///
    /// let graph = TemporalGraph::from_edges(
    ///     Mode::Directed,
    ///     [("a", "b", 1), ("b", "c", 2), ("a", "d", 3), ("d", "c", 1)],
    /// )
    /// .unwrap();
    ///
    /// // a -> d -> c isn't time-respecting: the second edge happens before the first.
    /// assert_eq!(graph.shortest_temporal_paths(&"a", &"c").unwrap(), vec![vec!["a", "b", "c"]]);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn shortest_temporal_paths(&self, source: &T, target: &T) -> Result<Vec<Vec<T>>> {
        let (s, t) = (self.require(source)?, self.require(target)?);

        let search = StateSearch::run(&self.adjacency, s, Some(t), None);

        Ok(search
            .paths_to(t)
            .into_iter()
            .map(|path| self.resolve(&path))
            .collect())
    }

    /// Returns the nodes reachable from `source` by any time-respecting walk, `source` included.
    #[instrument(level = "trace", skip(self))]
    pub fn reachable_set(&self, source: &T) -> Result<BTreeSet<T>> {
        let s = self.require(source)?;

        Ok(reachable_set(&self.adjacency, s)
            .into_iter()
            .map(|i| self.nodes[i])
            .collect())
    }

    /// Returns a mapping of every node to the earliest time it can be reached from `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::graph::{Mode, TemporalGraph};
    /// use chronos_graph::time::{Arrival, Time};
    ///
    /// let graph = TemporalGraph::from_edges(Mode::Directed, [("a", "b", 1), ("b", "c", 2)]).unwrap();
    /// let arrivals = graph.earliest_arrival_times(&"b").unwrap();
    ///
    /// assert_eq!(arrivals[&"b"], Arrival::Origin);
    /// assert_eq!(arrivals[&"c"], Arrival::At(Time(2)));
    /// assert_eq!(arrivals[&"a"], Arrival::Unreachable);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn earliest_arrival_times(&self, source: &T) -> Result<HashMap<T, Arrival>> {
        let s = self.require(source)?;

        Ok(self.label(earliest_arrival_times(&self.adjacency, s)))
    }

    /// Returns a mapping of nodes to their temporal betweenness centrality, computed with the
    /// default [`AnalysisConfig`].
    pub fn temporal_betweenness(&self) -> HashMap<T, f64> {
        self.temporal_betweenness_with(&AnalysisConfig::default())
    }

    /// Returns a mapping of nodes to their temporal betweenness centrality.
    ///
    /// B(v) = sum over ordered pairs (s, t), s != t, of the share of the shortest time-respecting
    /// s-t paths going through v, scaled by 1 / ((N - 1)(N - 2)) if `config.normalize` is set.
    #[instrument(skip(self))]
    pub fn temporal_betweenness_with(&self, config: &AnalysisConfig) -> HashMap<T, f64> {
        self.label(compute_betweenness(&self.adjacency, config))
    }

    /// Returns a mapping of nodes to their temporal closeness centrality, computed with the
    /// default [`AnalysisConfig`].
    pub fn temporal_closeness(&self) -> HashMap<T, f64> {
        self.temporal_closeness_with(&AnalysisConfig::default())
    }

    /// Returns a mapping of nodes to their temporal closeness centrality: the sum of the inverse
    /// earliest arrival times over the reachable nodes, divided by N - 1.
    #[instrument(skip(self))]
    pub fn temporal_closeness_with(&self, config: &AnalysisConfig) -> HashMap<T, f64> {
        self.label(compute_closeness(&self.adjacency, config))
    }

    /// Returns the fraction of ordered node pairs joined by a time-respecting walk, computed with
    /// the default [`AnalysisConfig`].
    pub fn reachability_ratio(&self) -> f64 {
        self.reachability_ratio_with(&AnalysisConfig::default())
    }

    /// Returns the fraction of ordered node pairs joined by a time-respecting walk, in `[0, 1]`.
    #[instrument(skip(self))]
    pub fn reachability_ratio_with(&self, config: &AnalysisConfig) -> f64 {
        compute_reachability_ratio(&self.adjacency, config)
    }

    /// Returns the reachability latency for the fraction `r`, computed with the default
    /// [`AnalysisConfig`].
    pub fn reachability_latency(&self, r: f64) -> Result<f64> {
        self.reachability_latency_with(r, &AnalysisConfig::default())
    }

    /// Returns the number of hops needed, averaged over the observation instants, to reach the
    /// fraction `r` of the network.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFraction`] if `r` isn't in `(0, 1]`.
    #[instrument(skip(self))]
    pub fn reachability_latency_with(&self, r: f64, config: &AnalysisConfig) -> Result<f64> {
        if !(r > 0.0 && r <= 1.0) {
            return Err(Error::InvalidFraction(r));
        }

        Ok(compute_reachability_latency(
            &self.adjacency,
            &self.distinct_times(),
            r,
            config,
        ))
    }

    //
    // Private
    //

    fn from_parts(mode: Mode, nodes: Vec<T>, edges: Vec<TemporalEdge<T>>) -> Self {
        let index: BTreeMap<T, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, &node)| (node, i))
            .collect();

        let mut adjacency: Adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            // The index was generated from a node set containing every endpoint.
            let (i, j) = (index[edge.source()], index[edge.target()]);
            let time = edge.time();

            adjacency[i].push(Hop { to: j, time });
            if mode == Mode::Undirected && i != j {
                adjacency[j].push(Hop { to: i, time });
            }
        }
        for hops in &mut adjacency {
            hops.sort_unstable();
        }

        Self {
            mode,
            nodes,
            index,
            edges,
            adjacency,
        }
    }

    fn require(&self, node: &T) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))
    }

    fn resolve(&self, path: &[usize]) -> Vec<T> {
        path.iter().map(|&i| self.nodes[i]).collect()
    }

    /// Maps index-ordered values back to their nodes.
    fn label<V>(&self, values: Vec<V>) -> HashMap<T, V> {
        self.nodes.iter().copied().zip(values).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    macro_rules! graph {
        ($mode:expr; $(($source:expr, $target:expr, $time:expr)),* $(,)?) => {{
            let mut builder = GraphBuilder::new($mode);
            $(
                builder.add_edge($source, $target, $time as i64);
            )*
            builder.build().unwrap()
        }};
    }

    #[test]
    fn build_assigns_keys_per_pair() {
        let graph = graph!(Mode::Directed; ("a", "b", 1), ("a", "b", 2), ("b", "a", 3));

        let keys: Vec<_> = graph
            .edges()
            .iter()
            .map(|e| (*e.source(), *e.target(), e.key()))
            .collect();
        assert_eq!(keys, vec![("a", "b", 0), ("a", "b", 1), ("b", "a", 0)]);
    }

    #[test]
    fn undirected_pairs_share_keys() {
        let graph = graph!(Mode::Undirected; ("b", "a", 1), ("a", "b", 2));

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_between(&"b", &"a").len(), 2);
        assert_eq!(graph.edges()[1].key(), 1);
    }

    #[test]
    fn keyed_edge_replaces_time() {
        let mut builder = GraphBuilder::new(Mode::Directed);
        builder.add_keyed_edge("a", "b", 4, 1).add_keyed_edge("a", "b", 4, 9);
        let graph = builder.build().unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].time(), Time(9));
        assert_eq!(graph.edges()[0].key(), 4);
    }

    #[test]
    fn strict_builder_rejects_unknown_nodes() {
        let mut builder = GraphBuilder::strict(Mode::Directed);
        builder.add_node("a").add_edge("a", "b", 1);

        assert_eq!(
            builder.build().unwrap_err(),
            Error::UnknownNode("\"b\"".to_string())
        );

        builder.add_node("b");
        assert!(builder.build().is_ok());
    }

    #[test]
    fn mixed_time_representations_fail() {
        let mut builder = GraphBuilder::new(Mode::Directed);
        builder
            .add_edge("a", "b", 1)
            .add_edge("b", "c", Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());

        assert!(matches!(
            builder.build(),
            Err(Error::MixedTimeRepresentation { .. })
        ));
    }

    #[test]
    fn instants_are_normalized_to_seconds() {
        let early = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
        let graph = TemporalGraph::from_edges(Mode::Directed, [("a", "b", early), ("b", "c", late)])
            .unwrap();

        assert_eq!(
            graph.distinct_times(),
            vec![Time(early.timestamp()), Time(late.timestamp())]
        );
        assert_eq!(
            graph.shortest_temporal_paths(&"a", &"c").unwrap(),
            vec![vec!["a", "b", "c"]]
        );
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let mut builder = GraphBuilder::new(Mode::Directed);
        builder.add_node("z").add_edge("a", "b", 1);
        let graph = builder.build().unwrap();

        assert_eq!(graph.nodes(), &["a", "b", "z"]);
        assert!(graph.neighbors(&"z").unwrap().is_empty());
    }

    #[test]
    fn neighbors_of_unknown_node() {
        let graph = graph!(Mode::Directed; ("a", "b", 1));

        assert!(matches!(graph.neighbors(&"x"), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn edges_between_directed() {
        let graph = graph!(Mode::Directed; ("a", "b", 1), ("a", "b", 5), ("b", "a", 3));

        let times: Vec<Time> = graph
            .edges_between(&"a", &"b")
            .iter()
            .map(|e| e.time())
            .collect();
        assert_eq!(times, vec![Time(1), Time(5)]);
        assert_eq!(graph.edges_between(&"b", &"a").len(), 1);
        assert!(graph.edges_between(&"a", &"c").is_empty());
    }

    #[test]
    fn distinct_times_and_span() {
        let graph = graph!(Mode::Directed; ("a", "b", 3), ("b", "c", 1), ("c", "a", 3));

        assert_eq!(graph.distinct_times(), vec![Time(1), Time(3)]);
        assert_eq!(graph.time_span(), Some((Time(1), Time(3))));

        let empty: TemporalGraph<&str> = GraphBuilder::new(Mode::Directed).build().unwrap();
        assert_eq!(empty.time_span(), None);
    }

    #[test]
    fn slice_keeps_nodes() {
        let graph = graph!(Mode::Undirected; ("a", "b", 1), ("b", "c", 2), ("c", "d", 3));

        let slice = graph.slice(TimeWindow::new(Time(2), Time(2)));

        assert_eq!(slice.nodes(), graph.nodes());
        assert_eq!(slice.edge_count(), 1);
        assert_eq!(slice.neighbors(&"b").unwrap(), vec!["c"]);
        assert!(slice.neighbors(&"a").unwrap().is_empty());
    }

    #[test]
    fn degree_directed() {
        let graph = graph!(Mode::Directed; ("a", "b", 1), ("a", "b", 2), ("b", "c", 3));

        let degree = graph.temporal_degree();
        assert_eq!(degree[&"a"], 2);
        assert_eq!(degree[&"b"], 1);
        assert_eq!(degree[&"c"], 0);

        let in_degree = graph.temporal_in_degree();
        assert_eq!(in_degree[&"a"], 0);
        assert_eq!(in_degree[&"b"], 2);
        assert_eq!(in_degree[&"c"], 1);
    }

    #[test]
    fn degree_undirected() {
        let graph = graph!(Mode::Undirected; ("a", "b", 1), ("a", "b", 2), ("b", "c", 3));

        let degree = graph.temporal_degree();
        assert_eq!(degree[&"a"], 2);
        assert_eq!(degree[&"b"], 3);
        assert_eq!(degree[&"c"], 1);
        assert_eq!(degree.values().sum::<usize>(), 2 * graph.edge_count());
    }

    #[test]
    fn undirected_self_loop_counts_twice() {
        let graph = graph!(Mode::Undirected; ("a", "a", 1));

        assert_eq!(graph.temporal_degree()[&"a"], 2);
        assert_eq!(graph.neighbors(&"a").unwrap(), vec!["a"]);
    }

    #[test]
    fn shortest_paths_unknown_node() {
        let graph = graph!(Mode::Directed; ("a", "b", 1));

        assert!(graph.shortest_temporal_paths(&"a", &"x").is_err());
        assert!(graph.reachable_set(&"x").is_err());
        assert!(graph.earliest_arrival_times(&"x").is_err());
    }

    #[test]
    fn latency_rejects_bad_fraction() {
        let graph = graph!(Mode::Directed; ("a", "b", 1));

        for r in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                graph.reachability_latency(r),
                Err(Error::InvalidFraction(_))
            ));
        }
        assert!(graph.reachability_latency(1.0).is_ok());
    }
}
