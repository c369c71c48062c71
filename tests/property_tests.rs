use std::collections::BTreeSet;

use chronos_graph::{
    graph::{Mode, TemporalGraph},
    time::Time,
    AnalysisConfig,
};
use proptest::prelude::*;

fn arb_graph() -> impl Strategy<Value = TemporalGraph<u8>> {
    (
        any::<bool>(),
        prop::collection::vec((0u8..5, 0u8..5, 0i64..6), 0..12),
    )
        .prop_map(|(directed, edges)| {
            let mode = if directed {
                Mode::Directed
            } else {
                Mode::Undirected
            };
            TemporalGraph::from_edges(mode, edges).unwrap()
        })
}

/// Few nodes, each chosen pair in contact many times over a wide range of times.
fn arb_repeated_contacts() -> impl Strategy<Value = TemporalGraph<u8>> {
    (
        any::<bool>(),
        prop::collection::vec(
            (0u8..4, 0u8..4, prop::collection::vec(0i64..30, 1..10)),
            1..7,
        ),
    )
        .prop_map(|(directed, pairs)| {
            let mode = if directed {
                Mode::Directed
            } else {
                Mode::Undirected
            };
            let edges = pairs.into_iter().flat_map(|(source, target, times)| {
                times.into_iter().map(move |time| (source, target, time))
            });
            TemporalGraph::from_edges(mode, edges).unwrap()
        })
}

/// Whether the node sequence can be walked with strictly increasing edge times. Taking the
/// earliest usable edge at every step is enough to decide.
fn is_time_respecting(graph: &TemporalGraph<u8>, path: &[u8]) -> bool {
    let mut last: Option<Time> = None;

    for pair in path.windows(2) {
        let next = graph
            .edges_between(&pair[0], &pair[1])
            .iter()
            .map(|edge| edge.time())
            .filter(|time| last.map_or(true, |last| *time > last))
            .min();

        match next {
            Some(time) => last = Some(time),
            None => return false,
        }
    }

    true
}

/// Exhaustively enumerates the time-respecting simple paths and keeps the shortest ones. A
/// minimum-hop path never visits a node twice: the walk could skip the loop.
fn brute_force_shortest(graph: &TemporalGraph<u8>, source: u8, target: u8) -> Vec<Vec<u8>> {
    fn explore(
        graph: &TemporalGraph<u8>,
        target: u8,
        path: &mut Vec<u8>,
        found: &mut BTreeSet<Vec<u8>>,
    ) {
        let last = path[path.len() - 1];
        if last == target {
            found.insert(path.clone());
            return;
        }

        for next in graph.neighbors(&last).unwrap() {
            if path.contains(&next) {
                continue;
            }
            path.push(next);
            if is_time_respecting(graph, path) {
                explore(graph, target, path, found);
            }
            path.pop();
        }
    }

    let mut found = BTreeSet::new();
    explore(graph, target, &mut vec![source], &mut found);

    let Some(min) = found.iter().map(Vec::len).min() else {
        return Vec::new();
    };
    found.into_iter().filter(|path| path.len() == min).collect()
}

proptest! {
    #[test]
    fn degree_sums_to_edge_endpoints(graph in arb_graph()) {
        let total: usize = graph.temporal_degree().values().sum();

        match graph.mode() {
            Mode::Directed => prop_assert_eq!(total, graph.edge_count()),
            Mode::Undirected => prop_assert_eq!(total, 2 * graph.edge_count()),
        }
    }

    #[test]
    fn shortest_paths_match_exhaustive_search(graph in arb_graph()) {
        for &source in graph.nodes() {
            for &target in graph.nodes() {
                let paths = graph.shortest_temporal_paths(&source, &target).unwrap();

                for path in &paths {
                    prop_assert!(is_time_respecting(&graph, path));
                    prop_assert_eq!(path.len(), paths[0].len());
                }
                prop_assert_eq!(paths, brute_force_shortest(&graph, source, target));
            }
        }
    }

    #[test]
    fn shortest_paths_with_repeated_contacts(graph in arb_repeated_contacts()) {
        for &source in graph.nodes() {
            for &target in graph.nodes() {
                prop_assert_eq!(
                    graph.shortest_temporal_paths(&source, &target).unwrap(),
                    brute_force_shortest(&graph, source, target)
                );
            }
        }

        let single = graph.temporal_betweenness_with(&AnalysisConfig::default().with_num_threads(1));
        let many = graph.temporal_betweenness_with(&AnalysisConfig::default().with_num_threads(4));
        prop_assert_eq!(single, many);
    }

    #[test]
    fn reachable_set_covers_shortest_paths(graph in arb_graph()) {
        for &source in graph.nodes() {
            let reachable = graph.reachable_set(&source).unwrap();

            for &target in graph.nodes() {
                for path in graph.shortest_temporal_paths(&source, &target).unwrap() {
                    prop_assert!(path.iter().all(|node| reachable.contains(node)));
                }
            }
        }
    }

    #[test]
    fn reachable_nodes_have_an_arrival_time(graph in arb_graph()) {
        for &source in graph.nodes() {
            let reachable = graph.reachable_set(&source).unwrap();
            let arrivals = graph.earliest_arrival_times(&source).unwrap();

            // Strict reachability implies non-strict reachability.
            for node in &reachable {
                prop_assert!(arrivals[node].is_reachable());
            }
        }
    }

    #[test]
    fn ratio_is_a_fraction(graph in arb_graph()) {
        let ratio = graph.reachability_ratio();

        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn betweenness_is_deterministic(graph in arb_graph()) {
        let single = graph.temporal_betweenness_with(&AnalysisConfig::default().with_num_threads(1));
        let many = graph.temporal_betweenness_with(&AnalysisConfig::default().with_num_threads(4));

        prop_assert_eq!(&single, &many);
        prop_assert_eq!(single, graph.temporal_betweenness_with(&AnalysisConfig::default().with_num_threads(1)));
    }

    #[test]
    fn latency_is_bounded_by_node_count(graph in arb_graph(), r in 0.01f64..=1.0) {
        let latency = graph.reachability_latency(r).unwrap();

        prop_assert!(latency >= 0.0);
        prop_assert!(latency <= graph.node_count() as f64);
    }
}
