//! A module for performing the multi-threaded computation of temporal betweenness.

use std::collections::BTreeMap;

use crate::{compute::fan_out, config::AnalysisConfig, graph::Adjacency, search::StateSearch};

/// The contribution of one source to the betweenness of the nodes lying on its shortest paths,
/// sorted by node index.
fn betweenness_for_source(adjacency: &Adjacency, source: usize) -> Vec<(usize, f64)> {
    // A single search from the source holds the shortest paths to every target.
    let search = StateSearch::run(adjacency, source, None, None);
    let mut contribution: BTreeMap<usize, f64> = BTreeMap::new();

    for (target, paths) in search.all_paths().into_iter().enumerate() {
        if target == source || paths.is_empty() {
            continue;
        }

        let sigma = paths.len() as f64;

        // Occurrences of each node strictly inside the s-t paths.
        let mut through: BTreeMap<usize, usize> = BTreeMap::new();
        for path in &paths {
            for &node in &path[1..path.len() - 1] {
                *through.entry(node).or_default() += 1;
            }
        }

        for (node, count) in through {
            *contribution.entry(node).or_default() += count as f64 / sigma;
        }
    }

    contribution.into_iter().collect()
}

/// Computes temporal betweenness for every node index over ordered pairs `(s, t)`, `s != t`.
///
/// Each source is an independent task. Per-source contributions are folded in source order once
/// all workers are done, which keeps the floating point sums identical from run to run.
pub(crate) fn compute_betweenness(adjacency: &Adjacency, config: &AnalysisConfig) -> Vec<f64> {
    let num_nodes = adjacency.len();

    // The scale term divides by zero below three nodes, and no node can lie strictly between two
    // others anyway.
    if num_nodes <= 2 {
        return vec![0.0; num_nodes];
    }

    let contributions = fan_out(num_nodes, config.workers(), |source| {
        betweenness_for_source(adjacency, source)
    });

    let mut betweenness = vec![0.0; num_nodes];
    for contribution in contributions {
        for (node, value) in contribution {
            betweenness[node] += value;
        }
    }

    if config.normalize {
        let scale = 1.0 / ((num_nodes - 1) * (num_nodes - 2)) as f64;
        for value in &mut betweenness {
            *value *= scale;
        }
    }

    betweenness
}
