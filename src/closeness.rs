//! A module for performing the multi-threaded computation of temporal closeness.

use crate::{
    arrival::earliest_arrival_times, compute::fan_out, config::AnalysisConfig, graph::Adjacency,
};

fn closeness_for_source(adjacency: &Adjacency, source: usize) -> f64 {
    let num_nodes = adjacency.len();

    // Only strictly positive arrival times contribute, unreachable nodes add nothing.
    let (total, reached) = earliest_arrival_times(adjacency, source)
        .into_iter()
        .filter_map(|arrival| arrival.time())
        .filter(|time| time.value() > 0)
        .fold((0.0, 0usize), |(total, reached), time| {
            (total + 1.0 / time.value() as f64, reached + 1)
        });

    if reached == 0 {
        return 0.0;
    }

    total / (num_nodes - 1) as f64
}

/// Computes temporal closeness for every node index, one task per source.
pub(crate) fn compute_closeness(adjacency: &Adjacency, config: &AnalysisConfig) -> Vec<f64> {
    fan_out(adjacency.len(), config.workers(), |source| {
        closeness_for_source(adjacency, source)
    })
}
