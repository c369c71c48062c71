//! A module for the graph-wide reachability measurements.

use nalgebra::DMatrix;
use tracing::debug;

use crate::{
    compute::fan_out, config::AnalysisConfig, graph::Adjacency, reach::reachable_set,
    search::StateSearch, time::Time,
};

/// Computes the fraction of ordered node pairs `(s, t)`, `s != t`, such that `t` can be reached
/// from `s` by a time-respecting walk.
pub(crate) fn compute_reachability_ratio(adjacency: &Adjacency, config: &AnalysisConfig) -> f64 {
    let num_nodes = adjacency.len();
    if num_nodes < 2 {
        return 0.0;
    }

    // The source is always part of its own reachable set.
    let reached: usize = fan_out(num_nodes, config.workers(), |source| {
        reachable_set(adjacency, source).len() - 1
    })
    .into_iter()
    .sum();

    reached as f64 / (num_nodes * (num_nodes - 1)) as f64
}

/// Computes the reachability latency for the fraction `r`, already validated to be in `(0, 1]`.
///
/// For every observation instant `t` (each distinct edge timestamp) and every node `i`, the mean
/// hop count from `i` to the nodes it can reach using only edges at or after `t` fills entry
/// `(i, t)` of an N x T matrix, 0 if it reaches nothing. The matrix is column-major, so each
/// instant's column is contiguous and is sorted ascending in place. Row `floor(r * N)` then holds
/// the quantile of every instant and the latency is its mean.
pub(crate) fn compute_reachability_latency(
    adjacency: &Adjacency,
    times: &[Time],
    r: f64,
    config: &AnalysisConfig,
) -> f64 {
    let num_nodes = adjacency.len();
    let num_times = times.len();
    if num_nodes == 0 || num_times == 0 {
        return 0.0;
    }

    let mean_hops = fan_out(num_times * num_nodes, config.workers(), |task| {
        let (t, source) = (task / num_nodes, task % num_nodes);
        mean_hops_from(adjacency, source, times[t])
    });
    let mut distances = DMatrix::from_vec(num_nodes, num_times, mean_hops);

    for mut column in distances.column_iter_mut() {
        column.as_mut_slice().sort_by(f64::total_cmp);
    }

    let k = ((r * num_nodes as f64).floor() as usize).min(num_nodes - 1);
    debug!(num_times, num_nodes, k, "reachability latency quantile");

    distances.row(k).mean()
}

/// The mean minimum hop count from `source` to every other node it reaches departing no earlier
/// than `departure`.
fn mean_hops_from(adjacency: &Adjacency, source: usize, departure: Time) -> f64 {
    let search = StateSearch::run(adjacency, source, None, Some(departure));

    let (total, reached) = (0..adjacency.len())
        .filter(|&target| target != source)
        .filter_map(|target| search.hops_to(target))
        .fold((0usize, 0usize), |(total, reached), hops| {
            (total + hops, reached + 1)
        });

    if reached == 0 {
        return 0.0;
    }

    total as f64 / reached as f64
}
