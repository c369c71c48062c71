//! Settings for the parallel metric computations.

use std::thread;

use serde::{Deserialize, Serialize};

pub const MIN_NUM_THREADS: usize = 1;
pub const MAX_NUM_THREADS: usize = 128;

/// Knobs shared by the all-pairs metrics.
///
/// Deserializes with defaults for any missing field, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Size of the worker pool, clamped to `[MIN_NUM_THREADS, MAX_NUM_THREADS]` on use.
    pub num_threads: usize,
    /// Scale betweenness by `1 / ((N - 1)(N - 2))`.
    pub normalize: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_threads: default_num_threads(),
            normalize: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Returns the worker count that will actually be used.
    pub fn workers(&self) -> usize {
        self.num_threads.clamp(MIN_NUM_THREADS, MAX_NUM_THREADS)
    }
}

fn default_num_threads() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(MIN_NUM_THREADS)
}
