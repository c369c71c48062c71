//! A module for fanning per-source work out to a pool of threads.

use std::{
    panic,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
    time::Instant,
};

use tracing::debug;

/// Runs `task` for every index in `0..num_tasks` on `num_threads` workers and returns the results
/// in index order.
///
/// Workers grab the next unprocessed index from a shared counter and keep their results to
/// themselves; nothing is written to shared state. The results are only combined once every
/// worker has finished, in index order, so the output doesn't depend on scheduling.
pub(crate) fn fan_out<R, F>(num_tasks: usize, num_threads: usize, task: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Sync,
{
    let start = Instant::now();
    let num_threads = num_threads.min(num_tasks).max(1);
    debug!(num_tasks, num_threads, "fanning out");

    let counter = AtomicUsize::new(0);

    let mut results: Vec<(usize, R)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..num_threads)
            .map(|_| scope.spawn(|| worker(&counter, num_tasks, &task)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(local) => local,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    });

    results.sort_unstable_by_key(|(index, _)| *index);
    debug!(elapsed = ?start.elapsed(), "fan out done");

    results.into_iter().map(|(_, result)| result).collect()
}

/// The thread task: grabs the next unprocessed index until there are none left, returning the
/// results tagged with their index.
fn worker<R, F>(counter: &AtomicUsize, num_tasks: usize, task: &F) -> Vec<(usize, R)>
where
    F: Fn(usize) -> R,
{
    let mut local = Vec::new();

    loop {
        let index = counter.fetch_add(1, Ordering::Relaxed);
        if index >= num_tasks {
            break;
        }
        local.push((index, task(index)));
    }

    local
}
