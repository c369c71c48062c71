//! A module for working with timestamped edges.

use serde::{Deserialize, Serialize};

use crate::time::{Time, TimeWindow};

/// A timestamped edge between two nodes.
///
/// The `key` tells apart parallel edges between the same ordered pair of nodes, e.g. repeated
/// interactions at different times. Whether the edge has a direction is a property of the graph
/// holding it, not of the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalEdge<T> {
    source: T,
    target: T,
    key: usize,
    time: Time,
}

impl<T> TemporalEdge<T> {
    /// Creates a new edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::edge::TemporalEdge;
    /// use chronos_graph::time::Time;
    ///
    /// let edge = TemporalEdge::new("a", "b", 0, Time(1));
    /// assert_eq!(edge.time(), Time(1));
    /// ```
    pub fn new(source: T, target: T, key: usize, time: Time) -> Self {
        Self {
            source,
            target,
            key,
            time,
        }
    }

    /// Returns the node the edge leaves from.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the node the edge arrives at.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns the parallel-edge key.
    pub fn key(&self) -> usize {
        self.key
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Returns whether the edge contains the given node.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_graph::edge::TemporalEdge;
    /// use chronos_graph::time::Time;
    ///
    /// let edge = TemporalEdge::new("a", "b", 0, Time(1));
    ///
    /// assert_eq!(edge.contains(&"a"), true);
    /// assert_eq!(edge.contains(&"b"), true);
    /// assert_eq!(edge.contains(&"c"), false);
    /// ```
    pub fn contains(&self, node: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == node || self.target() == node
    }

    /// Returns whether the edge happened inside the window.
    pub fn in_window(&self, window: &TimeWindow) -> bool {
        window.contains(self.time)
    }
}
