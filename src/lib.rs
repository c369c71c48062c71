//! Chronos is a small toolkit for analysing temporal graphs: multigraphs whose edges carry the
//! time at which they happened.
//!
//! Paths in a temporal graph have to respect time, each edge must happen strictly after the
//! previous one. The shortest paths, centralities and reachability measures computed here are all
//! built on that definition rather than on static hop counts.
//!
//! # Basic usage
//!
//! The library is centered around the [`TemporalGraph`](graph::TemporalGraph) structure which is
//! built once from timestamped edges and is read-only afterwards. Every measurement is a query on
//! that graph.
//!
//! ```rust
//! use chronos_graph::graph::{Mode, TemporalGraph};
//! use chronos_graph::time::{Arrival, Time};
//!
//! // Edges are `(source, target, time)`. Node IDs can be any type that is
//! // `Copy + Eq + Hash + Ord + Debug`.
//! let graph = TemporalGraph::from_edges(Mode::Directed, [("a", "b", 1), ("b", "c", 2)]).unwrap();
//!
//! assert_eq!(
//!     graph.shortest_temporal_paths(&"a", &"c").unwrap(),
//!     vec![vec!["a", "b", "c"]]
//! );
//! assert_eq!(graph.earliest_arrival_times(&"a").unwrap()[&"c"], Arrival::At(Time(2)));
//!
//! // Three of the six ordered pairs are connected by a time-respecting walk.
//! assert_eq!(graph.reachability_ratio(), 0.5);
//!
//! // b lies on the only a-c path.
//! assert_eq!(graph.temporal_betweenness()[&"b"], 0.5);
//! ```
//!
//! Timestamps are either raw ticks or `chrono` instants, never both in one graph; see
//! [`EdgeTime`](time::EdgeTime).

mod arrival;
mod betweenness;
mod closeness;
mod compute;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
mod reach;
mod reachability;
mod search;
pub mod time;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use graph::{GraphBuilder, Mode, TemporalGraph};
