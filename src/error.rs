//! Errors raised while building a graph or validating query arguments.
//!
//! Absence of a path is not an error: queries encode it in their return values (empty path
//! collections, [`Arrival::Unreachable`](crate::time::Arrival::Unreachable), zero contributions).

use crate::time::TimeKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An edge or a query referenced a node that isn't part of the graph.
    #[error("node not found in graph: {0}")]
    UnknownNode(String),

    /// Edge times of different representations were handed to the same graph.
    #[error("mixed time representations: expected {expected}, found {found}")]
    MixedTimeRepresentation { expected: TimeKind, found: TimeKind },

    /// A fraction argument was outside `(0, 1]`.
    #[error("fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
