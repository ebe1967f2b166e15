//! Shortest Paths - indexed heap, Dijkstra and Bellman-Ford
//!
//! This library provides the core of a single-source shortest path engine:
//! an indexed binary min-heap with O(log n) decrease-key, Dijkstra's algorithm
//! built on top of it, and a Bellman-Ford variant that detects negative cycles
//! and marks every vertex reachable from one as unbounded below.
//!
//! Graphs use dense vertex IDs `0..V`. The engine performs no I/O; results are
//! plain distance and predecessor tables owned by the caller.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::{BellmanFord, BellmanFordResult, NegativeCycleInfo},
    dijkstra::Dijkstra,
    path::{path_weight, reconstruct_path},
    Distance, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{HeapNode, IndexedMinHeap};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, MutableGraph};

use num_traits::Zero;
use std::fmt::Debug;

/// Numeric edge weight accepted by every graph and algorithm in the crate.
///
/// Signed integers, `f64` and `OrderedFloat<f64>` all qualify. Path sums are
/// computed with plain `+`, so for integer weights every shortest-path sum must
/// fit in the type; overflow panics in debug builds and wraps in release.
pub trait Weight: Copy + Debug + PartialOrd + Zero {}

impl<T> Weight for T where T: Copy + Debug + PartialOrd + Zero {}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Invalid edge weight")]
    InvalidWeight,

    #[error("Heap capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("Heap is empty")]
    HeapEmpty,

    #[error("Vertex {0} is already queued")]
    AlreadyQueued(usize),

    #[error("No path exists from {from} to {to}")]
    NoPathExists { from: usize, to: usize },

    #[error("Failed to allocate storage for {0} elements")]
    AllocationFailed(usize),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Allocates a vector of `len` copies of `value`, reporting failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;
    items.resize(len, value);
    Ok(items)
}
