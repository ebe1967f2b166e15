use serde::{Deserialize, Serialize};

use crate::algorithm::path::reconstruct_path;
use crate::graph::Graph;
use crate::{Result, Weight};

/// Distance from the source to a vertex.
///
/// Variants are ordered `NegInfinity < Finite(_) < Infinity`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Distance<W> {
    /// Reachable from a negative cycle, so unbounded below
    NegInfinity,
    Finite(W),
    /// Not reached from the source
    Infinity,
}

impl<W: Weight> Distance<W> {
    /// Returns the numeric distance, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Distance after following one more edge of weight `weight`
    pub fn plus(self, weight: W) -> Self {
        match self {
            Distance::Finite(value) => Distance::Finite(value + weight),
            other => other,
        }
    }
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W: Weight> ShortestPathResult<W> {
    /// Distance to `target`, `None` if the vertex is out of range
    pub fn distance(&self, target: usize) -> Option<Distance<W>> {
        self.distances.get(target).copied()
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Shortest path from the source to `target`, both ends included
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        reconstruct_path(&self.predecessors, &self.distances, self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        result.path_to(target)
    }
}
