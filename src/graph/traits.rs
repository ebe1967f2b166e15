use serde::{Deserialize, Serialize};

use crate::{Result, Weight};

/// A directed, weighted edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// Trait representing a weighted directed graph with a fixed vertex set
pub trait Graph<W: Weight> {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as `(target, weight)`
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns every edge in insertion order
    fn edges(&self) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the parallel edges `from -> to`
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}

/// Trait for inserting edges into a graph between queries
pub trait MutableGraph<W: Weight>: Graph<W> {
    /// Adds a directed edge and returns its ID. Parallel edges are kept independently.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize>;

    /// Adds the edge in both directions, returning both IDs
    fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> Result<(usize, usize)> {
        let forward = self.add_edge(u, v, weight)?;
        let backward = self.add_edge(v, u, weight)?;
        Ok((forward, backward))
    }
}
