use crate::graph::traits::{Edge, Graph, MutableGraph};
use crate::{try_filled, Error, Result, Weight};

/// A directed graph backed by an edge arena.
///
/// Edges live in a single vector and are referred to by their index; the
/// adjacency lists hold edge IDs, so the flat edge list used by Bellman-Ford
/// and the per-vertex view used by Dijkstra are projections of the same data.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W> {
    /// Number of vertices in the graph, fixed at construction
    vertex_count: usize,

    /// Every edge, indexed by edge ID
    edges: Vec<Edge<W>>,

    /// Outgoing edge IDs for each vertex
    outgoing: Vec<Vec<usize>>,
}

impl<W: Weight> DirectedGraph<W> {
    /// Creates a graph with vertices `0..vertex_count` and no edges
    pub fn new(vertex_count: usize) -> Self {
        DirectedGraph {
            vertex_count,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    /// Like `new`, but reports `AllocationFailed` instead of aborting on huge vertex counts
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(DirectedGraph {
            vertex_count,
            edges: Vec::new(),
            outgoing: try_filled(vertex_count, Vec::new())?,
        })
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::try_new(vertex_count)?;
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the edge with the given ID
    pub fn edge(&self, id: usize) -> Option<&Edge<W>> {
        self.edges.get(id)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight >= W::zero())
    }
}

impl<W: Weight> Graph<W> for DirectedGraph<W> {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(vertex) {
            Some(ids) => Box::new(ids.iter().map(move |&id| {
                let edge = &self.edges[id];
                (edge.to, edge.weight)
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

impl<W: Weight> MutableGraph<W> for DirectedGraph<W> {
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        // NaN is the only value not comparable with itself
        if weight.partial_cmp(&weight).is_none() {
            return Err(Error::InvalidWeight);
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.outgoing[from].push(id);
        Ok(id)
    }
}
