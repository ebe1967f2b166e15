use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{try_filled, Error, Result, Weight};

/// Classic Dijkstra's algorithm on an indexed min-heap.
///
/// Edge weights must be non-negative. This is not checked; a graph with
/// negative weights yields wrong distances and should go to `BellmanFord`.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Directed edges `(from, to)` ignored during relaxation
    excluded: Vec<(usize, usize)>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Ignore every edge `from -> to`, including parallel ones
    pub fn with_excluded_edge(mut self, from: usize, to: usize) -> Self {
        self.excluded.push((from, to));
        self
    }

    /// Ignore the edges between `u` and `v` in both directions
    pub fn with_excluded_undirected_edge(self, u: usize, v: usize) -> Self {
        self.with_excluded_edge(u, v).with_excluded_edge(v, u)
    }

    fn is_excluded(&self, from: usize, to: usize) -> bool {
        self.excluded.iter().any(|&edge| edge == (from, to))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances = try_filled(n, Distance::Infinity)?;
        let mut predecessors = try_filled(n, None)?;
        let mut queue = IndexedMinHeap::new(n)?;

        distances[source] = Distance::Finite(W::zero());
        queue.insert(source, W::zero())?;

        let mut settled = 0usize;
        while !queue.is_empty() {
            let node = queue.extract_min()?;
            let u = node.vertex;

            // Stale entry: u was improved after this key was recorded
            if Distance::Finite(node.distance) > distances[u] {
                continue;
            }
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                if self.is_excluded(u, v) {
                    continue;
                }

                let candidate = node.distance + weight;
                if Distance::Finite(candidate) < distances[v] {
                    log::trace!("relax {} -> {}: {:?}", u, v, candidate);
                    distances[v] = Distance::Finite(candidate);
                    predecessors[v] = Some(u);
                    if queue.contains(v) {
                        queue.decrease_key(v, candidate)?;
                    } else {
                        queue.insert(v, candidate)?;
                    }
                }
            }
        }

        log::debug!(
            "dijkstra from {} settled {} of {} vertices",
            source,
            settled,
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

/// A best route and the route found once its middle edge is closed
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeRoute<W> {
    pub best_path: Vec<usize>,
    pub best_distance: W,
    /// The closed edge, in path direction
    pub closed_edge: (usize, usize),
    /// `None` when closing the edge disconnects `target`
    pub alternative: Option<(Vec<usize>, W)>,
}

/// Finds the shortest route from `source` to `target`, then closes the middle
/// edge of that route in both directions and searches again.
///
/// Returns `Ok(None)` when the route has no edge to close (`source == target`).
pub fn alternative_route<W, G>(
    graph: &G,
    source: usize,
    target: usize,
) -> Result<Option<AlternativeRoute<W>>>
where
    W: Weight,
    G: Graph<W>,
{
    let best = Dijkstra::new().compute_shortest_paths(graph, source)?;
    let best_path = best.path_to(target)?;
    let best_distance = best.distances[target]
        .finite()
        .ok_or(Error::NoPathExists { from: source, to: target })?;

    if best_path.len() < 2 {
        return Ok(None);
    }

    let mid = best_path.len() / 2;
    let closed_edge = (best_path[mid - 1], best_path[mid]);
    let detour = Dijkstra::new()
        .with_excluded_undirected_edge(closed_edge.0, closed_edge.1)
        .compute_shortest_paths(graph, source)?;

    let alternative = match detour.path_to(target) {
        Ok(path) => detour.distances[target].finite().map(|d| (path, d)),
        Err(Error::NoPathExists { .. }) => None,
        Err(err) => return Err(err),
    };

    Ok(Some(AlternativeRoute {
        best_path,
        best_distance,
        closed_edge,
        alternative,
    }))
}
