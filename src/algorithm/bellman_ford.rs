use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Edge, Graph};
use crate::{try_filled, Error, Result, Weight};

/// Which vertices a negative cycle makes unbounded below
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeCycleInfo {
    pub has_negative_cycle: bool,
    /// True for cycle members and for everything reachable from them
    pub in_negative_cycle: Vec<bool>,
}

impl NegativeCycleInfo {
    /// Vertices flagged as affected, in ascending order
    pub fn affected_vertices(&self) -> Vec<usize> {
        self.in_negative_cycle
            .iter()
            .enumerate()
            .filter_map(|(v, &flag)| flag.then_some(v))
            .collect()
    }
}

/// Output of a Bellman-Ford run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BellmanFordResult<W> {
    /// Distances and predecessors; affected vertices hold `Distance::NegInfinity`
    pub paths: ShortestPathResult<W>,
    pub cycles: NegativeCycleInfo,
    /// Relaxation passes executed before detection
    pub passes: usize,
}

/// Bellman-Ford over the flat edge list, tolerating negative weights
#[derive(Debug, Clone)]
pub struct BellmanFord {
    early_exit: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord { early_exit: true }
    }
}

impl BellmanFord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop relaxing after the first pass that changes nothing (default `true`)
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Runs on a graph's edge list
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<BellmanFordResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.run_on_edges(graph.edges(), graph.vertex_count(), source)
    }

    /// Runs on a bare edge list over vertices `0..vertex_count`.
    ///
    /// Phase 1 relaxes every edge up to `V - 1` times. Phase 2 scans once more;
    /// any edge still relaxable seeds a worklist, and every vertex reachable
    /// from a seed is flagged and set to `Distance::NegInfinity`.
    pub fn run_on_edges<W: Weight>(
        &self,
        edges: &[Edge<W>],
        vertex_count: usize,
        source: usize,
    ) -> Result<BellmanFordResult<W>> {
        if source >= vertex_count {
            return Err(Error::InvalidVertex(source));
        }
        if let Some(edge) = edges
            .iter()
            .find(|e| e.from >= vertex_count || e.to >= vertex_count)
        {
            return Err(Error::InvalidEdge(edge.from, edge.to));
        }

        let n = vertex_count;
        let mut distances = try_filled(n, Distance::Infinity)?;
        let mut predecessors = try_filled(n, None)?;
        let mut in_negative_cycle = try_filled(n, false)?;
        let mut queued = try_filled(n, false)?;
        distances[source] = Distance::Finite(W::zero());

        // Phase 1: relaxation
        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            let mut updated = false;
            for edge in edges {
                if let Some(candidate) = relaxed(&distances, edge) {
                    distances[edge.to] = candidate;
                    predecessors[edge.to] = Some(edge.from);
                    updated = true;
                }
            }
            if !updated && self.early_exit {
                break;
            }
        }

        // Phase 2: detection
        let mut worklist = VecDeque::new();
        for edge in edges {
            if relaxed(&distances, edge).is_some() && !queued[edge.to] {
                queued[edge.to] = true;
                worklist.push_back(edge.to);
            }
        }
        let has_negative_cycle = !worklist.is_empty();

        if has_negative_cycle {
            log::debug!(
                "bellman-ford from {}: {} vertices still relaxable after {} passes",
                source,
                worklist.len(),
                passes
            );

            let mut outgoing: Vec<Vec<usize>> = try_filled(n, Vec::new())?;
            for edge in edges {
                outgoing[edge.from].push(edge.to);
            }

            // Propagation: everything downstream of a cycle is unbounded too
            while let Some(v) = worklist.pop_front() {
                in_negative_cycle[v] = true;
                distances[v] = Distance::NegInfinity;
                for &next in &outgoing[v] {
                    if !queued[next] {
                        queued[next] = true;
                        worklist.push_back(next);
                    }
                }
            }
        } else {
            log::debug!("bellman-ford from {} converged after {} passes", source, passes);
        }

        Ok(BellmanFordResult {
            paths: ShortestPathResult {
                distances,
                predecessors,
                source,
            },
            cycles: NegativeCycleInfo {
                has_negative_cycle,
                in_negative_cycle,
            },
            passes,
        })
    }
}

/// The improved distance for `edge.to`, if `edge` can be relaxed
fn relaxed<W: Weight>(distances: &[Distance<W>], edge: &Edge<W>) -> Option<Distance<W>> {
    let from = distances[edge.from];
    if !from.is_finite() {
        return None;
    }
    let candidate = from.plus(edge.weight);
    (candidate < distances[edge.to]).then_some(candidate)
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        Ok(self.run(graph, source)?.paths)
    }
}

/// Finds one negative cycle anywhere in the graph.
///
/// Every vertex starts at distance zero, as if a virtual source reached all of
/// them. If the `V`-th pass still relaxes an edge, walking `V` predecessor steps
/// back from that edge's head lands on a cycle. The cycle is returned in edge
/// order: each vertex has an edge to the next and the last links to the first.
pub fn find_negative_cycle<W, G>(graph: &G) -> Result<Option<Vec<usize>>>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut distances = try_filled(n, W::zero())?;
    let mut predecessors: Vec<Option<usize>> = try_filled(n, None)?;

    let mut last_updated = None;
    for _ in 0..n {
        last_updated = None;
        for edge in graph.edges() {
            let candidate = distances[edge.from] + edge.weight;
            if candidate < distances[edge.to] {
                distances[edge.to] = candidate;
                predecessors[edge.to] = Some(edge.from);
                last_updated = Some(edge.to);
            }
        }
        if last_updated.is_none() {
            return Ok(None);
        }
    }

    let mut on_cycle = match last_updated {
        Some(v) => v,
        None => return Ok(None),
    };
    for _ in 0..n {
        on_cycle = match predecessors[on_cycle] {
            Some(p) => p,
            None => return Ok(None),
        };
    }

    let mut cycle = vec![on_cycle];
    let mut current = predecessors[on_cycle];
    loop {
        let v = match current {
            Some(v) => v,
            None => return Ok(None),
        };
        if v == on_cycle {
            break;
        }
        if cycle.len() > n {
            return Ok(None);
        }
        cycle.push(v);
        current = predecessors[v];
    }
    cycle.reverse();

    log::debug!("negative cycle of length {} found", cycle.len());
    Ok(Some(cycle))
}
