use rayon::prelude::*;

use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Result, Weight};

/// Runs one query per source in parallel over a shared, read-only graph.
///
/// Each query allocates its own heap and tables, so results are identical to
/// running them one after another. Results come back in `sources` order.
pub fn shortest_paths_from_sources<W, G, A>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Weight + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    log::debug!(
        "running {} from {} sources",
        algorithm.name(),
        sources.len()
    );
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// Distance matrix with one row per source vertex
pub fn all_pairs<W, G, A>(algorithm: &A, graph: &G) -> Result<Vec<Vec<Distance<W>>>>
where
    W: Weight + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    let sources: Vec<usize> = (0..graph.vertex_count()).collect();
    let results = shortest_paths_from_sources(algorithm, graph, &sources)?;
    Ok(results.into_iter().map(|r| r.distances).collect())
}
