use std::cmp::Ordering;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result, Weight};

/// Generates a random directed graph with `edges` edges whose weights are drawn from `low..high`.
/// Self-loops are skipped, so the final edge count may be slightly lower.
/// Fails with `InvalidWeight` when `low..high` is empty.
pub fn random_graph<W, R>(
    rng: &mut R,
    vertices: usize,
    edges: usize,
    low: W,
    high: W,
) -> Result<DirectedGraph<W>>
where
    W: Weight + SampleUniform,
    R: Rng,
{
    if low.partial_cmp(&high) != Some(Ordering::Less) {
        return Err(Error::InvalidWeight);
    }

    let mut graph = DirectedGraph::try_new(vertices)?;
    if vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v {
            let weight = rng.gen_range(low..high);
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid where every cell links to its 4 neighbours
pub fn grid_graph<W: Weight>(width: usize, height: usize, weight: W) -> Result<DirectedGraph<W>> {
    let mut graph = DirectedGraph::new(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_undirected_edge(index(x, y), index(x + 1, y), weight)?;
            }
            if y + 1 < height {
                graph.add_undirected_edge(index(x, y), index(x, y + 1), weight)?;
            }
        }
    }

    Ok(graph)
}
