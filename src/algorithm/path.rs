use crate::algorithm::Distance;
use crate::graph::Graph;
use crate::{Error, Result, Weight};

/// Walks the predecessor table back from `target` and returns the path `source ..= target`.
///
/// Fails with `NoPathExists` when `target` is unreached, dominated by a negative
/// cycle (the source included), or its predecessor chain does not lead back to `source`.
pub fn reconstruct_path<W: Weight>(
    predecessors: &[Option<usize>],
    distances: &[Distance<W>],
    source: usize,
    target: usize,
) -> Result<Vec<usize>> {
    let n = predecessors.len();
    if source >= n {
        return Err(Error::InvalidVertex(source));
    }
    if target >= n || target >= distances.len() {
        return Err(Error::InvalidVertex(target));
    }

    let no_path = Error::NoPathExists { from: source, to: target };

    if !distances[target].is_finite() {
        return Err(no_path);
    }
    if target == source {
        return Ok(vec![source]);
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = predecessors[current].ok_or_else(|| no_path.clone())?;
        path.push(current);

        // A simple path never has more than n vertices; longer means a predecessor loop
        if path.len() > n {
            log::debug!("predecessor loop while walking back from {}", target);
            return Err(no_path);
        }
    }

    path.reverse();
    Ok(path)
}

/// Sum of the cheapest edge between each pair of consecutive vertices.
///
/// `None` if some consecutive pair is not joined by an edge.
pub fn path_weight<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Weight,
    G: Graph<W>,
{
    path.windows(2).try_fold(W::zero(), |total, pair| {
        graph
            .get_edge_weight(pair[0], pair[1])
            .map(|weight| total + weight)
    })
}
