//! All-pairs hop distances computed by repeated breadth-first search.

use std::collections::VecDeque;

use super::{Distance, VertexId};

/// Square matrix of hop distances; `None` marks an unreachable pair.
pub(super) type DistanceMatrix = Vec<Vec<Option<Distance>>>;

/// Compute hop distances from every vertex.
///
/// Runs one BFS per source, so the cost is `O(V · (V + E))`. Neighbor ids
/// must already be validated against `adjacency.len()`.
pub(super) fn all_pairs(adjacency: &[Vec<VertexId>]) -> DistanceMatrix {
    (0..adjacency.len())
        .map(|source| from_source(adjacency, source))
        .collect()
}

fn from_source(adjacency: &[Vec<VertexId>], source: VertexId) -> Vec<Option<Distance>> {
    let mut row: Vec<Option<Distance>> = vec![None; adjacency.len()];
    if let Some(origin) = row.get_mut(source) {
        *origin = Some(0);
    }

    let mut queue = VecDeque::from([source]);
    while let Some(vertex) = queue.pop_front() {
        let Some(depth) = row.get(vertex).copied().flatten() else {
            continue;
        };
        let next = depth.saturating_add(1);
        let neighbors = adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default();
        for &neighbor in neighbors {
            if let Some(slot) = row.get_mut(neighbor)
                && slot.is_none()
            {
                *slot = Some(next);
                queue.push_back(neighbor);
            }
        }
    }
    row
}
