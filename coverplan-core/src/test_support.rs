//! Test-only graph builders and reference checks used by unit, property and
//! behaviour tests across the workspace.

use crate::{CoverageGraph, Distance, Graph, VertexId};

/// Path `0 - 1 - ... - (len - 1)`.
#[must_use]
pub fn path_graph(len: usize) -> Graph {
    let adjacency = (0..len)
        .map(|vertex| {
            let mut neighbors = Vec::with_capacity(2);
            if let Some(prev) = vertex.checked_sub(1) {
                neighbors.push(prev);
            }
            if vertex.saturating_add(1) < len {
                neighbors.push(vertex.saturating_add(1));
            }
            neighbors
        })
        .collect();
    build(adjacency)
}

/// Star whose hub is vertex `0` and whose leaves are `1..=leaves`.
#[must_use]
pub fn star_graph(leaves: usize) -> Graph {
    let mut adjacency = Vec::with_capacity(leaves.saturating_add(1));
    adjacency.push((1..=leaves).collect());
    adjacency.extend((1..=leaves).map(|_| vec![0]));
    build(adjacency)
}

/// Four-connected `width × height` grid; vertex `y * width + x`.
///
/// Neighbors are listed north, west, east, south, i.e. ascending id order.
#[must_use]
pub fn grid_graph(width: usize, height: usize) -> Graph {
    let mut adjacency = Vec::with_capacity(width.saturating_mul(height));
    for y in 0..height {
        for x in 0..width {
            let mut neighbors = Vec::with_capacity(4);
            if y > 0 {
                neighbors.push((y - 1) * width + x);
            }
            if x > 0 {
                neighbors.push(y * width + x - 1);
            }
            if x + 1 < width {
                neighbors.push(y * width + x + 1);
            }
            if y + 1 < height {
                neighbors.push((y + 1) * width + x);
            }
            adjacency.push(neighbors);
        }
    }
    build(adjacency)
}

/// Undirected graph on `nb_vertices` vertices from an edge list.
///
/// Edges touching unknown vertices are dropped; duplicates are collapsed.
#[must_use]
pub fn graph_from_edges(nb_vertices: usize, edges: &[(VertexId, VertexId)]) -> Graph {
    let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); nb_vertices];
    for &(a, b) in edges {
        if a >= nb_vertices || b >= nb_vertices || a == b {
            continue;
        }
        if let Some(list) = adjacency.get_mut(a) {
            list.push(b);
        }
        if let Some(list) = adjacency.get_mut(b) {
            list.push(a);
        }
    }
    for list in &mut adjacency {
        list.sort_unstable();
        list.dedup();
    }
    build(adjacency)
}

/// Size of the smallest center set covering `graph` at `radius`, found by
/// enumerating subsets in increasing size.
///
/// Exponential; meant for graphs with a handful of vertices.
#[must_use]
pub fn brute_force_min_centers(graph: &Graph, radius: Distance) -> usize {
    let coverage = CoverageGraph::from_graph(graph, radius);
    let nb_vertices = graph.nb_vertices();
    (0..=nb_vertices)
        .find(|&size| any_subset_dominates(&coverage, size, 0, &mut Vec::new()))
        .unwrap_or(nb_vertices)
}

fn any_subset_dominates(
    coverage: &CoverageGraph,
    size: usize,
    start: VertexId,
    chosen: &mut Vec<VertexId>,
) -> bool {
    if chosen.len() == size {
        return coverage.is_dominating(chosen);
    }
    for vertex in start..coverage.nb_vertices() {
        chosen.push(vertex);
        let found = any_subset_dominates(coverage, size, vertex + 1, chosen);
        chosen.pop();
        if found {
            return true;
        }
    }
    false
}

#[expect(
    clippy::expect_used,
    reason = "test builders only emit in-range neighbor ids"
)]
fn build(adjacency: Vec<Vec<VertexId>>) -> Graph {
    Graph::new(adjacency).expect("test graph builders produce valid adjacency")
}
