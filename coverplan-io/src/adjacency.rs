//! Plain-text adjacency lists: one `<vertex>: <neighbor> <neighbor> ...`
//! line per vertex.

use std::io::{self, Read};

use coverplan_core::{Graph, GraphError, MAX_VERTICES, VertexId};
use thiserror::Error;

use crate::lines::content_lines;

/// Errors raised while parsing an adjacency file.
#[derive(Debug, Error)]
pub enum AdjacencyError {
    /// The underlying reader failed.
    #[error("failed to read adjacency list: {0}")]
    Io(#[from] io::Error),
    /// A content line has no `:` separator.
    #[error("line {line}: expected `<vertex>: <neighbors>`")]
    MissingSeparator {
        /// 1-based line number.
        line: usize,
    },
    /// A vertex or neighbor token is not a non-negative integer.
    #[error("line {line}: {token:?} is not a vertex id")]
    InvalidVertex {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// A vertex id is too large for a [`Graph`] to hold.
    #[error("line {line}: vertex {vertex} exceeds the supported {limit} vertices")]
    VertexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// Offending id.
        vertex: VertexId,
        /// Largest supported vertex count.
        limit: usize,
    },
    /// The assembled adjacency was rejected by [`Graph::new`].
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parse adjacency text into a [`Graph`] with uniform colours.
///
/// The vertex count is one more than the largest id mentioned anywhere;
/// vertices without a line have no neighbors. A vertex listed twice keeps
/// its last line. Ids must stay below [`MAX_VERTICES`].
///
/// # Errors
///
/// Returns an [`AdjacencyError`] describing the first malformed line.
///
/// # Examples
///
/// ```rust
/// use coverplan_io::parse_adjacency;
///
/// # fn main() -> Result<(), coverplan_io::AdjacencyError> {
/// let graph = parse_adjacency("0: 1\n1: 0 2\n2: 1\n")?;
/// assert_eq!(graph.nb_vertices(), 3);
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// # Ok(())
/// # }
/// ```
pub fn parse_adjacency(text: &str) -> Result<Graph, AdjacencyError> {
    let mut rows: Vec<(VertexId, Vec<VertexId>)> = Vec::new();
    let mut nb_vertices = 0;
    for (line, content) in content_lines(text) {
        let (vertex_text, neighbors_text) = content
            .split_once(':')
            .ok_or(AdjacencyError::MissingSeparator { line })?;
        let vertex = parse_vertex(line, vertex_text.trim())?;
        let neighbors = neighbors_text
            .split_whitespace()
            .map(|token| parse_vertex(line, token))
            .collect::<Result<Vec<_>, _>>()?;

        let largest = neighbors.iter().copied().fold(vertex, VertexId::max);
        if largest >= MAX_VERTICES {
            return Err(AdjacencyError::VertexOutOfRange {
                line,
                vertex: largest,
                limit: MAX_VERTICES,
            });
        }
        nb_vertices = nb_vertices.max(largest.saturating_add(1));
        rows.push((vertex, neighbors));
    }

    let mut adjacency = vec![Vec::new(); nb_vertices];
    for (vertex, neighbors) in rows {
        if let Some(slot) = adjacency.get_mut(vertex) {
            if !slot.is_empty() {
                log::warn!("vertex {vertex} listed more than once; keeping the last line");
            }
            *slot = neighbors;
        }
    }
    Ok(Graph::new(adjacency)?)
}

/// Read and parse adjacency text from `reader`.
///
/// # Errors
///
/// Returns [`AdjacencyError::Io`] when reading fails, or any parse error
/// from [`parse_adjacency`].
pub fn read_adjacency<R: Read>(mut reader: R) -> Result<Graph, AdjacencyError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_adjacency(&text)
}

fn parse_vertex(line: usize, token: &str) -> Result<VertexId, AdjacencyError> {
    token.parse().map_err(|_| AdjacencyError::InvalidVertex {
        line,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_path_with_comments() {
        let graph = parse_adjacency("# path\n0: 1\n\n1: 0 2\n2: 1 3\n3: 2 4\n4: 3\n")
            .expect("adjacency should parse");
        assert_eq!(graph.nb_vertices(), 5);
        assert_eq!(graph.neighbors(2), &[1, 3]);
        assert_eq!(graph.distance(0, 4), Some(4));
        assert!(graph.vertices().all(|vertex| graph.color(vertex) == Some(1)));
    }

    #[rstest]
    fn vertex_count_follows_largest_mentioned_id() {
        let graph = parse_adjacency("0: 4\n").expect("adjacency should parse");
        assert_eq!(graph.nb_vertices(), 5);
        assert!(graph.neighbors(4).is_empty());
        assert_eq!(graph.distance(4, 0), None);
    }

    #[rstest]
    fn vertex_without_neighbors_is_allowed() {
        let graph = parse_adjacency("0:\n1: \n").expect("adjacency should parse");
        assert_eq!(graph.nb_vertices(), 2);
        assert!(graph.neighbors(0).is_empty());
    }

    #[rstest]
    fn later_line_replaces_earlier_one() {
        let graph = parse_adjacency("0: 1\n0: 2\n").expect("adjacency should parse");
        assert_eq!(graph.neighbors(0), &[2]);
    }

    #[rstest]
    fn empty_input_gives_empty_graph() {
        let graph = parse_adjacency("\n# nothing\n").expect("adjacency should parse");
        assert!(graph.is_empty());
    }

    #[rstest]
    #[case("0 1 2\n", "line 1: expected")]
    #[case("0: 1\nx: 0\n", "line 2: \"x\" is not a vertex id")]
    #[case("0: 1 -2\n", "\"-2\" is not a vertex id")]
    #[case("0: 1.5\n", "\"1.5\" is not a vertex id")]
    #[case("0: 1\n1: 1000000000000\n", "line 2: vertex 1000000000000 exceeds")]
    #[case("65536: 0\n", "line 1: vertex 65536 exceeds the supported 65536 vertices")]
    fn rejects_malformed_lines(#[case] text: &str, #[case] expected: &str) {
        let err = parse_adjacency(text).expect_err("adjacency should be rejected");
        let message = err.to_string();
        assert!(
            message.contains(expected),
            "{message:?} should contain {expected:?}"
        );
    }

    #[rstest]
    fn reads_from_any_reader() {
        let graph = read_adjacency("0: 1\n1: 0\n".as_bytes()).expect("adjacency should parse");
        assert_eq!(graph.nb_vertices(), 2);
    }
}
