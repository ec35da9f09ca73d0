use thiserror::Error;

/// Errors that may occur when building a [`crate::jumps::BinaryJumps`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JumpsError {
    /// A vertex outside `1..=count`.
    #[error("vertex {vertex} is outside 1..={count}")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices.
        count: usize,
    },
    /// The edges do not form a tree spanning all vertices.
    #[error("{edges} edges over {count} vertices do not form a tree")]
    NotATree {
        /// Number of edges given.
        edges: usize,
        /// Number of vertices.
        count: usize,
    },
}
