//! Crate-wide error type.

use crate::graph::Node;
use thiserror::Error;

/// Errors produced by graph construction, clique building, and the
/// search runners.
#[derive(Debug, Error)]
pub enum Error {
    /// A run parameter failed validation (zero ants, rho out of range, ...).
    ///
    /// Always raised before any search work begins.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The graph contains no node with at least one edge, so no agent
    /// can be seeded.
    #[error("graph has no nodes, cannot seed an agent")]
    EmptyGraph,

    /// A node index outside the graph was queried.
    #[error("no node {0} in graph")]
    NoSuchNode(Node),

    /// An edge from a node to itself was requested.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(Node),

    /// A checked clique insertion would break pairwise completeness.
    ///
    /// This indicates a logic error in the caller's selection policy:
    /// the walk path pre-validates candidates and never triggers it.
    #[error("cannot add node {node} to clique: not connected to all members {members:?}")]
    ConstraintViolation {
        /// The rejected node.
        node: Node,
        /// Clique membership at the time of the attempt.
        members: Vec<Node>,
    },

    /// The graph input file could not be read.
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    /// The graph input file is not a valid coordinate matrix.
    #[error("malformed matrix input: {0}")]
    Parse(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
