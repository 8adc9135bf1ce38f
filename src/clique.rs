//! Constrained clique builder over a shared graph.
//!
//! A [`Clique`] never owns or copies its backing [`Graph`]; it reads
//! topology and pheromone through a shared borrow and tracks its own node
//! and induced-edge sets. In checked mode every insertion preserves the
//! invariant that the node set is a complete subgraph.

use bit_set::BitSet;

use crate::error::{Error, Result};
use crate::graph::{Graph, Node};

/// A (partial) clique under construction.
#[derive(Debug)]
pub struct Clique<'g> {
    graph: &'g Graph,
    /// Members in insertion order.
    nodes: Vec<Node>,
    /// Membership bitset for O(1) lookups.
    members: BitSet,
    /// Induced edges, normalized `a < b`.
    edges: Vec<(Node, Node)>,
}

impl<'g> Clique<'g> {
    /// Creates an empty clique over `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            nodes: Vec::new(),
            members: BitSet::with_capacity(graph.dim()),
            edges: Vec::new(),
        }
    }

    /// The backing graph.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Members in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Induced edges, each pair once with `a < b`.
    pub fn edges(&self) -> &[(Node, Node)] {
        &self.edges
    }

    /// Whether `node` is a member.
    pub fn contains(&self, node: Node) -> bool {
        self.members.contains(node)
    }

    /// True iff the backing graph connects `node` to every member.
    pub fn is_connected_with_all_nodes(&self, node: Node) -> bool {
        self.nodes
            .iter()
            .all(|&member| self.graph.has_edge(node, member))
    }

    /// Inserts `node`, enforcing the completeness invariant.
    ///
    /// On rejection the clique is left untouched and the error names the
    /// offending node together with the current membership.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if node >= self.graph.dim() {
            return Err(Error::NoSuchNode(node));
        }
        if !self.is_connected_with_all_nodes(node) {
            return Err(Error::ConstraintViolation {
                node,
                members: self.nodes.clone(),
            });
        }
        self.insert(node);
        Ok(())
    }

    /// Inserts `node` without the connectivity check.
    ///
    /// Escape hatch for callers whose candidates are already validated,
    /// such as the walk loop consuming [`Clique::candidates`].
    pub fn add_node_unchecked(&mut self, node: Node) {
        self.insert(node);
    }

    fn insert(&mut self, node: Node) {
        for &member in &self.nodes {
            self.edges.push((node.min(member), node.max(member)));
        }
        self.members.insert(node);
        self.nodes.push(node);
    }

    /// Every present graph node connected to all members and not yet a
    /// member itself, in ascending order.
    ///
    /// An empty clique admits every present node. An empty result means
    /// the clique is terminal.
    pub fn candidates(&self) -> Vec<Node> {
        self.graph
            .nodes()
            .filter(|&node| !self.contains(node) && self.is_connected_with_all_nodes(node))
            .collect()
    }

    /// Sum of pheromone over the edges linking `node` to every member.
    ///
    /// 0.0 for the empty clique.
    pub fn pheromone_factor(&self, node: Node) -> f64 {
        self.nodes
            .iter()
            .filter_map(|&member| self.graph.pheromone(member, node))
            .sum()
    }
}
