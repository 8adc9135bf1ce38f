//! Undirected graph with per-edge pheromone.
//!
//! The backing store is a dense `dim x dim` matrix of pheromone values
//! with a [`NO_EDGE`] sentinel for absent pairs. Every write is mirrored,
//! so `structure[i][j] == structure[j][i]` holds at all times and the
//! symmetry invariant is enforced in exactly one place
//! ([`Graph::set_pheromone`]).
//!
//! Topology is frozen after loading; the only mutation during a search is
//! pheromone rewriting on existing edges. Per-node neighbor lists are
//! memoized in an explicit cache that structural mutation invalidates;
//! lookups fall back to a row scan while the cache is absent.

use std::fmt;
use std::fs;
use std::path::Path;

use bit_set::BitSet;

use crate::error::{Error, Result};
use crate::mmio;

/// Graph vertex identifier. Dense indices `0..dim`.
pub type Node = usize;

/// Sentinel stored in matrix cells that carry no edge.
///
/// Pheromone values are clamped to a positive range during a search, so
/// the sentinel can never collide with a live value.
pub const NO_EDGE: f64 = -1.0;

/// An unordered node pair with its current pheromone level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub node_a: Node,
    pub node_b: Node,
    pub pheromone: f64,
}

/// Undirected graph over integer-labeled nodes.
///
/// A node is *present* when at least one edge touches it; isolated matrix
/// indices are valid to query but never show up in [`Graph::nodes`].
#[derive(Clone)]
pub struct Graph {
    /// Matrix dimension (maximum node index + 1).
    dim: usize,
    /// Row-major `dim * dim` pheromone matrix, kept symmetric.
    structure: Vec<f64>,
    /// Nodes touched by at least one edge.
    present: BitSet,
    /// Number of unordered edges.
    edge_count: usize,
    /// Memoized neighbor lists; `None` after a structural mutation.
    adj_cache: Option<Vec<Vec<Node>>>,
}

impl Graph {
    /// Creates an edgeless graph with `dim` addressable node indices.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            structure: vec![NO_EDGE; dim * dim],
            present: BitSet::with_capacity(dim),
            edge_count: 0,
            adj_cache: None,
        }
    }

    /// Loads a graph from a coordinate-format matrix file.
    ///
    /// Mirrored and duplicate triples collapse to a single undirected
    /// edge; diagonal entries are skipped. Every edge starts with
    /// pheromone 0.0.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let matrix = mmio::parse(&content)?;
        Self::from_coordinates(&matrix)
    }

    /// Builds a graph from parsed coordinate entries.
    pub fn from_coordinates(matrix: &mmio::CoordinateMatrix) -> Result<Self> {
        let mut graph = Self::new(matrix.dim);
        for &(a, b) in &matrix.entries {
            if a == b {
                continue;
            }
            graph.add_edge(a, b)?;
        }
        graph.populate_cache();
        Ok(graph)
    }

    #[inline]
    fn idx(&self, a: Node, b: Node) -> usize {
        a * self.dim + b
    }

    fn check_node(&self, node: Node) -> Result<()> {
        if node < self.dim {
            Ok(())
        } else {
            Err(Error::NoSuchNode(node))
        }
    }

    /// Matrix dimension (one past the largest addressable node index).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of present nodes.
    pub fn node_count(&self) -> usize {
        self.present.len()
    }

    /// Number of unordered edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `node` is touched by at least one edge.
    pub fn contains(&self, node: Node) -> bool {
        node < self.dim && self.present.contains(node)
    }

    /// Present nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.present.iter()
    }

    /// Whether an edge exists between `a` and `b`. Symmetric, O(1).
    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        a < self.dim && b < self.dim && a != b && self.structure[self.idx(a, b)] != NO_EDGE
    }

    /// The edge between `a` and `b`, if any.
    pub fn edge(&self, a: Node, b: Node) -> Result<Option<Edge>> {
        self.check_node(a)?;
        self.check_node(b)?;
        Ok(self.pheromone(a, b).map(|pheromone| Edge {
            node_a: a,
            node_b: b,
            pheromone,
        }))
    }

    /// Current pheromone on the edge between `a` and `b`, if the edge exists.
    pub fn pheromone(&self, a: Node, b: Node) -> Option<f64> {
        if !self.has_edge(a, b) {
            return None;
        }
        Some(self.structure[self.idx(a, b)])
    }

    /// Adds an undirected edge with pheromone 0.0.
    ///
    /// Re-adding an existing edge is idempotent apart from resetting its
    /// pheromone.
    pub fn add_edge(&mut self, a: Node, b: Node) -> Result<()> {
        self.set_pheromone(a, b, 0.0)
    }

    /// Writes `value` on the edge between `a` and `b`, symmetrically.
    ///
    /// The edge is created when absent, which is how edges come into
    /// existence during loading. Structural creation invalidates the
    /// neighbor cache.
    pub fn set_pheromone(&mut self, a: Node, b: Node, value: f64) -> Result<()> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        let existed = self.structure[self.idx(a, b)] != NO_EDGE;
        let (ij, ji) = (self.idx(a, b), self.idx(b, a));
        self.structure[ij] = value;
        self.structure[ji] = value;
        match (existed, value != NO_EDGE) {
            (false, true) => {
                self.edge_count += 1;
                self.present.insert(a);
                self.present.insert(b);
                self.invalidate_cache();
            }
            (true, false) => {
                self.edge_count -= 1;
                self.invalidate_cache();
            }
            _ => {}
        }
        Ok(())
    }

    /// Nodes directly connected to `node`, ascending.
    pub fn neighbors(&self, node: Node) -> Result<Vec<Node>> {
        self.check_node(node)?;
        match &self.adj_cache {
            Some(cache) => Ok(cache[node].clone()),
            None => Ok(self.scan_row(node)),
        }
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: Node) -> Result<usize> {
        self.check_node(node)?;
        match &self.adj_cache {
            Some(cache) => Ok(cache[node].len()),
            None => Ok(self.scan_row(node).len()),
        }
    }

    /// Edges incident to `node`.
    pub fn incident_edges(&self, node: Node) -> Result<Vec<Edge>> {
        let neighbors = self.neighbors(node)?;
        Ok(neighbors
            .into_iter()
            .map(|other| Edge {
                node_a: node,
                node_b: other,
                pheromone: self.structure[self.idx(node, other)],
            })
            .collect())
    }

    /// Every edge once, with `node_a < node_b`.
    pub fn edges(&self) -> Vec<Edge> {
        let mut result = Vec::with_capacity(self.edge_count);
        for a in 0..self.dim {
            for b in (a + 1)..self.dim {
                let pheromone = self.structure[self.idx(a, b)];
                if pheromone != NO_EDGE {
                    result.push(Edge {
                        node_a: a,
                        node_b: b,
                        pheromone,
                    });
                }
            }
        }
        result
    }

    /// Builds the memoized neighbor lists.
    ///
    /// Topology never changes after loading, so this is normally a
    /// once-per-graph call; any later structural mutation clears it.
    pub fn populate_cache(&mut self) {
        let cache = (0..self.dim).map(|node| self.scan_row(node)).collect();
        self.adj_cache = Some(cache);
    }

    /// Drops the memoized neighbor lists.
    pub fn invalidate_cache(&mut self) {
        self.adj_cache = None;
    }

    fn scan_row(&self, node: Node) -> Vec<Node> {
        (0..self.dim)
            .filter(|&other| other != node && self.structure[self.idx(node, other)] != NO_EDGE)
            .collect()
    }

    /// Prints instance statistics to stdout.
    pub fn display_statistics(&self) {
        println!("\t{} \t nodes", self.node_count());
        println!("\t{} \t edges", self.edge_count());
        let degrees: Vec<usize> = self
            .nodes()
            .filter_map(|node| self.degree(node).ok())
            .collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{min} \t min degree");
            println!("\t{max} \t max degree");
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph({}, {})", self.node_count(), self.edge_count())
    }
}

/// Complete graph on `n` nodes, used as a fixture across test modules.
#[cfg(test)]
pub(crate) fn complete_graph(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for a in 0..n {
        for b in (a + 1)..n {
            graph.add_edge(a, b).unwrap();
        }
    }
    graph.populate_cache();
    graph
}
