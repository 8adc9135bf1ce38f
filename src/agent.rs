//! One stochastic clique-construction walk.
//!
//! An [`Agent`] wraps a [`Clique`] seeded with a random node and grows it
//! to exhaustion, choosing each next node through a pluggable
//! [`SelectionPolicy`]. Candidates come pre-validated from
//! [`Clique::candidates`], so the walk inserts unchecked.

use rand::Rng;

use crate::clique::Clique;
use crate::error::{Error, Result};
use crate::graph::{Graph, Node};
use crate::selection::weighted_choice;

/// How a walk weighs its candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// Weight proportional to the candidate's incident-edge count in the
    /// full graph. Static, pheromone-independent (the reference baseline).
    DegreeWeighted,

    /// Weight proportional to `pheromone_factor(candidate) ^ alpha`.
    ///
    /// `alpha > 1` sharpens the bias toward high-pheromone candidates,
    /// `alpha < 1` flattens it. A candidate with factor 0 is never chosen
    /// unless every candidate has factor 0, in which case the choice is
    /// uniform.
    PheromoneWeighted {
        /// Selection sharpness, must be positive.
        alpha: f64,
    },
}

impl SelectionPolicy {
    /// Computes one non-negative weight per candidate.
    pub fn weights(&self, clique: &Clique<'_>, candidates: &[Node]) -> Result<Vec<f64>> {
        match self {
            SelectionPolicy::DegreeWeighted => candidates
                .iter()
                .map(|&candidate| clique.graph().degree(candidate).map(|d| d as f64))
                .collect(),
            SelectionPolicy::PheromoneWeighted { alpha } => Ok(candidates
                .iter()
                .map(|&candidate| clique.pheromone_factor(candidate).powf(*alpha))
                .collect()),
        }
    }
}

/// A single constructive walk over one clique.
#[derive(Debug)]
pub struct Agent<'g> {
    clique: Clique<'g>,
    finished: bool,
}

impl<'g> Agent<'g> {
    /// Creates an agent whose clique is seeded with one uniformly random
    /// present node.
    pub fn new<R: Rng>(graph: &'g Graph, rng: &mut R) -> Result<Self> {
        let count = graph.node_count();
        if count == 0 {
            return Err(Error::EmptyGraph);
        }
        let pick = rng.random_range(0..count);
        let seed = graph.nodes().nth(pick).ok_or(Error::EmptyGraph)?;
        let mut clique = Clique::new(graph);
        clique.add_node_unchecked(seed);
        Ok(Self {
            clique,
            finished: false,
        })
    }

    /// The clique built so far.
    pub fn clique(&self) -> &Clique<'g> {
        &self.clique
    }

    /// Consumes the agent, yielding its clique.
    pub fn into_clique(self) -> Clique<'g> {
        self.clique
    }

    /// Whether the walk has consumed every candidate.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Grows the clique until no candidate remains.
    pub fn walk<R: Rng>(&mut self, policy: SelectionPolicy, rng: &mut R) -> Result<()> {
        while !self.finished {
            let candidates = self.clique.candidates();
            if candidates.is_empty() {
                self.finished = true;
                break;
            }
            let weights = policy.weights(&self.clique, &candidates)?;
            let index = weighted_choice(&weights, rng);
            self.clique.add_node_unchecked(candidates[index]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::complete_graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_agent_seeds_with_one_node() {
        let graph = complete_graph(5);
        let mut rng = StdRng::seed_from_u64(7);
        let agent = Agent::new(&graph, &mut rng).unwrap();
        assert_eq!(agent.clique().len(), 1);
        assert!(!agent.is_finished());
    }

    #[test]
    fn test_empty_graph_cannot_seed() {
        let graph = Graph::new(0);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(Agent::new(&graph, &mut rng), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_walk_on_k5_reaches_full_clique() {
        let graph = complete_graph(5);
        let mut rng = StdRng::seed_from_u64(11);
        let mut agent = Agent::new(&graph, &mut rng).unwrap();
        agent.walk(SelectionPolicy::DegreeWeighted, &mut rng).unwrap();
        assert!(agent.is_finished());
        assert_eq!(agent.clique().len(), 5);
        assert_eq!(agent.clique().edges().len(), 10);
    }

    #[test]
    fn test_pheromone_walk_with_zero_pheromone_still_finishes() {
        // Fresh graphs carry pheromone 0.0 everywhere, so every weight is
        // zero and the walk must fall back to uniform choice.
        let graph = complete_graph(4);
        let mut rng = StdRng::seed_from_u64(13);
        let mut agent = Agent::new(&graph, &mut rng).unwrap();
        agent
            .walk(SelectionPolicy::PheromoneWeighted { alpha: 2.0 }, &mut rng)
            .unwrap();
        assert_eq!(agent.clique().len(), 4);
    }

    #[test]
    fn test_degree_weights() {
        // Path 0-1-2: from node 1 every other node is a candidate of the
        // empty clique; degrees are 1, 2, 1.
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.populate_cache();
        let clique = Clique::new(&graph);
        let weights = SelectionPolicy::DegreeWeighted
            .weights(&clique, &[0, 1, 2])
            .unwrap();
        assert_eq!(weights, vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_pheromone_weights_apply_alpha() {
        let mut graph = complete_graph(3);
        graph.set_pheromone(0, 2, 3.0).unwrap();
        let mut clique = Clique::new(&graph);
        clique.add_node(0).unwrap();
        let weights = SelectionPolicy::PheromoneWeighted { alpha: 2.0 }
            .weights(&clique, &[1, 2])
            .unwrap();
        assert_eq!(weights, vec![0.0, 9.0]);
    }
}
