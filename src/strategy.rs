//! Closed-enum dispatch between the clique-search algorithms.
//!
//! Callers select a heuristic with a tag rather than through open-ended
//! trait objects: every algorithm exposes the same
//! `run(graph) -> ExecutionResult` surface and new heuristics become new
//! variants.

use crate::aco::{AcoConfig, AcoRunner};
use crate::error::Result;
use crate::graph::Graph;
use crate::reference::{ReferenceConfig, ReferenceRunner};
use crate::result::ExecutionResult;

/// A clique-search strategy plus its run parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Greedy randomized baseline.
    Reference(ReferenceConfig),
    /// Ant Colony Optimization.
    AntColony(AcoConfig),
}

impl Algorithm {
    /// Runs the selected algorithm against `graph` and flattens the
    /// outcome into its record form.
    ///
    /// Only the ACO variant mutates the graph (pheromone writes); the
    /// reference variant reads topology alone.
    pub fn run(&self, graph: &mut Graph) -> Result<ExecutionResult> {
        match self {
            Algorithm::Reference(config) => {
                Ok(ReferenceRunner::run(graph, config)?.to_execution_result())
            }
            Algorithm::AntColony(config) => {
                Ok(AcoRunner::run(graph, config)?.to_execution_result())
            }
        }
    }
}
