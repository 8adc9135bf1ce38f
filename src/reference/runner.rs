//! Reference algorithm execution loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::ReferenceConfig;
use crate::agent::{Agent, SelectionPolicy};
use crate::error::{Error, Result};
use crate::graph::{Graph, Node};
use crate::result::{ExecutionResult, Value};

/// Result of a reference run.
#[derive(Debug, Clone)]
pub struct ReferenceResult {
    /// Number of agents run.
    pub agents: usize,

    /// Size of the best clique found.
    pub best_clique_size: usize,

    /// Members of the best clique found.
    pub best_clique: Vec<Node>,

    /// Running best size after each completed agent.
    pub size_history: Vec<usize>,

    /// Wall-clock run time in seconds.
    pub execution_time: f64,
}

impl ReferenceResult {
    /// Flattens the result into the documented record order:
    /// `agents, best_clique_size, execution_time`.
    pub fn to_execution_result(&self) -> ExecutionResult {
        ExecutionResult::new()
            .with_field("agents", Value::Int(self.agents as u64))
            .with_field("best_clique_size", Value::Int(self.best_clique_size as u64))
            .with_field("execution_time", Value::Float(self.execution_time))
    }
}

/// Executes the greedy randomized baseline.
pub struct ReferenceRunner;

impl ReferenceRunner {
    /// Runs `config.agents` degree-weighted walks and reports the best.
    pub fn run(graph: &Graph, config: &ReferenceConfig) -> Result<ReferenceResult> {
        config.validate()?;
        if graph.node_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        let start = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best_clique: Vec<Node> = Vec::new();
        let mut size_history = Vec::with_capacity(config.agents);

        for _ in 0..config.agents {
            let mut agent = Agent::new(graph, &mut rng)?;
            agent.walk(SelectionPolicy::DegreeWeighted, &mut rng)?;
            let clique = agent.into_clique();
            if clique.len() > best_clique.len() {
                best_clique = clique.nodes().to_vec();
            }
            size_history.push(best_clique.len());
        }

        Ok(ReferenceResult {
            agents: config.agents,
            best_clique_size: best_clique.len(),
            best_clique,
            size_history,
            execution_time: start.elapsed().as_secs_f64(),
        })
    }
}
