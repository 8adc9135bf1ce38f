//! ACO execution loop.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::{AcoConfig, PHEROMONE_MAX, PHEROMONE_MIN};
use crate::agent::{Agent, SelectionPolicy};
use crate::error::{Error, Result};
use crate::graph::{Graph, Node};
use crate::result::{ExecutionResult, Value};

/// Node and edge sets of one finished ant clique.
type AntClique = (Vec<Node>, Vec<(Node, Node)>);

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Ant population size per iteration.
    pub ants: usize,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Selection sharpness used.
    pub alpha: f64,

    /// Evaporation retention factor used.
    pub rho: f64,

    /// Size of the best clique found across all iterations.
    pub best_clique_size: usize,

    /// Members of the best clique found.
    pub best_clique: Vec<Node>,

    /// Runtime-best size after each iteration.
    pub size_history: Vec<usize>,

    /// Wall-clock run time in seconds.
    pub execution_time: f64,
}

impl AcoResult {
    /// Flattens the result into the documented record order:
    /// `ants, iterations, alpha, rho, best_clique_size, execution_time`.
    pub fn to_execution_result(&self) -> ExecutionResult {
        ExecutionResult::new()
            .with_field("ants", Value::Int(self.ants as u64))
            .with_field("iterations", Value::Int(self.iterations as u64))
            .with_field("alpha", Value::Float(self.alpha))
            .with_field("rho", Value::Float(self.rho))
            .with_field("best_clique_size", Value::Int(self.best_clique_size as u64))
            .with_field("execution_time", Value::Float(self.execution_time))
    }
}

/// Executes the ACO search.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony against `graph`, mutating its pheromone matrix.
    ///
    /// Pheromone is read-only while the ants of one iteration construct
    /// their cliques; evaporation and reinforcement are applied as a
    /// single serialized step once the whole population has finished.
    pub fn run(graph: &mut Graph, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        if graph.node_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        let start = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        Self::initialize_pheromone(graph)?;

        let mut runtime_best: Vec<Node> = Vec::new();
        let mut size_history = Vec::with_capacity(config.iterations);

        for _ in 0..config.iterations {
            // One seed per ant, drawn up front so the serial and parallel
            // construction paths walk identical cliques.
            let seeds: Vec<u64> = (0..config.ants).map(|_| rng.random()).collect();
            let cliques = Self::construct(graph, config, &seeds)?;

            let mut best_index = 0;
            for (index, (nodes, _)) in cliques.iter().enumerate() {
                if nodes.len() > cliques[best_index].0.len() {
                    best_index = index;
                }
            }
            let (iter_nodes, iter_edges) = &cliques[best_index];

            if iter_nodes.len() > runtime_best.len() {
                runtime_best = iter_nodes.clone();
            }

            Self::evaporate_pheromone(graph, config.rho)?;
            // delta = 1 when the iteration matches the record, shrinking
            // as it falls behind; denominator is always >= 1.
            let delta = 1.0 / (1 + runtime_best.len() - iter_nodes.len()) as f64;
            Self::lay_pheromone(graph, iter_edges, delta)?;

            size_history.push(runtime_best.len());
        }

        Ok(AcoResult {
            ants: config.ants,
            iterations: config.iterations,
            alpha: config.alpha,
            rho: config.rho,
            best_clique_size: runtime_best.len(),
            best_clique: runtime_best,
            size_history,
            execution_time: start.elapsed().as_secs_f64(),
        })
    }

    /// Runs the full ant population of one iteration.
    fn construct(graph: &Graph, config: &AcoConfig, seeds: &[u64]) -> Result<Vec<AntClique>> {
        #[cfg(feature = "parallel")]
        if config.parallel {
            return seeds
                .par_iter()
                .map(|&seed| Self::construct_one(graph, config.alpha, seed))
                .collect();
        }
        seeds
            .iter()
            .map(|&seed| Self::construct_one(graph, config.alpha, seed))
            .collect()
    }

    /// One pheromone-weighted walk to exhaustion.
    fn construct_one(graph: &Graph, alpha: f64, seed: u64) -> Result<AntClique> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut agent = Agent::new(graph, &mut rng)?;
        agent.walk(SelectionPolicy::PheromoneWeighted { alpha }, &mut rng)?;
        let clique = agent.into_clique();
        Ok((clique.nodes().to_vec(), clique.edges().to_vec()))
    }

    /// Sets every edge to `PHEROMONE_MAX`.
    fn initialize_pheromone(graph: &mut Graph) -> Result<()> {
        for edge in graph.edges() {
            graph.set_pheromone(edge.node_a, edge.node_b, PHEROMONE_MAX)?;
        }
        Ok(())
    }

    /// Multiplies every edge by `rho`, clamped from below.
    fn evaporate_pheromone(graph: &mut Graph, rho: f64) -> Result<()> {
        for edge in graph.edges() {
            let value = (edge.pheromone * rho).max(PHEROMONE_MIN);
            graph.set_pheromone(edge.node_a, edge.node_b, value)?;
        }
        Ok(())
    }

    /// Deposits `delta` on the iteration-best edges, clamped from above.
    fn lay_pheromone(graph: &mut Graph, edges: &[(Node, Node)], delta: f64) -> Result<()> {
        for &(a, b) in edges {
            if let Some(pheromone) = graph.pheromone(a, b) {
                graph.set_pheromone(a, b, (pheromone + delta).min(PHEROMONE_MAX))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::complete_graph;

    fn bridged_triangles() -> Graph {
        let mut graph = Graph::new(8);
        for (a, b) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
            graph.add_edge(a, b).unwrap();
        }
        graph.populate_cache();
        graph
    }

    #[test]
    fn test_single_ant_single_iteration_on_k5() {
        let mut graph = complete_graph(5);
        let config = AcoConfig::default()
            .with_iterations(1)
            .with_ants(1)
            .with_alpha(1.0)
            .with_rho(1.0)
            .with_seed(3);
        let result = AcoRunner::run(&mut graph, &config).unwrap();
        assert_eq!(result.best_clique_size, 5);
        // rho = 1 leaves no evaporation headroom and reinforcement caps
        // at the ceiling, so every edge stays at PHEROMONE_MAX.
        for edge in graph.edges() {
            assert!((edge.pheromone - PHEROMONE_MAX).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pheromone_stays_within_bounds() {
        let mut graph = bridged_triangles();
        let config = AcoConfig::default()
            .with_iterations(40)
            .with_ants(4)
            .with_alpha(2.0)
            .with_rho(0.5)
            .with_seed(21);
        AcoRunner::run(&mut graph, &config).unwrap();
        for edge in graph.edges() {
            assert!(
                (PHEROMONE_MIN..=PHEROMONE_MAX).contains(&edge.pheromone),
                "pheromone {} out of bounds",
                edge.pheromone
            );
        }
    }

    #[test]
    fn test_runtime_best_is_monotone() {
        let mut graph = bridged_triangles();
        let config = AcoConfig::default()
            .with_iterations(15)
            .with_ants(3)
            .with_seed(8);
        let result = AcoRunner::run(&mut graph, &config).unwrap();
        assert_eq!(result.size_history.len(), 15);
        assert!(result.size_history.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*result.size_history.last().unwrap(), result.best_clique_size);
    }

    #[test]
    fn test_evaporation_decays_unreinforced_edges() {
        let mut graph = bridged_triangles();
        let config = AcoConfig::default()
            .with_iterations(1)
            .with_ants(1)
            .with_rho(0.5)
            .with_seed(2);
        let result = AcoRunner::run(&mut graph, &config).unwrap();
        let best: std::collections::HashSet<Node> =
            result.best_clique.iter().copied().collect();
        for edge in graph.edges() {
            if !(best.contains(&edge.node_a) && best.contains(&edge.node_b)) {
                // Evaporated once from PHEROMONE_MAX, never reinforced.
                assert!((edge.pheromone - PHEROMONE_MAX * 0.5).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let config = AcoConfig::default()
            .with_iterations(10)
            .with_ants(5)
            .with_seed(99);
        let mut graph_a = bridged_triangles();
        let mut graph_b = bridged_triangles();
        let a = AcoRunner::run(&mut graph_a, &config).unwrap();
        let b = AcoRunner::run(&mut graph_b, &config).unwrap();
        assert_eq!(a.best_clique, b.best_clique);
        assert_eq!(a.size_history, b.size_history);
    }

    #[test]
    fn test_zero_ants_fails_fast() {
        let mut graph = complete_graph(3);
        let config = AcoConfig::default().with_ants(0);
        assert!(matches!(
            AcoRunner::run(&mut graph, &config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_empty_graph_fails_fast() {
        let mut graph = Graph::new(5);
        let config = AcoConfig::default().with_seed(1);
        assert!(matches!(
            AcoRunner::run(&mut graph, &config),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_record_field_order() {
        let mut graph = complete_graph(4);
        let config = AcoConfig::default()
            .with_iterations(2)
            .with_ants(2)
            .with_seed(7);
        let record = AcoRunner::run(&mut graph, &config)
            .unwrap()
            .to_execution_result();
        assert_eq!(
            record.names(),
            vec![
                "ants",
                "iterations",
                "alpha",
                "rho",
                "best_clique_size",
                "execution_time"
            ]
        );
        assert_eq!(record.get("best_clique_size"), Some(Value::Int(4)));
    }
}
