//! Heuristic maximum-clique search.
//!
//! Two competing heuristics over one shared graph representation:
//!
//! - **Reference**: a greedy randomized baseline — independent agents
//!   grow cliques by degree-weighted random choice and the best size
//!   wins.
//! - **ACO**: an Ant Colony Optimization metaheuristic that learns
//!   per-edge desirability (pheromone) across iterations through
//!   evaporation and iteration-best reinforcement.
//!
//! # Architecture
//!
//! The [`graph::Graph`] owns a dense symmetric pheromone matrix;
//! [`clique::Clique`] builds complete subgraphs over a borrowed graph;
//! [`agent::Agent`] performs one constructive walk under a pluggable
//! selection policy. The algorithm families live in [`reference`] and
//! [`aco`], each with a validated config and a runner, and are dispatched
//! through the closed [`strategy::Algorithm`] enum. Every run flattens
//! into a [`result::ExecutionResult`] — one comma-separated line of
//! numeric values appended to the caller's sink.
//!
//! # Example
//!
//! ```
//! use maxclique::aco::AcoConfig;
//! use maxclique::graph::Graph;
//! use maxclique::strategy::Algorithm;
//!
//! let mut graph = Graph::new(3);
//! for (a, b) in [(0, 1), (1, 2), (0, 2)] {
//!     graph.add_edge(a, b).unwrap();
//! }
//! graph.populate_cache();
//!
//! let config = AcoConfig::default().with_iterations(5).with_ants(3).with_seed(42);
//! let record = Algorithm::AntColony(config).run(&mut graph).unwrap();
//! assert_eq!(record.get("best_clique_size"), Some(maxclique::result::Value::Int(3)));
//! ```

pub mod aco;
pub mod agent;
pub mod clique;
pub mod error;
pub mod graph;
pub mod mmio;
pub mod reference;
pub mod result;
pub mod selection;
pub mod strategy;

pub use error::{Error, Result};
