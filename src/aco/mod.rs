//! Ant Colony Optimization (ACO) for maximum clique.
//!
//! Each iteration spawns a population of ants; every ant builds a clique
//! with candidate probabilities proportional to accumulated edge
//! pheromone raised to `alpha`. After construction the pheromone matrix
//! evaporates globally and the iteration's best clique reinforces its own
//! edges, with a deposit that grows as the iteration closes in on the
//! best clique ever seen. All pheromone values stay inside
//! [`PHEROMONE_MIN`]..=[`PHEROMONE_MAX`].
//!
//! # References
//!
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"
//! - Fenet & Solnon (2003), "Searching for Maximum Cliques with Ant
//!   Colony Optimization"

mod config;
mod runner;

pub use config::{AcoConfig, PHEROMONE_MAX, PHEROMONE_MIN};
pub use runner::{AcoResult, AcoRunner};
