//! Greedy randomized baseline ("reference" algorithm).
//!
//! Runs a configured number of independent agents sequentially. Each
//! agent seeds a clique with one random node and grows it to exhaustion,
//! picking every next node by degree-weighted random choice — a static
//! heuristic that ignores pheromone entirely. The reported result is the
//! best clique size over all agents.
//!
//! Serves as the control arm against which the ACO search is compared.

mod config;
mod runner;

pub use config::ReferenceConfig;
pub use runner::{ReferenceResult, ReferenceRunner};
