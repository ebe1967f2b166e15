pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod path;
pub mod batch;
pub mod arbitrage;

pub use traits::{Distance, ShortestPathAlgorithm, ShortestPathResult};
