pub mod traits;
pub mod directed;
pub mod generators;
pub mod parse;

pub use traits::{Edge, Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use parse::parse_graph;
