pub mod traits;
pub mod keyed;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use keyed::KeyedGraph;
