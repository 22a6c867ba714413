pub mod adjacency_matrix;
pub mod dfs_node;
pub mod edge;
pub mod error;
pub mod graph;
pub mod matrix_graph;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod weight;

mod graph_test_support;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphMut};
pub use matrix_graph::MatrixGraph;
