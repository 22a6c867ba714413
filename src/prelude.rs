pub use crate::dfs_node::{DfsNode, DfsVertex};
pub use crate::edge::Edge;
pub use crate::error::{ErrorKind, GraphError, GraphResult};
pub use crate::graph::{Color, Graph, GraphMut, Label};
pub use crate::matrix_graph::MatrixGraph;
pub use crate::search::{DfsForest, depth_first_search, depth_first_search_annotated};
pub use crate::weight::{Weight, Weighted};
