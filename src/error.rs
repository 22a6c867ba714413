use thiserror::Error;

/// Errors reported by graph operations.
///
/// Every variant describes a violated precondition of the caller.  Operations
/// validate their arguments before touching the graph, so a returned error
/// always means the graph is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node label given to an operation is not present in the graph.
    #[error("node {0} is not present in the graph")]
    UnknownNode(String),

    /// Removal was requested for a node that is not present in the graph.
    #[error("cannot remove node {0}: no such node")]
    NoSuchNode(String),

    /// A node index lookup outside `0..len`.
    #[error("node index {index} is out of range for a graph with {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation does not apply to this kind of graph.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Field-less classification of a [`GraphError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalArgument,
    NoSuchElement,
    OutOfRange,
    Unsupported,
}

impl GraphError {
    pub(crate) fn unknown_node(label: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownNode(format!("{label:?}"))
    }

    pub(crate) fn no_such_node(label: &impl std::fmt::Debug) -> Self {
        GraphError::NoSuchNode(format!("{label:?}"))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::UnknownNode(_) => ErrorKind::IllegalArgument,
            GraphError::NoSuchNode(_) => ErrorKind::NoSuchElement,
            GraphError::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            GraphError::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraphError::unknown_node(&"q").to_string(),
            "node \"q\" is not present in the graph"
        );
        assert_eq!(
            GraphError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "node index 3 is out of range for a graph with 2 nodes"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(GraphError::no_such_node(&1).kind(), ErrorKind::NoSuchElement);
        assert_eq!(
            GraphError::Unsupported("neighbors").kind(),
            ErrorKind::Unsupported
        );
    }
}
