use std::{fmt, hash::Hash};

use derivative::Derivative;

/// A connection between two node labels, optionally carrying a payload.
///
/// Two edges are equal only if their source, target, payload, and
/// directedness all match.  A payload of `None` is a legitimate value and is
/// distinct from the edge not existing at all.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone, E: Clone"),
    Debug(bound = "V: fmt::Debug, E: fmt::Debug"),
    Hash(bound = "V: Hash, E: Hash"),
    PartialEq(bound = "V: PartialEq, E: PartialEq"),
    Eq(bound = "V: Eq, E: Eq")
)]
pub struct Edge<V, E> {
    source: V,
    target: V,
    payload: Option<E>,
    directed: bool,
}

impl<V, E> Edge<V, E> {
    /// Creates an edge with an empty payload.
    pub fn new(source: V, target: V, directed: bool) -> Self {
        Self::with_payload(source, target, None, directed)
    }

    pub fn with_payload(source: V, target: V, payload: Option<E>, directed: bool) -> Self {
        Edge {
            source,
            target,
            payload,
            directed,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn payload(&self) -> Option<&E> {
        self.payload.as_ref()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Consumes the edge, returning `(source, target, payload)`.
    pub fn into_parts(self) -> (V, V, Option<E>) {
        (self.source, self.target, self.payload)
    }
}

impl<V: fmt::Display, E> fmt::Display for Edge<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "-->" } else { "---" };
        write!(f, "({}) {} ({})", self.source, arrow, self.target)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::with_payload("a", "b", Some(1.5), true);
        assert_eq!(*edge.source(), "a");
        assert_eq!(*edge.target(), "b");
        assert_eq!(edge.payload(), Some(&1.5));
        assert!(edge.is_directed());
    }

    #[test]
    fn test_edge_equality_covers_all_fields() {
        let edge: Edge<&str, u8> = Edge::with_payload("a", "b", Some(1), true);
        assert_eq!(edge, Edge::with_payload("a", "b", Some(1), true));
        assert_ne!(edge, Edge::with_payload("b", "a", Some(1), true));
        assert_ne!(edge, Edge::with_payload("a", "b", Some(2), true));
        assert_ne!(edge, Edge::with_payload("a", "b", Some(1), false));
        assert_ne!(edge, Edge::new("a", "b", true));
    }

    #[test]
    fn test_empty_payload_is_a_value() {
        let edges: HashSet<Edge<&str, u8>> = [
            Edge::new("a", "b", true),
            Edge::new("a", "b", true),
            Edge::with_payload("a", "b", Some(0), true),
        ]
        .into_iter()
        .collect();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_edge_display() {
        let edge: Edge<&str, ()> = Edge::new("x", "y", true);
        assert_eq!(edge.to_string(), "(x) --> (y)");
        let edge: Edge<&str, ()> = Edge::new("x", "y", false);
        assert_eq!(edge.to_string(), "(x) --- (y)");
    }
}
