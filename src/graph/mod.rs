//! `Graph` and `GraphMut` are the core traits for working with graphs in this
//! library. `Graph` provides read-only access to the graph structure, while
//! `GraphMut` extends `Graph` with methods for modifying it.
//!
//! Nodes are identified by their labels.  A label is any value that can be
//! compared, hashed, cloned and debug-printed; a graph holds each label at
//! most once.  Each node also has a position in the graph, its *index*, in
//! the range `0..len()`.  Indices are only meaningful until the next
//! mutation: removing a node shifts every later node down by one.
//!
//! Query methods that conceptually return a set return a `Vec` without
//! duplicates, ordered by node index.  Traversals that depend on iteration
//! order are therefore reproducible for a given sequence of mutations.
//!
//! Node labels are never mutated through these traits.  Labels that need to
//! carry mutable state (see [`crate::dfs_node::DfsNode`]) use interior
//! mutability and must keep that state out of their `Eq` and `Hash`
//! implementations.

use std::{fmt::Debug, hash::Hash};

use crate::{edge::Edge, error::GraphResult};

/// A type usable as a node label.
pub trait Label: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Label for T {}

/// Scratch state used by traversals.
///
/// Nodes start out `White` and are only given other colors by traversals or
/// explicit calls to [`GraphMut::set_color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered and on the active traversal path.
    Grey,
    /// Fully explored.
    Black,
}

/// Read access to a graph.
pub trait Graph {
    type Label: Label;
    type Payload: PartialEq + Clone;

    /// Returns the number of nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_directed(&self) -> bool;

    /// Iterates over all node labels in index order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Label> + '_;

    fn contains_node(&self, label: &Self::Label) -> bool;

    /// Gets the current index of a node.  Fails with
    /// [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode) if the node is absent.
    fn node_index(&self, label: &Self::Label) -> GraphResult<usize>;

    /// Gets the node at an index.  Fails with
    /// [`GraphError::IndexOutOfRange`](crate::error::GraphError::IndexOutOfRange) unless `index < len()`.
    fn node_at_index(&self, index: usize) -> GraphResult<&Self::Label>;

    fn color(&self, label: &Self::Label) -> GraphResult<Color>;

    /// Gets the degree of a node.  For directed graphs this is the in-degree
    /// plus the out-degree, so a self-loop counts twice.
    fn degree(&self, label: &Self::Label) -> GraphResult<usize>;

    /// Gets the nodes sharing an edge with `label`.  Only defined for
    /// undirected graphs.
    fn neighbors(&self, label: &Self::Label) -> GraphResult<Vec<Self::Label>>;

    /// Gets the targets of edges leaving `label`.  Only defined for directed
    /// graphs.
    fn successors(&self, label: &Self::Label) -> GraphResult<Vec<Self::Label>>;

    /// Gets the sources of edges entering `label`.  Only defined for directed
    /// graphs.
    fn predecessors(&self, label: &Self::Label) -> GraphResult<Vec<Self::Label>>;

    /// Gets the nodes a traversal can step to from `label`: successors in a
    /// directed graph, neighbors otherwise.
    fn adjacent(&self, label: &Self::Label) -> GraphResult<Vec<Self::Label>> {
        if self.is_directed() {
            self.successors(label)
        } else {
            self.neighbors(label)
        }
    }

    /// Checks for an edge from `source` to `target` carrying exactly
    /// `payload`.
    fn contains_edge(
        &self,
        source: &Self::Label,
        target: &Self::Label,
        payload: Option<&Self::Payload>,
    ) -> GraphResult<bool>;

    /// Gets the edges from `source` to `target`.
    fn edges_between(
        &self,
        source: &Self::Label,
        target: &Self::Label,
    ) -> GraphResult<Vec<Edge<Self::Label, Self::Payload>>>;

    /// Gets every edge touching `label`.  Only defined for undirected graphs.
    fn edges_of(
        &self,
        label: &Self::Label,
    ) -> GraphResult<Vec<Edge<Self::Label, Self::Payload>>>;

    /// Gets the edges leaving `label`.  Only defined for directed graphs.
    fn outgoing_edges(
        &self,
        label: &Self::Label,
    ) -> GraphResult<Vec<Edge<Self::Label, Self::Payload>>>;

    /// Gets the edges entering `label`.  Only defined for directed graphs.
    fn ingoing_edges(
        &self,
        label: &Self::Label,
    ) -> GraphResult<Vec<Edge<Self::Label, Self::Payload>>>;

    /// Gets every edge in the graph.
    fn edges(&self) -> Vec<Edge<Self::Label, Self::Payload>>;

    fn edge_count(&self) -> usize;
}

/// Mutating access to a graph.
pub trait GraphMut: Graph {
    /// Inserts a node.  Returns `false`, leaving the graph unchanged, if the
    /// label is already present.
    fn add_node(&mut self, label: Self::Label) -> bool;

    /// Removes a node together with every edge touching it.  Fails with
    /// [`GraphError::NoSuchNode`](crate::error::GraphError::NoSuchNode) if the node is absent.
    fn remove_node(&mut self, label: &Self::Label) -> GraphResult<bool>;

    fn set_color(&mut self, label: &Self::Label, color: Color) -> GraphResult<()>;

    /// Adds an edge between two existing nodes.  Returns `false` if an edge
    /// with exactly this payload is already present.
    fn add_edge(
        &mut self,
        source: &Self::Label,
        target: &Self::Label,
        payload: Option<Self::Payload>,
    ) -> GraphResult<bool>;

    /// Removes the edge from `source` to `target` carrying exactly `payload`.
    /// Returns `false` if there is no such edge.
    fn remove_edge(
        &mut self,
        source: &Self::Label,
        target: &Self::Label,
        payload: Option<&Self::Payload>,
    ) -> GraphResult<bool>;

    /// Removes every node and edge.
    fn clear(&mut self);
}
