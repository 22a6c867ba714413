//! A directed graph stored as an ordered node list and a square adjacency
//! matrix.
//!
//! Node `i` of the node list owns row `i` and column `i` of the matrix.  The
//! cell at `(i, j)` holds the edge from node `i` to node `j`, if there is one.
//! An occupied cell whose payload is `None` is an edge without a payload,
//! which is not the same as an empty cell.
//!
//! Each ordered pair of nodes has exactly one cell, so the graph holds at
//! most one edge per `(source, target)` pair.  Adding an edge with a
//! different payload replaces the edge already stored for that pair.  The
//! [`Graph`] methods that return the edges between two nodes therefore
//! return at most one edge for this implementation.
//!
//! Looking up a node by label scans the node list, and adding a node grows
//! every row of the matrix, so node insertion is `O(n)` and edge
//! operations are `O(n)` in the number of nodes.

mod display;

pub use display::MatrixView;

use crate::{
    adjacency_matrix::AdjacencyMatrix,
    edge::Edge,
    error::{GraphError, GraphResult},
    graph::{Color, Graph, GraphMut, Label},
    tracing_support::trace,
};

/// An entry in the node list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct NodeSlot<V> {
    label: V,
    color: Color,
}

/// An occupied cell of the adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatrixCell<V, E> {
    source: V,
    target: V,
    payload: Option<E>,
}

impl<V, E> MatrixCell<V, E> {
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn payload(&self) -> Option<&E> {
        self.payload.as_ref()
    }

    fn to_edge(&self) -> Edge<V, E>
    where
        V: Clone,
        E: Clone,
    {
        Edge::with_payload(
            self.source.clone(),
            self.target.clone(),
            self.payload.clone(),
            true,
        )
    }
}

/// A directed graph backed by an adjacency matrix.
///
/// Two graphs are equal if their node lists, including node colors, and
/// their matrices are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixGraph<V, E> {
    nodes: Vec<NodeSlot<V>>,
    matrix: AdjacencyMatrix<MatrixCell<V, E>>,
}

impl<V, E> Default for MatrixGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> MatrixGraph<V, E> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        MatrixGraph {
            nodes: Vec::new(),
            matrix: AdjacencyMatrix::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        MatrixGraph {
            nodes: Vec::with_capacity(capacity),
            matrix: AdjacencyMatrix::with_capacity(capacity),
        }
    }

    /// Returns a view that displays the adjacency matrix as a table.
    pub fn matrix_view(&self) -> MatrixView<'_, V, E> {
        MatrixView::new(self)
    }

    fn debug_check_invariants(&self) {
        #[cfg(not(feature = "unchecked"))]
        debug_assert!(
            self.matrix.size() == self.nodes.len() && self.matrix.is_square(),
            "adjacency matrix is out of step with the node list"
        );
    }
}

impl<V, E> MatrixGraph<V, E>
where
    V: Label,
    E: PartialEq + Clone,
{
    /// Creates a graph holding `nodes` and `edges`.  Duplicate nodes are
    /// ignored, and later edges replace earlier ones between the same pair of
    /// nodes.  Fails if an edge references a node missing from `nodes`.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V, E>>,
    ) -> GraphResult<Self> {
        let mut graph = Self::new();
        for label in nodes {
            graph.add_node(label);
        }
        for edge in edges {
            let (source, target, payload) = edge.into_parts();
            graph.add_edge(&source, &target, payload)?;
        }
        Ok(graph)
    }

    fn index_of(&self, label: &V) -> Option<usize> {
        self.nodes.iter().position(|slot| slot.label == *label)
    }

    fn require(&self, label: &V) -> GraphResult<usize> {
        self.index_of(label)
            .ok_or_else(|| GraphError::unknown_node(label))
    }

    fn require_pair(&self, source: &V, target: &V) -> GraphResult<(usize, usize)> {
        Ok((self.require(source)?, self.require(target)?))
    }
}

impl<V, E> Graph for MatrixGraph<V, E>
where
    V: Label,
    E: PartialEq + Clone,
{
    type Label = V;
    type Payload = E;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn nodes(&self) -> impl Iterator<Item = &V> + '_ {
        self.nodes.iter().map(|slot| &slot.label)
    }

    fn contains_node(&self, label: &V) -> bool {
        self.index_of(label).is_some()
    }

    fn node_index(&self, label: &V) -> GraphResult<usize> {
        self.require(label)
    }

    fn node_at_index(&self, index: usize) -> GraphResult<&V> {
        self.nodes
            .get(index)
            .map(|slot| &slot.label)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
    }

    fn color(&self, label: &V) -> GraphResult<Color> {
        let index = self.require(label)?;
        Ok(self.nodes[index].color)
    }

    fn degree(&self, label: &V) -> GraphResult<usize> {
        let index = self.require(label)?;
        Ok(self.matrix.entries_in_row(index).count() + self.matrix.entries_in_col(index).count())
    }

    fn neighbors(&self, _label: &V) -> GraphResult<Vec<V>> {
        Err(GraphError::Unsupported(
            "neighbors of a node in a directed graph; use successors or predecessors",
        ))
    }

    fn successors(&self, label: &V) -> GraphResult<Vec<V>> {
        let index = self.require(label)?;
        Ok(self
            .matrix
            .entries_in_row(index)
            .map(|(_, cell)| cell.target.clone())
            .collect())
    }

    fn predecessors(&self, label: &V) -> GraphResult<Vec<V>> {
        let index = self.require(label)?;
        Ok(self
            .matrix
            .entries_in_col(index)
            .map(|(_, cell)| cell.source.clone())
            .collect())
    }

    fn contains_edge(&self, source: &V, target: &V, payload: Option<&E>) -> GraphResult<bool> {
        let (row, col) = self.require_pair(source, target)?;
        Ok(self
            .matrix
            .get(row, col)
            .is_some_and(|cell| cell.payload.as_ref() == payload))
    }

    fn edges_between(&self, source: &V, target: &V) -> GraphResult<Vec<Edge<V, E>>> {
        let (row, col) = self.require_pair(source, target)?;
        Ok(self.matrix.get(row, col).map(MatrixCell::to_edge).into_iter().collect())
    }

    fn edges_of(&self, _label: &V) -> GraphResult<Vec<Edge<V, E>>> {
        Err(GraphError::Unsupported(
            "edges of a node in a directed graph; use outgoing_edges or ingoing_edges",
        ))
    }

    fn outgoing_edges(&self, label: &V) -> GraphResult<Vec<Edge<V, E>>> {
        let index = self.require(label)?;
        Ok(self
            .matrix
            .entries_in_row(index)
            .map(|(_, cell)| cell.to_edge())
            .collect())
    }

    fn ingoing_edges(&self, label: &V) -> GraphResult<Vec<Edge<V, E>>> {
        let index = self.require(label)?;
        Ok(self
            .matrix
            .entries_in_col(index)
            .map(|(_, cell)| cell.to_edge())
            .collect())
    }

    fn edges(&self) -> Vec<Edge<V, E>> {
        self.matrix.iter().map(|(_, _, cell)| cell.to_edge()).collect()
    }

    fn edge_count(&self) -> usize {
        self.matrix.len()
    }
}

impl<V, E> GraphMut for MatrixGraph<V, E>
where
    V: Label,
    E: PartialEq + Clone,
{
    fn add_node(&mut self, label: V) -> bool {
        if self.contains_node(&label) {
            trace!(?label, "node already present");
            return false;
        }
        trace!(?label, index = self.nodes.len(), "adding node");
        self.nodes.push(NodeSlot {
            label,
            color: Color::default(),
        });
        self.matrix.grow();
        self.debug_check_invariants();
        true
    }

    fn remove_node(&mut self, label: &V) -> GraphResult<bool> {
        let index = self
            .index_of(label)
            .ok_or_else(|| GraphError::no_such_node(label))?;
        self.nodes.remove(index);
        let dropped_edges = self.matrix.remove_row_and_column(index);
        trace!(?label, index, dropped_edges, "removed node");
        self.debug_check_invariants();
        Ok(true)
    }

    fn set_color(&mut self, label: &V, color: Color) -> GraphResult<()> {
        let index = self.require(label)?;
        self.nodes[index].color = color;
        Ok(())
    }

    fn add_edge(&mut self, source: &V, target: &V, payload: Option<E>) -> GraphResult<bool> {
        let (row, col) = self.require_pair(source, target)?;
        if self
            .matrix
            .get(row, col)
            .is_some_and(|cell| cell.payload == payload)
        {
            return Ok(false);
        }
        let cell = MatrixCell {
            source: source.clone(),
            target: target.clone(),
            payload,
        };
        if self.matrix.insert(row, col, cell).is_some() {
            trace!(?source, ?target, "replaced edge");
        } else {
            trace!(?source, ?target, "added edge");
        }
        Ok(true)
    }

    fn remove_edge(&mut self, source: &V, target: &V, payload: Option<&E>) -> GraphResult<bool> {
        let (row, col) = self.require_pair(source, target)?;
        if !self
            .matrix
            .get(row, col)
            .is_some_and(|cell| cell.payload.as_ref() == payload)
        {
            return Ok(false);
        }
        self.matrix.remove(row, col);
        trace!(?source, ?target, "removed edge");
        Ok(true)
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.matrix.clear();
    }
}
