//! Depth-first search over any [`GraphMut`].
//!
//! A search colors every node `White`, then visits the nodes in
//! [`Graph::nodes`] order, starting a new tree from each node that is still
//! `White`.  Visiting a node colors it `Grey` and stamps its discovery time,
//! then visits each `White` node returned by [`Graph::adjacent`], and finally
//! colors it `Black` and stamps its finish time.  Times come from a clock
//! that starts at zero and is incremented before every stamp, so a run over
//! `n` nodes uses the times `1..=2n`.
//!
//! Visits use an explicit stack rather than recursion, so the depth of the
//! graph is not limited by the call stack.

use std::{collections::HashMap, vec};

use crate::{
    dfs_node::DfsNode,
    error::{GraphError, GraphResult},
    graph::{Color, Graph, GraphMut, Label},
    tracing_support::{info_span, trace},
};

/// Discovery and finish times of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Timestamps {
    pub discovery: u32,
    pub finish: u32,
}

#[derive(Clone, Debug, Default)]
struct Record {
    discovery: u32,
    finish: u32,
    parent: Option<usize>,
}

/// The result of a depth-first search: timestamps and parents of every node,
/// which together describe a forest of search trees.
#[derive(Clone, Debug)]
pub struct DfsForest<V> {
    labels: Vec<V>,
    positions: HashMap<V, usize>,
    records: Vec<Record>,
    back_edges: Vec<(usize, usize)>,
}

impl<V: Label> DfsForest<V> {
    fn with_labels(labels: Vec<V>) -> Self {
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        let records = vec![Record::default(); labels.len()];
        DfsForest {
            labels,
            positions,
            records,
            back_edges: Vec::new(),
        }
    }

    fn position(&self, label: &V) -> GraphResult<usize> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::unknown_node(label))
    }

    fn record(&self, label: &V) -> Option<&Record> {
        self.positions.get(label).map(|&i| &self.records[i])
    }

    /// Returns the number of nodes covered by the search.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn timestamps(&self, label: &V) -> Option<Timestamps> {
        self.record(label).map(|record| Timestamps {
            discovery: record.discovery,
            finish: record.finish,
        })
    }

    pub fn discovery(&self, label: &V) -> Option<u32> {
        self.record(label).map(|record| record.discovery)
    }

    pub fn finish(&self, label: &V) -> Option<u32> {
        self.record(label).map(|record| record.finish)
    }

    /// Gets the node from which `label` was discovered.  Returns `None` for
    /// tree roots and for nodes not covered by the search.
    pub fn parent(&self, label: &V) -> Option<&V> {
        self.record(label)?
            .parent
            .map(|parent| &self.labels[parent])
    }

    /// Iterates over the roots of the search trees, in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = &V> + '_ {
        self.labels
            .iter()
            .zip(&self.records)
            .filter(|(_, record)| record.parent.is_none())
            .map(|(label, _)| label)
    }

    /// Gets the tree path from `label` up to the root of its tree, starting
    /// with `label` itself.  Empty if `label` was not covered by the search.
    pub fn path_to_root(&self, label: &V) -> Vec<&V> {
        let mut path = Vec::new();
        let mut current = self.positions.get(label).copied();
        while let Some(i) = current {
            path.push(&self.labels[i]);
            current = self.records[i].parent;
        }
        path
    }

    /// Returns `true` if `ancestor` is a proper ancestor of `descendant` in
    /// the same search tree.
    pub fn is_ancestor(&self, ancestor: &V, descendant: &V) -> bool {
        self.path_to_root(descendant)
            .into_iter()
            .skip(1)
            .any(|label| label == ancestor)
    }

    /// Iterates over the edges that led from a node to one of its `Grey`
    /// ancestors (or to itself) during the search.
    pub fn back_edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.back_edges
            .iter()
            .map(|&(source, target)| (&self.labels[source], &self.labels[target]))
    }

    /// Returns `true` if the search found a cycle.
    pub fn has_cycle(&self) -> bool {
        !self.back_edges.is_empty()
    }

    /// Iterates over every node with its timestamps, in graph order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Timestamps)> + '_ {
        self.labels.iter().zip(&self.records).map(|(label, record)| {
            (
                label,
                Timestamps {
                    discovery: record.discovery,
                    finish: record.finish,
                },
            )
        })
    }
}

/// Hooks through which a search reports its progress to the node labels.
trait Annotate<V> {
    fn reset(&self, _node: &V) {}

    fn discover(&self, _node: &V, _time: u32, _parent: Option<&V>) {}

    fn finish(&self, _node: &V, _time: u32) {}
}

struct Unannotated;

impl<V> Annotate<V> for Unannotated {}

struct Annotated;

impl<V: DfsNode> Annotate<V> for Annotated {
    fn reset(&self, node: &V) {
        node.set_parent(None);
    }

    fn discover(&self, node: &V, time: u32, parent: Option<&V>) {
        node.set_parent(parent);
        node.set_discovery_time(time);
    }

    fn finish(&self, node: &V, time: u32) {
        node.set_finish_time(time);
    }
}

struct Frame<V> {
    node: usize,
    pending: vec::IntoIter<V>,
}

struct Search<'g, G: GraphMut, A> {
    graph: &'g mut G,
    annotate: A,
    clock: u32,
    forest: DfsForest<G::Label>,
}

impl<'g, G, A> Search<'g, G, A>
where
    G: GraphMut,
    A: Annotate<G::Label>,
{
    fn new(graph: &'g mut G, annotate: A) -> Self {
        let labels = graph.nodes().cloned().collect();
        Search {
            graph,
            annotate,
            clock: 0,
            forest: DfsForest::with_labels(labels),
        }
    }

    fn run(mut self) -> GraphResult<DfsForest<G::Label>> {
        let _span = info_span!("depth_first_search", nodes = self.forest.len()).entered();
        for label in &self.forest.labels {
            self.graph.set_color(label, Color::White)?;
            self.annotate.reset(label);
        }
        for position in 0..self.forest.len() {
            if self.graph.color(&self.forest.labels[position])? == Color::White {
                self.visit(position)?;
            }
        }
        Ok(self.forest)
    }

    fn visit(&mut self, root: usize) -> GraphResult<()> {
        let mut stack = vec![self.discover(root, None)?];
        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.pending.next() else {
                let node = frame.node;
                stack.pop();
                self.finish(node)?;
                continue;
            };
            let current = frame.node;
            match self.graph.color(&next)? {
                Color::White => {
                    let child = self.forest.position(&next)?;
                    stack.push(self.discover(child, Some(current))?);
                }
                Color::Grey => {
                    let target = self.forest.position(&next)?;
                    self.forest.back_edges.push((current, target));
                }
                Color::Black => {}
            }
        }
        Ok(())
    }

    fn discover(
        &mut self,
        position: usize,
        parent: Option<usize>,
    ) -> GraphResult<Frame<G::Label>> {
        let label = &self.forest.labels[position];
        self.graph.set_color(label, Color::Grey)?;
        self.clock += 1;
        let record = &mut self.forest.records[position];
        record.discovery = self.clock;
        record.parent = parent;
        self.annotate.discover(
            label,
            self.clock,
            parent.map(|p| &self.forest.labels[p]),
        );
        trace!(node = ?label, time = self.clock, "discovered");
        let pending = self.graph.adjacent(label)?.into_iter();
        Ok(Frame {
            node: position,
            pending,
        })
    }

    fn finish(&mut self, position: usize) -> GraphResult<()> {
        let label = &self.forest.labels[position];
        self.graph.set_color(label, Color::Black)?;
        self.clock += 1;
        self.forest.records[position].finish = self.clock;
        self.annotate.finish(label, self.clock);
        trace!(node = ?label, time = self.clock, "finished");
        Ok(())
    }
}

/// Runs a depth-first search over the whole graph, leaving every node
/// colored `Black`.
pub fn depth_first_search<G: GraphMut>(graph: &mut G) -> GraphResult<DfsForest<G::Label>> {
    Search::new(graph, Unannotated).run()
}

/// Like [`depth_first_search`], but also writes the discovery time, finish
/// time and parent of each node into the node labels.  Every label's parent
/// is cleared before the search starts.
pub fn depth_first_search_annotated<G>(graph: &mut G) -> GraphResult<DfsForest<G::Label>>
where
    G: GraphMut,
    G::Label: DfsNode,
{
    Search::new(graph, Annotated).run()
}
