#![cfg(test)]

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::graph::{Graph, GraphMut};

#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Default + Clone + Debug + 'static,
    G::Label: Arbitrary,
    G::Payload: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 16; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 40;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = G::default();
        for _ in 0..num_nodes {
            graph.add_node(G::Label::arbitrary(g));
        }
        let nodes: Vec<_> = graph.nodes().cloned().collect();

        for i in 0..num_edges {
            if nodes.is_empty() {
                break;
            }
            let source = &nodes[usize::arbitrary(g) % nodes.len()];
            let target = &nodes[usize::arbitrary(g) % nodes.len()];
            graph
                .add_edge(source, target, Option::<G::Payload>::arbitrary(g))
                .expect("endpoints were taken from the graph");
            if i < num_extra_self_loops {
                graph
                    .add_edge(source, source, Option::<G::Payload>::arbitrary(g))
                    .expect("endpoint was taken from the graph");
            }
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a directed graph.
pub fn check_graph_consistency<G>(graph: &G)
where
    G: Graph,
    G::Payload: Eq + Hash + Debug,
{
    assert!(!has_duplicates(graph.nodes()));
    assert_eq!(graph.nodes().count(), graph.len());
    assert_eq!(graph.is_empty(), graph.len() == 0);

    for (index, node) in graph.nodes().enumerate() {
        assert_eq!(graph.node_index(node), Ok(index));
        assert_eq!(graph.node_at_index(index), Ok(node));

        let outgoing = graph.outgoing_edges(node).unwrap();
        let ingoing = graph.ingoing_edges(node).unwrap();
        assert_eq!(graph.degree(node), Ok(outgoing.len() + ingoing.len()));
        assert!(outgoing.iter().all(|edge| edge.source() == node));
        assert!(ingoing.iter().all(|edge| edge.target() == node));
        assert_eq!(graph.successors(node).unwrap().len(), outgoing.len());
        assert_eq!(graph.predecessors(node).unwrap().len(), ingoing.len());
    }

    let edges = graph.edges();
    assert!(!has_duplicates(edges.iter()));
    assert_eq!(edges.len(), graph.edge_count());
    for edge in &edges {
        assert!(graph.contains_node(edge.source()));
        assert!(graph.contains_node(edge.target()));
        assert_eq!(
            graph.contains_edge(edge.source(), edge.target(), edge.payload()),
            Ok(true)
        );
        assert_eq!(
            graph.edges_between(edge.source(), edge.target()),
            Ok(vec![edge.clone()])
        );
    }
}
