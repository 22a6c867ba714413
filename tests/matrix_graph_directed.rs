use graphmatrix::prelude::*;
use graphmatrix::tracing_support::init_tracing;

const NODES: [&str; 8] = ["r", "s", "t", "u", "v", "w", "x", "y"];

const EDGES: [(&str, &str, Option<f64>); 13] = [
    ("r", "s", Some(1.0)),
    ("r", "v", Some(2.0)),
    ("w", "v", Some(0.5)),
    ("x", "y", Some(8.0)),
    ("x", "v", None),
    ("x", "t", Some(9.0)),
    ("w", "x", Some(0.2)),
    ("u", "r", Some(-3.0)),
    ("y", "s", Some(0.4)),
    ("v", "r", Some(0.1)),
    ("s", "u", Some(1.5)),
    ("s", "s", Some(0.4)),
    ("t", "u", None),
];

fn s(label: &str) -> String {
    label.to_string()
}

fn sample_graph() -> MatrixGraph<String, f64> {
    init_tracing();
    let mut graph = MatrixGraph::new();
    for node in NODES {
        assert!(graph.add_node(s(node)));
    }
    for (source, target, payload) in EDGES {
        assert_eq!(graph.add_edge(&s(source), &s(target), payload), Ok(true));
    }
    graph
}

fn labels(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|node| s(node)).collect()
}

#[test]
fn node_queries() {
    let graph = sample_graph();
    assert!(graph.contains_node(&s("r")));
    assert_eq!(graph.node_index(&s("x")), Ok(6));
    assert_eq!(graph.nodes().cloned().collect::<Vec<_>>(), labels(&NODES));
    assert_eq!(graph.successors(&s("x")), Ok(labels(&["t", "v", "y"])));
    assert_eq!(graph.predecessors(&s("v")), Ok(labels(&["r", "w", "x"])));
    assert_eq!(graph.degree(&s("t")), Ok(2));
    assert_eq!(graph.degree(&s("s")), Ok(5));
}

#[test]
fn edge_queries() {
    let mut graph = sample_graph();
    assert_eq!(graph.edge_count(), 13);
    assert_eq!(graph.contains_edge(&s("r"), &s("s"), Some(&1.0)), Ok(true));
    assert_eq!(graph.remove_edge(&s("r"), &s("s"), Some(&1.0)), Ok(true));
    assert_eq!(graph.contains_edge(&s("r"), &s("s"), Some(&1.0)), Ok(false));
    assert_eq!(graph.edge_count(), 12);

    assert_eq!(
        graph.edges_between(&s("x"), &s("y")),
        Ok(vec![Edge::with_payload(s("x"), s("y"), Some(8.0), true)])
    );

    let ingoing: Vec<String> = graph
        .ingoing_edges(&s("v"))
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(ingoing, ["(r) --> (v)", "(w) --> (v)", "(x) --> (v)"]);
    let payloads: Vec<Option<f64>> = graph
        .ingoing_edges(&s("v"))
        .unwrap()
        .iter()
        .map(|edge| edge.payload().copied())
        .collect();
    assert_eq!(payloads, [Some(2.0), Some(0.5), None]);

    let outgoing: Vec<(String, String)> = graph
        .outgoing_edges(&s("s"))
        .unwrap()
        .into_iter()
        .map(|edge| {
            let (source, target, _) = edge.into_parts();
            (source, target)
        })
        .collect();
    assert_eq!(outgoing, [(s("s"), s("s")), (s("s"), s("u"))]);
}

#[test]
fn remove_node_drops_its_edges() {
    let mut graph = sample_graph();
    graph.remove_edge(&s("r"), &s("s"), Some(&1.0)).unwrap();
    assert_eq!(graph.remove_node(&s("s")), Ok(true));
    assert!(!graph.contains_node(&s("s")));
    assert_eq!(graph.len(), 7);
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph.node_index(&s("x")), Ok(5));
    assert_eq!(graph.successors(&s("y")), Ok(vec![]));
    assert_eq!(graph.outgoing_edges(&s("u")).unwrap().len(), 1);
    assert!(graph.remove_node(&s("s")).is_err());
}

#[test]
fn matrix_view() {
    let graph = sample_graph();
    let expected = "\
\x20       r    s    t    u    v    w    x    y
r       0  1.0    0    0  2.0    0    0    0
s       0  0.4    0  1.5    0    0    0    0
t       0    0    0 None    0    0    0    0
u    -3.0    0    0    0    0    0    0    0
v     0.1    0    0    0    0    0    0    0
w       0    0    0    0  0.5    0  0.2    0
x       0    0  9.0    0 None    0    0  8.0
y       0  0.4    0    0    0    0    0    0
";
    assert_eq!(graph.matrix_view().to_string(), expected);
}

#[test]
fn display_lists_edges_in_matrix_order() {
    let graph = sample_graph();
    let text = graph.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "(r) --> (s)\tw(r,s) = 1.0");
    assert_eq!(lines[2], "(s) --> (s)\tw(s,s) = 0.4");
    assert_eq!(lines[4], "(t) --> (u)\tw(t,u) = None");
    assert_eq!(lines[12], "(y) --> (s)\tw(y,s) = 0.4");
}

#[test]
fn search_over_sample_graph() {
    let mut graph = sample_graph();
    let forest = depth_first_search(&mut graph).unwrap();
    assert_eq!(forest.len(), 8);
    assert!(forest.has_cycle());
    assert_eq!(forest.roots().collect::<Vec<_>>(), [&s("r"), &s("t"), &s("w")]);
    for node in graph.nodes() {
        let times = forest.timestamps(node).unwrap();
        assert!(times.discovery < times.finish);
        assert_eq!(graph.color(node), Ok(Color::Black));
    }
}

#[cfg(feature = "slow_tests")]
#[test]
fn large_dense_graph() {
    init_tracing();
    let size = 400u32;
    let mut graph = MatrixGraph::with_capacity(size as usize);
    for i in 0..size {
        graph.add_node(i);
    }
    for i in 0..size {
        for j in (i + 1)..size {
            graph.add_edge(&i, &j, Some(i + j)).unwrap();
        }
    }
    assert_eq!(graph.edge_count(), (size * (size - 1) / 2) as usize);
    let forest = depth_first_search(&mut graph).unwrap();
    assert!(!forest.has_cycle());
    assert_eq!(forest.discovery(&(size - 1)), Some(size));
    assert_eq!(forest.finish(&0), Some(2 * size));
}
