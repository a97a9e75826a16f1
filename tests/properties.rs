use itertools::Itertools;
use proptest::prelude::*;
use smartgraph::prelude::*;

const N: Node = 12;

fn configs() -> impl Strategy<Value = GraphConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(matrix, directed)| {
        let config = if matrix {
            GraphConfig::matrix(N)
        } else {
            GraphConfig::list()
        };
        config.directed(directed)
    })
}

fn edge_lists() -> impl Strategy<Value = Vec<(Node, Node, Weight)>> {
    prop::collection::vec((0..N, 0..N, 0..50 as Weight), 0..60)
}

fn weighted_graph(config: GraphConfig, edges: &[(Node, Node, Weight)]) -> Graph<Node, WeightedEdge> {
    let mut graph = Graph::new(config).unwrap();
    for v in 0..N {
        graph.register_vertex(v, v);
    }
    for &(u, v, w) in edges {
        assert!(graph.insert_weighted_edge(u, v, w));
    }
    graph
}

proptest! {
    #[test]
    fn inserted_edges_exist(config in configs(), edges in edge_lists()) {
        let graph = weighted_graph(config, &edges);
        for &(u, v, _) in &edges {
            prop_assert!(graph.has_edge(u, v));
            if !config.is_directed() {
                prop_assert!(graph.has_edge(v, u));
            }
        }
    }

    #[test]
    fn insertion_is_idempotent(config in configs(), edges in edge_lists()) {
        let mut graph = weighted_graph(config, &edges);
        let size = graph.edge_size();
        let records = graph.edges().collect_vec();

        for edge in &records {
            prop_assert!(graph.insert(*edge));
        }
        prop_assert_eq!(graph.edge_size(), size);
        prop_assert_eq!(graph.edges().collect_vec(), records);
    }

    #[test]
    fn erase_undoes_insert(config in configs(), edges in edge_lists(), u in 0..N, v in 0..N) {
        let mut graph = weighted_graph(config, &edges);

        prop_assert!(graph.insert_weighted_edge(u, v, 3));
        prop_assert!(graph.erase_edge(u, v));
        prop_assert!(!graph.has_edge(u, v));
        if !config.is_directed() {
            prop_assert!(!graph.has_edge(v, u));
        }
        prop_assert_eq!(graph.weight_of_edge(u, v), graph.sentinel());
    }

    #[test]
    fn degree_sum_is_twice_the_edge_size(matrix in any::<bool>(), edges in edge_lists()) {
        let config = if matrix { GraphConfig::matrix(N) } else { GraphConfig::list() };
        let mut graph: Graph<Node> = Graph::new(config).unwrap();
        for v in 0..N {
            graph.register_vertex(v, v);
        }
        for &(u, v, _) in edges.iter().filter(|(u, v, _)| u != v) {
            graph.insert_edge(u, v);
        }

        let sum: NumNodes = graph.vertices().map(|v| graph.degree(v)).sum();
        prop_assert_eq!(sum, 2 * graph.edge_size());
    }

    #[test]
    fn outgoing_edges_are_sorted(config in configs(), edges in edge_lists()) {
        let graph = weighted_graph(config, &edges);
        for v in graph.vertices() {
            prop_assert!(
                graph
                    .out_edges(v)
                    .tuple_windows()
                    .all(|(a, b)| a.destination() < b.destination())
            );
        }
    }

    #[test]
    fn erased_vertices_leave_no_records(config in configs(), edges in edge_lists(), v in 0..N) {
        let mut graph = weighted_graph(config, &edges);

        prop_assert!(graph.erase_vertex(v));
        prop_assert!(!graph.has_vertex(v));
        prop_assert!(graph.edges().all(|e| e.source() != v && e.destination() != v));
    }
}
