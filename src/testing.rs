/// Every store should pass these randomized suites against a simple reference model.
///
/// `$store` constructs an empty store holding `Node` payloads with a capacity of at least 64,
/// `$edge` is its edge model and `$undirected` tells whether edges are mirrored.
macro_rules! test_store_ops {
    ($env:ident, $store:expr, $edge:ty, $undirected:literal, ($($suite:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use std::collections::BTreeMap;

            use crate::{ops::*, repr::*, testing::test_store_ops};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type TestEdge = $edge;
            const UNDIRECTED: bool = $undirected;

            /// Creates a list of at most `m_ub` random loop-free weighted edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<(Node, Node, Weight)> {
                (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        (u, v, rng.random_range(0..100))
                    })
                    .filter(|&(u, v, _)| u != v)
                    .collect_vec()
            }

            /// Builds a store on `0..n` from `edges` and the expected set of records
            fn build(n: NumNodes, edges: &[(Node, Node, Weight)]) -> (impl VertexEdgeStore<Payload = Node, Edge = TestEdge>, BTreeMap<(Node, Node), Weight>) {
                let mut store = $store;
                for u in 0..n {
                    assert!(store.register_vertex(u, u));
                }

                let mut reference = BTreeMap::new();
                for &(u, v, w) in edges {
                    assert!(store.insert_weighted_edge(u, v, w));

                    let w = if TestEdge::WEIGHTED { w } else { DEFAULT_WEIGHT };
                    reference.insert((u, v), w);
                    if UNDIRECTED {
                        reference.insert((v, u), w);
                    }
                }

                (store, reference)
            }

            fn expected_edges(reference: &BTreeMap<(Node, Node), Weight>) -> Vec<TestEdge> {
                reference
                    .iter()
                    .map(|(&(u, v), &w)| TestEdge::with_weight(u, v, w))
                    .collect_vec()
            }

            $(
                test_store_ops!(@suite $suite);
            )*
        }
    };
    (@suite VertexLifecycle) => {
        #[test]
        fn vertex_lifecycle() {
            let (mut store, _) = build(40, &[]);

            assert_eq!(store.vertices_size(), 40);
            for u in 0..40 {
                assert!(store.has_vertex(u));
                assert!(!store.register_vertex(u, 0));
                assert_eq!(store.at(u), Some(&u));

                assert!(store.emplace(u, u + 100));
                assert_eq!(store.at(u), Some(&(u + 100)));
            }

            assert!(!store.emplace(1000, 1));
            assert_eq!(store.at(1000), None);

            for u in (1..40).step_by(2) {
                assert!(store.erase_vertex(u));
                assert!(!store.erase_vertex(u));
            }

            assert_eq!(store.vertices_size(), 20);
            assert_eq!(store.vertices().collect_vec(), (0..40).step_by(2).collect_vec());
        }
    };
    (@suite EdgeEditing) => {
        #[test]
        fn edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 40] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub);
                        let (mut store, mut reference) = build(n, &edges);

                        for u in 0..n {
                            for v in 0..n {
                                assert_eq!(store.has_edge(u, v), reference.contains_key(&(u, v)));
                                assert_eq!(
                                    store.weight_of_edge(u, v),
                                    reference.get(&(u, v)).copied().unwrap_or(store.sentinel())
                                );
                            }
                        }
                        assert_eq!(store.number_of_records() as usize, reference.len());

                        // inserting the same edges again changes nothing
                        let m = store.edge_size();
                        for (&(u, v), &w) in reference.iter() {
                            assert!(store.insert_weighted_edge(u, v, w));
                            assert!(store.exists_edge(&TestEdge::with_weight(u, v, w)));
                        }
                        assert_eq!(store.edge_size(), m);

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            assert!(store.erase_edge(u, v));
                            reference.remove(&(u, v));
                            if UNDIRECTED {
                                reference.remove(&(v, u));
                                assert!(!store.has_edge(v, u));
                            }
                            assert!(!store.has_edge(u, v));
                        }

                        assert_eq!(store.number_of_records() as usize, reference.len());
                        assert_eq!(store.edges().collect_vec(), expected_edges(&reference));
                    }
                }
            }
        }
    };
    (@suite Degrees) => {
        #[test]
        fn degrees() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20, 40] {
                for m_ub in [n * 2, n * 5] {
                    let edges = random_edges(rng, n, m_ub);
                    let (store, reference) = build(n, &edges);

                    let mut degree_sum = 0;
                    for u in 0..n {
                        let out = reference.keys().filter(|&&(s, _)| s == u).count() as NumNodes;
                        let inc = reference.keys().filter(|&&(_, d)| d == u).count() as NumNodes;

                        assert_eq!(store.out_degree(u), out);
                        assert_eq!(store.in_degree(u), inc);
                        if UNDIRECTED {
                            assert_eq!(store.degree(u), (out + inc) / 2);
                        } else {
                            assert_eq!(store.degree(u), out + inc);
                        }
                        degree_sum += store.degree(u) as NumEdges;
                    }

                    if UNDIRECTED {
                        assert_eq!(degree_sum, 2 * store.edge_size());
                        assert_eq!(2 * store.edge_size() as usize, reference.len());
                    } else {
                        assert_eq!(degree_sum, 2 * store.edge_size());
                        assert_eq!(store.edge_size() as usize, reference.len());
                    }
                }
            }
        }
    };
    (@suite EdgeEnumeration) => {
        #[test]
        fn edge_enumeration() {
            let rng = &mut Pcg64Mcg::seed_from_u64(6);

            for n in [10 as NumNodes, 20, 40] {
                let edges = random_edges(rng, n, n * 5);
                let (mut store, reference) = build(n, &edges);
                let expected = expected_edges(&reference);

                let mut res = Vec::new();
                for u in 0..n {
                    let out = store.out_edges(u).collect_vec();
                    assert!(out.iter().tuple_windows().all(|(a, b)| a.destination() < b.destination()));
                    assert_eq!(out, expected.iter().copied().filter(|e| e.source() == u).collect_vec());

                    let inc = expected.iter().copied().filter(|e| e.destination() == u).collect_vec();
                    assert_eq!(store.in_edges(u).collect_vec(), inc);

                    assert!(store.get_edge_out(u, &mut res, false));
                    assert_eq!(res, out);
                    assert!(store.get_edge_in(u, &mut res, true));
                    assert_eq!(res.len(), out.len() + inc.len());
                    assert!(store.get_edge(u, &mut res, false));
                    assert_eq!(res.len(), out.len() + inc.len());
                }

                res.clear();
                assert!(!store.get_edge_out(n + 1, &mut res, false));
                assert!(!store.get_edge_in(n + 1, &mut res, true));
                assert!(res.is_empty());

                // erasing a vertex removes every record touching it
                assert!(store.erase_vertex(0));
                assert!(store.edges().all(|e| e.source() != 0 && e.destination() != 0));
                assert_eq!(
                    store.edges().collect_vec(),
                    expected.iter().copied().filter(|e| e.source() != 0 && e.destination() != 0).collect_vec()
                );
            }
        }
    };
}

pub(crate) use test_store_ops;
