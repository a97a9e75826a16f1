/*!
# Graph

[`Graph`] is the entry point of the crate. It selects a storage backend once, at
construction, from a [`GraphConfig`] and re-exposes the full [`VertexEdgeStore`] contract of
that backend unchanged.

```
use smartgraph::prelude::*;

let mut graph: Graph<&str, WeightedEdge> =
    Graph::new(GraphConfig::matrix(10).directed(true)).unwrap();

graph.register_vertex(1, "one");
graph.register_vertex(2, "two");
graph.insert_weighted_edge(2, 1, 13);

assert_eq!(graph.weight_of_edge(2, 1), 13);
assert_eq!(graph.weight_of_edge(1, 2), DISCONNECTED);
```

A graph exclusively owns its storage. Cloning deep-copies every vertex and edge; no two
graphs share state. Graphs are not synchronized: concurrent mutation from multiple
threads requires external locking by the caller.
*/

use itertools::Either;

use crate::{
    config::*,
    cursor::{CheckedCursor, UncheckedCursor},
    edge::*,
    error::ConfigError,
    node::*,
    ops::*,
    repr::*,
};

/// The backend selected by the configuration
#[derive(Clone)]
enum Backing<T, E: EdgeModel> {
    List(ListStore<T, E>),
    Matrix(MatrixStore<T, E>),
}

/// A graph with payload `T` per vertex and edges of model `E`
#[derive(Clone)]
pub struct Graph<T, E: EdgeModel = Edge> {
    config: GraphConfig,
    backing: Backing<T, E>,
}

/// Forwards a call to whichever backend is in use
macro_rules! dispatch {
    ($self:expr, $store:ident => $call:expr) => {
        match $self {
            Backing::List($store) => $call,
            Backing::Matrix($store) => $call,
        }
    };
    (@iter $self:expr, $store:ident => $call:expr) => {
        match $self {
            Backing::List($store) => Either::Left($call),
            Backing::Matrix($store) => Either::Right($call),
        }
    };
}

impl<T, E: EdgeModel> Graph<T, E> {
    /// Creates an empty graph.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] of [`GraphConfig::validate`] if `config` is invalid.
    pub fn new(config: GraphConfig) -> Result<Self, ConfigError> {
        config.validate::<E>()?;
        Ok(Self::from_valid_config(config))
    }

    /// Creates an empty graph from a configuration that already passed validation
    pub(crate) fn from_valid_config(config: GraphConfig) -> Self {
        let backing = match config.capacity() {
            None => Backing::List(ListStore::with_sentinel(
                config.is_directed(),
                config.sentinel(),
            )),
            Some(capacity) => Backing::Matrix(MatrixStore::with_sentinel(
                capacity,
                config.is_directed(),
                config.sentinel(),
            )),
        };

        Self { config, backing }
    }

    /// Returns the configuration the graph was built with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn backend(&self) -> Backend {
        self.config.backend()
    }

    /// Returns the fixed capacity of a matrix backend and `None` for lists
    pub fn capacity(&self) -> Option<NumNodes> {
        self.config.capacity()
    }

    /// Describes the configuration of the graph
    pub fn debug_info(&self) -> String {
        let capacity = self
            .capacity()
            .map_or_else(|| "unbounded".to_string(), |c| c.to_string());

        format!(
            "weighted: {}, directed: {}, backend: {}, capacity: {capacity}\n",
            E::WEIGHTED,
            self.config.is_directed(),
            self.backend(),
        )
    }

    /// Returns a cursor positioned at `v` that validates every hop against the graph
    pub fn cursor(&self, v: Node) -> CheckedCursor<'_, Self> {
        CheckedCursor::new(self, v)
    }

    /// Returns a cursor positioned at `v` that only validates positions
    pub fn unchecked_cursor(&self, v: Node) -> UncheckedCursor<'_, Self> {
        UncheckedCursor::new(self, v)
    }
}

impl<T, E: EdgeModel> VertexEdgeStore for Graph<T, E> {
    type Payload = T;
    type Edge = E;

    fn is_directed(&self) -> bool {
        self.config.is_directed()
    }

    fn sentinel(&self) -> Weight {
        self.config.sentinel()
    }

    fn at(&self, v: Node) -> Option<&T> {
        dispatch!(&self.backing, s => s.at(v))
    }

    fn at_mut(&mut self, v: Node) -> Option<&mut T> {
        dispatch!(&mut self.backing, s => s.at_mut(v))
    }

    fn register_vertex(&mut self, v: Node, payload: T) -> bool {
        dispatch!(&mut self.backing, s => s.register_vertex(v, payload))
    }

    fn erase_vertex(&mut self, v: Node) -> bool {
        dispatch!(&mut self.backing, s => s.erase_vertex(v))
    }

    fn has_vertex(&self, v: Node) -> bool {
        dispatch!(&self.backing, s => s.has_vertex(v))
    }

    fn vertices_size(&self) -> NumNodes {
        dispatch!(&self.backing, s => s.vertices_size())
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        dispatch!(@iter &self.backing, s => s.vertices())
    }

    fn out_edges(&self, v: Node) -> impl Iterator<Item = E> + '_ {
        dispatch!(@iter &self.backing, s => s.out_edges(v))
    }

    fn in_edges(&self, v: Node) -> impl Iterator<Item = E> + '_ {
        dispatch!(@iter &self.backing, s => s.in_edges(v))
    }

    fn weight_of_edge(&self, u: Node, v: Node) -> Weight {
        dispatch!(&self.backing, s => s.weight_of_edge(u, v))
    }

    fn insert_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        dispatch!(&mut self.backing, s => s.insert_weighted_edge(u, v, weight))
    }

    fn erase_edge(&mut self, u: Node, v: Node) -> bool {
        dispatch!(&mut self.backing, s => s.erase_edge(u, v))
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        dispatch!(&self.backing, s => s.has_edge(u, v))
    }

    fn in_degree(&self, v: Node) -> NumNodes {
        dispatch!(&self.backing, s => s.in_degree(v))
    }

    fn out_degree(&self, v: Node) -> NumNodes {
        dispatch!(&self.backing, s => s.out_degree(v))
    }

    fn number_of_records(&self) -> NumEdges {
        dispatch!(&self.backing, s => s.number_of_records())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn k4(config: GraphConfig) -> Graph<Node> {
        let mut graph = Graph::new(config).unwrap();
        for v in 0..4 {
            assert!(graph.register_vertex(v, v));
        }
        for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
            assert!(graph.insert_edge(u, v));
        }
        graph
    }

    #[test]
    fn complete_graph_on_both_backends() {
        for config in [GraphConfig::list(), GraphConfig::matrix(4)] {
            let graph = k4(config);
            assert_eq!(graph.edge_size(), 6);
            assert_eq!(graph.vertices_size(), 4);
            for v in 0..4 {
                assert_eq!(graph.degree(v), 3);
                assert_eq!(graph.in_degree(v), 3);
                assert_eq!(graph.out_degree(v), 3);
            }
        }
    }

    #[test]
    fn enumeration_on_both_backends() {
        for config in [GraphConfig::list().directed(true), GraphConfig::matrix(6).directed(true)] {
            let mut graph: Graph<()> = Graph::new(config).unwrap();
            for v in [5, 1, 3] {
                graph.register_vertex(v, ());
            }
            graph.insert_edge(3, 1);
            graph.insert_edge(3, 5);
            graph.insert_edge(5, 1);

            assert_eq!(graph.vertices().collect_vec(), vec![1, 3, 5]);
            assert_eq!(graph.out_edges(3).collect_vec(), vec![Edge(3, 1), Edge(3, 5)]);
            assert_eq!(graph.in_edges(1).collect_vec(), vec![Edge(3, 1), Edge(5, 1)]);
            assert_eq!(graph.out_edges(4).count(), 0);
        }
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(
            Graph::<Node>::new(GraphConfig::matrix(0)).err(),
            Some(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn clone_is_deep() {
        let original = k4(GraphConfig::list());
        let mut copy = original.clone();

        assert!(copy.erase_vertex(0));
        assert!(copy.emplace(1, 42));

        assert!(original.has_vertex(0));
        assert_eq!(original.at(1), Some(&1));
        assert_eq!(original.edge_size(), 6);
        assert_eq!(copy.edge_size(), 3);
    }

    #[test]
    fn debug_info() {
        let graph: Graph<(), WeightedEdge> =
            Graph::new(GraphConfig::matrix(10).directed(true)).unwrap();
        assert_eq!(
            graph.debug_info(),
            "weighted: true, directed: true, backend: adjacency matrix, capacity: 10\n"
        );

        let graph: Graph<()> = Graph::new(GraphConfig::list()).unwrap();
        assert_eq!(
            graph.debug_info(),
            "weighted: false, directed: false, backend: adjacency list, capacity: unbounded\n"
        );
    }

    #[test]
    fn priority_queries() {
        let mut graph: Graph<(), WeightedEdge> =
            Graph::new(GraphConfig::list().directed(true)).unwrap();
        for v in 0..4 {
            graph.register_vertex(v, ());
        }
        graph.insert_weighted_edge(0, 1, 7);
        graph.insert_weighted_edge(0, 2, 3);
        graph.insert_weighted_edge(0, 3, 9);
        graph.insert_weighted_edge(3, 2, 1);

        assert_eq!(
            graph.edge_out_by(0, Priority::Ascending),
            Some(WeightedEdge::new(0, 2, 3))
        );
        assert_eq!(
            graph.edge_out_by(0, Priority::Descending),
            Some(WeightedEdge::new(0, 3, 9))
        );
        assert_eq!(
            graph.edge_in_by(2, Priority::Ascending),
            Some(WeightedEdge::new(3, 2, 1))
        );

        let mut queue = EdgeQueue::new(Priority::Descending);
        assert!(graph.get_edge_out_ordered(0, &mut queue, false));
        assert!(graph.get_edge_in_ordered(2, &mut queue, true));
        assert_eq!(queue.map(|e| e.weight).collect_vec(), vec![9, 7, 3, 3, 1]);

        let weights = graph
            .make_edge_queue(Priority::Ascending)
            .map(|e| e.weight)
            .collect_vec();
        assert_eq!(weights, vec![1, 3, 7, 9]);
    }

    #[test]
    fn ordered_queries_need_weights() {
        let graph = k4(GraphConfig::list());
        let mut queue = EdgeQueue::new(Priority::Ascending);
        assert!(!graph.get_edge_out_ordered(0, &mut queue, false));
        assert_eq!(graph.edge_out_by(0, Priority::Ascending), None);
    }
}
