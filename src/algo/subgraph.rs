/*!
# Subgraph Extraction

Provides a trait for building new graphs from the incident edges of a vertex subset of an
existing graph. The extracted graph always shares the configuration of its source.
*/

use fxhash::FxHashSet;

use super::*;

/// A trait for creating subgraphs (and index-payload copies) of a graph.
pub trait Subgraph {
    type Payload;
    type Edge: EdgeModel;

    /// Creates a graph holding every edge incident (`in ∪ out`) to a vertex of `vertices`.
    ///
    /// Endpoints are registered on first sight and receive a copy of their payload in the
    /// source graph. Requested vertices that are unregistered or have no incident edges are
    /// not part of the result unless reached through another requested vertex. Duplicate
    /// requests are ignored.
    ///
    /// ```
    /// use itertools::Itertools;
    /// use smartgraph::{algo::*, prelude::*};
    ///
    /// let graph = Graph::<Node>::from_edge_containers(
    ///     GraphConfig::list().directed(true),
    ///     [vec![Edge(0, 1), Edge(1, 2), Edge(3, 4)]],
    /// ).unwrap();
    ///
    /// let sub = graph.make_subgraph([1]);
    /// assert_eq!(sub.vertices().collect_vec(), vec![0, 1, 2]);
    /// assert_eq!(sub.edges().collect_vec(), vec![Edge(0, 1), Edge(1, 2)]);
    /// ```
    fn make_subgraph<I>(&self, vertices: I) -> Graph<Self::Payload, Self::Edge>
    where
        I: IntoIterator<Item = Node>;

    /// Same as [`Subgraph::make_subgraph`] but every vertex carries its own index as payload
    fn make_plain_subgraph<I>(&self, vertices: I) -> Graph<Node, Self::Edge>
    where
        I: IntoIterator<Item = Node>;

    /// Creates an index-payload graph with the configuration of `self` from edge containers.
    /// See [`Graph::from_edge_containers`].
    fn make_plain_graph<C, J>(&self, containers: C) -> Graph<Node, Self::Edge>
    where
        C: IntoIterator<Item = J>,
        J: IntoIterator,
        J::Item: Into<Self::Edge>;
}

impl<T: Clone, E: EdgeModel> Graph<T, E> {
    /// Copies the incident edges of `vertices` into a fresh graph, attaching payloads via `payload`
    fn pull_incident<P, I, F>(&self, vertices: I, payload: F) -> Graph<P, E>
    where
        I: IntoIterator<Item = Node>,
        F: Fn(Node, &T) -> P,
    {
        let mut sub = Graph::from_valid_config(*self.config());
        let mut requested = FxHashSet::default();
        let mut incident = Vec::new();

        for v in vertices {
            if !requested.insert(v) || !self.get_edge(v, &mut incident, false) {
                continue;
            }

            for edge in &incident {
                for u in [edge.source(), edge.destination()] {
                    if sub.has_vertex(u) {
                        continue;
                    }
                    if let Some(data) = self.at(u) {
                        sub.register_vertex(u, payload(u, data));
                    }
                }
                sub.insert_weighted_edge(edge.source(), edge.destination(), edge.weight());
            }
        }

        debug!(
            requested = requested.len(),
            vertices = sub.vertices_size(),
            edges = sub.edge_size(),
            "extracted subgraph"
        );
        sub
    }
}

impl<T: Clone, E: EdgeModel> Subgraph for Graph<T, E> {
    type Payload = T;
    type Edge = E;

    fn make_subgraph<I>(&self, vertices: I) -> Graph<T, E>
    where
        I: IntoIterator<Item = Node>,
    {
        self.pull_incident(vertices, |_, data| data.clone())
    }

    fn make_plain_subgraph<I>(&self, vertices: I) -> Graph<Node, E>
    where
        I: IntoIterator<Item = Node>,
    {
        self.pull_incident(vertices, |u, _| u)
    }

    fn make_plain_graph<C, J>(&self, containers: C) -> Graph<Node, E>
    where
        C: IntoIterator<Item = J>,
        J: IntoIterator,
        J::Item: Into<E>,
    {
        let mut graph = Graph::from_valid_config(*self.config());
        for container in containers {
            graph.extend_edges(container);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn k4(config: GraphConfig) -> Graph<Node> {
        Graph::from_edge_containers(
            config,
            [vec![Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(1, 2), Edge(1, 3), Edge(2, 3)]],
        )
        .unwrap()
    }

    #[test]
    fn pulls_endpoints_transitively() {
        for config in [GraphConfig::list(), GraphConfig::matrix(4)] {
            let graph = k4(config);
            let sub = graph.make_subgraph([1, 3, 0]);

            assert_eq!(sub.vertices().collect_vec(), vec![0, 1, 2, 3]);
            assert_eq!(sub.edges().collect_vec(), graph.edges().collect_vec());
            assert_eq!(sub.edge_size(), 6);
            assert_eq!(sub.config(), graph.config());
        }
    }

    #[test]
    fn isolated_and_unknown_vertices_are_dropped() {
        let mut graph: Graph<&str> = Graph::new(GraphConfig::list().directed(true)).unwrap();
        for (v, name) in [(0, "a"), (1, "b"), (2, "c"), (7, "lonely")] {
            graph.register_vertex(v, name);
        }
        graph.insert_edge(0, 1);
        graph.insert_edge(2, 1);

        let sub = graph.make_subgraph([7, 0, 0, 42]);
        assert_eq!(sub.vertices().collect_vec(), vec![0, 1]);
        assert_eq!(sub.at(1), Some(&"b"));
        assert_eq!(sub.edges().collect_vec(), vec![Edge(0, 1)]);

        // incoming edges are pulled as well
        let sub = graph.make_subgraph([1]);
        assert_eq!(sub.vertices().collect_vec(), vec![0, 1, 2]);
        assert_eq!(sub.edge_size(), 2);
    }

    #[test]
    fn plain_subgraph_keeps_weights() {
        let mut graph: Graph<String, WeightedEdge> =
            Graph::new(GraphConfig::matrix(6).directed(true)).unwrap();
        for v in 0..6 {
            graph.register_vertex(v, format!("v{v}"));
        }
        graph.insert_weighted_edge(4, 4, 2);
        graph.insert_weighted_edge(4, 5, 8);
        graph.insert_weighted_edge(1, 2, 3);

        let sub = graph.make_plain_subgraph([4]);
        assert_eq!(sub.vertices().collect_vec(), vec![4, 5]);
        assert_eq!(sub.at(5), Some(&5));
        assert_eq!(sub.capacity(), Some(6));
        assert_eq!(
            sub.edges().collect_vec(),
            vec![WeightedEdge::new(4, 4, 2), WeightedEdge::new(4, 5, 8)]
        );
    }

    #[test]
    fn plain_graph_shares_configuration() {
        let graph: Graph<(), WeightedEdge> =
            Graph::new(GraphConfig::list().directed(true).disconnected(-10)).unwrap();

        let plain = graph.make_plain_graph([vec![WeightedEdge::new(3, 1, -4)]]);
        assert_eq!(plain.config(), graph.config());
        assert_eq!(plain.weight_of_edge(3, 1), -4);
        assert_eq!(plain.weight_of_edge(1, 3), -10);
        assert_eq!(plain.at(3), Some(&3));
    }
}
