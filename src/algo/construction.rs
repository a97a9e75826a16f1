use super::*;

impl<E: EdgeModel> Graph<Node, E> {
    /// Creates a graph from one or more edge containers, processed left to right.
    /// Endpoints are registered on first sight with their own index as payload.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] of [`GraphConfig::validate`] if `config` is invalid.
    ///
    /// ```
    /// use smartgraph::prelude::*;
    ///
    /// let graph = Graph::<Node>::from_edge_containers(
    ///     GraphConfig::list(),
    ///     [vec![Edge(0, 1), Edge(1, 2)], vec![Edge(2, 0)]],
    /// ).unwrap();
    ///
    /// assert_eq!(graph.vertices_size(), 3);
    /// assert_eq!(graph.edge_size(), 3);
    /// ```
    pub fn from_edge_containers<C, I>(config: GraphConfig, containers: C) -> Result<Self, ConfigError>
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let mut graph = Self::new(config)?;
        for container in containers {
            graph.extend_edges(container);
        }
        Ok(graph)
    }

    /// Inserts all `edges`, registering missing endpoints with their own index as payload.
    ///
    /// Edges that cannot be stored are skipped as a whole and register no endpoint: indices
    /// beyond a matrix capacity and, for weighted graphs, weights at or below the sentinel.
    ///
    /// Returns the number of edges that were inserted.
    pub fn extend_edges<I>(&mut self, edges: I) -> NumEdges
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let mut inserted = 0;
        let mut skipped = 0usize;

        for edge in edges {
            let edge: E = edge.into();
            if !self.is_storable(&edge) {
                trace!(%edge, "skipped unstorable edge");
                skipped += 1;
                continue;
            }

            for v in [edge.source(), edge.destination()] {
                if !self.has_vertex(v) {
                    self.register_vertex(v, v);
                }
            }

            if self.insert_weighted_edge(edge.source(), edge.destination(), edge.weight()) {
                inserted += 1;
            } else {
                skipped += 1;
            }
        }

        debug!(inserted, skipped, "extended graph from edge container");
        inserted
    }

    /// Returns *true* if `edge` fits the capacity and carries a legal weight
    fn is_storable(&self, edge: &E) -> bool {
        let in_range = self
            .capacity()
            .is_none_or(|capacity| edge.source() < capacity && edge.destination() < capacity);
        in_range && (!E::WEIGHTED || edge.weight() > self.sentinel())
    }
}
