/*!
# Vertex/Edge Operations

[`VertexEdgeStore`] is the single contract shared by both storage backends
([`ListStore`](crate::repr::ListStore), [`MatrixStore`](crate::repr::MatrixStore)) and the
[`Graph`](crate::graph::Graph) facade.

Backends only implement a small set of primitives (vertex bookkeeping, edge enumeration,
single-edge editing); everything else is derived here and may be overwritten where a
backend knows better.

All operations fail closed: unknown vertices or out-of-range indices make lookups return
nothing and mutations return *false*. No operation leaves partial state behind.
*/

use crate::{edge::*, node::*};

/// Storage of vertices (with payloads) and the edges between them
pub trait VertexEdgeStore {
    /// Data attached to every registered vertex
    type Payload;

    /// Edge model; decides whether edges are weighted
    type Edge: EdgeModel;

    /// Returns *true* if edges are directed.
    /// Undirected edges are stored as two mirrored records.
    fn is_directed(&self) -> bool;

    /// Returns the weight reported for missing edges
    fn sentinel(&self) -> Weight;

    /// Returns *true* if edges carry a weight
    fn is_weighted(&self) -> bool {
        Self::Edge::WEIGHTED
    }

    /// Returns the payload of `v` or `None` if `v` is not registered
    fn at(&self, v: Node) -> Option<&Self::Payload>;

    /// Returns the payload of `v` mutably or `None` if `v` is not registered
    fn at_mut(&mut self, v: Node) -> Option<&mut Self::Payload>;

    /// Registers `v` with the given payload.
    /// Returns *false* (and drops `payload`) if `v` is already registered or cannot be stored.
    fn register_vertex(&mut self, v: Node, payload: Self::Payload) -> bool;

    /// Replaces the payload of a registered vertex.
    /// Returns *false* if `v` is not registered.
    fn emplace(&mut self, v: Node, payload: Self::Payload) -> bool {
        match self.at_mut(v) {
            Some(slot) => {
                *slot = payload;
                true
            }
            None => false,
        }
    }

    /// Removes `v` together with all edges leaving or entering it.
    /// Returns *false* if `v` is not registered.
    fn erase_vertex(&mut self, v: Node) -> bool;

    /// Returns *true* if `v` is registered
    fn has_vertex(&self, v: Node) -> bool {
        self.at(v).is_some()
    }

    /// Returns the number of registered vertices
    fn vertices_size(&self) -> NumNodes;

    /// Returns an iterator over all registered vertices in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all edge records leaving `s` in ascending order of destination.
    /// Empty if `s` is not registered.
    fn out_edges(&self, s: Node) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns an iterator over all edge records entering `d` in ascending order of source.
    /// Empty if `d` is not registered.
    fn in_edges(&self, d: Node) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the weight of `(s, d)` or the sentinel if there is no such edge.
    /// Present unweighted edges report [`DEFAULT_WEIGHT`].
    fn weight_of_edge(&self, s: Node, d: Node) -> Weight;

    /// Inserts `(s, d)` (and `(d, s)` if undirected) or updates the weight of an existing edge.
    /// Returns *false* if an endpoint is not registered or `weight` is not above the sentinel.
    /// Unweighted stores ignore `weight`.
    fn insert_weighted_edge(&mut self, s: Node, d: Node, weight: Weight) -> bool;

    /// Removes `(s, d)` (and `(d, s)` if undirected).
    /// Returns *false* only if an endpoint is not registered; a missing edge is not a failure.
    fn erase_edge(&mut self, s: Node, d: Node) -> bool;

    /// Inserts `(s, d)` with [`DEFAULT_WEIGHT`]
    fn insert_edge(&mut self, s: Node, d: Node) -> bool {
        self.insert_weighted_edge(s, d, DEFAULT_WEIGHT)
    }

    /// Inserts an edge given in any form convertible into the edge model
    fn insert(&mut self, edge: impl Into<Self::Edge>) -> bool {
        let edge = edge.into();
        self.insert_weighted_edge(edge.source(), edge.destination(), edge.weight())
    }

    /// Returns *true* if the edge `(s, d)` exists
    fn has_edge(&self, s: Node, d: Node) -> bool {
        self.weight_of_edge(s, d) > self.sentinel()
    }

    /// Returns *true* if `edge` exists with exactly the given weight
    fn exists_edge(&self, edge: &Self::Edge) -> bool {
        let weight = self.weight_of_edge(edge.source(), edge.destination());
        weight > self.sentinel() && weight == edge.weight()
    }

    /// Returns the number of edges entering `v`
    fn in_degree(&self, v: Node) -> NumNodes {
        self.in_edges(v).count() as NumNodes
    }

    /// Returns the number of edges leaving `v`
    fn out_degree(&self, v: Node) -> NumNodes {
        self.out_edges(v).count() as NumNodes
    }

    /// Returns `in + out` for directed and `(in + out) / 2` for undirected graphs
    fn degree(&self, v: Node) -> NumNodes {
        let total = self.in_degree(v) + self.out_degree(v);
        if self.is_directed() { total } else { total / 2 }
    }

    /// Returns the number of stored edge records.
    /// Undirected edges contribute two records unless they are self-loops.
    fn number_of_records(&self) -> NumEdges {
        self.vertices()
            .map(|u| self.out_degree(u) as NumEdges)
            .sum()
    }

    /// Returns the number of edges; for undirected graphs each mirrored pair counts once
    fn edge_size(&self) -> NumEdges {
        let records = self.number_of_records();
        if self.is_directed() {
            records
        } else {
            let loops = self.vertices().filter(|&u| self.has_edge(u, u)).count() as NumEdges;
            (records + loops) / 2
        }
    }

    /// Returns an iterator over all edge records, grouped by source in ascending order
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        self.vertices().flat_map(move |u| self.out_edges(u))
    }

    /// Collects all edges leaving `s` into `res`, clearing it first unless `append` is set.
    /// Returns *false* (leaving `res` untouched) if `s` is not registered.
    fn get_edge_out(&self, s: Node, res: &mut Vec<Self::Edge>, append: bool) -> bool {
        if !self.has_vertex(s) {
            return false;
        }
        if !append {
            res.clear();
        }
        res.extend(self.out_edges(s));
        true
    }

    /// Collects all edges entering `d` into `res`, clearing it first unless `append` is set.
    /// Returns *false* (leaving `res` untouched) if `d` is not registered.
    fn get_edge_in(&self, d: Node, res: &mut Vec<Self::Edge>, append: bool) -> bool {
        if !self.has_vertex(d) {
            return false;
        }
        if !append {
            res.clear();
        }
        res.extend(self.in_edges(d));
        true
    }

    /// Collects all edges incident to `v` (outgoing first, then incoming) into `res`.
    /// A self-loop is collected once.
    fn get_edge(&self, v: Node, res: &mut Vec<Self::Edge>, append: bool) -> bool {
        if !self.get_edge_out(v, res, append) {
            return false;
        }
        res.extend(self.in_edges(v).filter(|e| !e.is_loop()));
        true
    }

    /// Pushes all edges leaving `s` into `queue`, clearing it first unless `append` is set.
    /// Returns *false* for unweighted stores or if `s` is not registered.
    fn get_edge_out_ordered(
        &self,
        s: Node,
        queue: &mut EdgeQueue<Self::Edge>,
        append: bool,
    ) -> bool {
        if !Self::Edge::WEIGHTED || !self.has_vertex(s) {
            return false;
        }
        if !append {
            queue.clear();
        }
        queue.extend(self.out_edges(s));
        true
    }

    /// Pushes all edges entering `d` into `queue`, clearing it first unless `append` is set.
    /// Returns *false* for unweighted stores or if `d` is not registered.
    fn get_edge_in_ordered(
        &self,
        d: Node,
        queue: &mut EdgeQueue<Self::Edge>,
        append: bool,
    ) -> bool {
        if !Self::Edge::WEIGHTED || !self.has_vertex(d) {
            return false;
        }
        if !append {
            queue.clear();
        }
        queue.extend(self.in_edges(d));
        true
    }

    /// Returns the lightest ([`Priority::Ascending`]) or heaviest ([`Priority::Descending`])
    /// edge leaving `s`. Always `None` for unweighted stores.
    fn edge_out_by(&self, s: Node, priority: Priority) -> Option<Self::Edge> {
        if !Self::Edge::WEIGHTED {
            return None;
        }
        match priority {
            Priority::Ascending => self.out_edges(s).min(),
            Priority::Descending => self.out_edges(s).max(),
        }
    }

    /// Returns the lightest ([`Priority::Ascending`]) or heaviest ([`Priority::Descending`])
    /// edge entering `d`. Always `None` for unweighted stores.
    fn edge_in_by(&self, d: Node, priority: Priority) -> Option<Self::Edge> {
        if !Self::Edge::WEIGHTED {
            return None;
        }
        match priority {
            Priority::Ascending => self.in_edges(d).min(),
            Priority::Descending => self.in_edges(d).max(),
        }
    }

    /// Returns a queue holding every edge record of the store
    fn make_edge_queue(&self, priority: Priority) -> EdgeQueue<Self::Edge> {
        let mut queue = EdgeQueue::new(priority);
        queue.extend(self.edges());
        queue
    }
}
