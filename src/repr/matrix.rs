/*!
# Adjacency Matrix Backend

Dense storage with a fixed capacity chosen at construction: one cell per
`(source, destination)` pair for indices `0..capacity`.

- Unweighted stores keep one [`NodeBitSet`] row per vertex.
- Weighted stores keep a row-major table of weights where the sentinel marks a missing edge.

Live vertices and their payloads are tracked separately in a sparse map. Edge operations are
`O(1)`, degrees and enumeration are `O(capacity)`. The capacity never changes.
*/

use std::{collections::BTreeMap, marker::PhantomData};

use super::*;

/// The cell table of a [`MatrixStore`]
#[derive(Clone)]
enum Cells {
    Bits(Vec<NodeBitSet>),
    Weights(Vec<Weight>),
}

/// Adjacency-matrix backend storing `T` per vertex and edges of model `E`
#[derive(Clone)]
pub struct MatrixStore<T, E: EdgeModel> {
    cells: Cells,
    payloads: BTreeMap<Node, T>,
    capacity: NumNodes,
    directed: bool,
    sentinel: Weight,
    _edge: PhantomData<E>,
}

impl<T, E: EdgeModel> MatrixStore<T, E> {
    /// Creates an empty store for indices `0..capacity` with the default sentinel
    pub fn new(capacity: NumNodes, directed: bool) -> Self {
        Self::with_sentinel(capacity, directed, DISCONNECTED)
    }

    /// Creates an empty store for indices `0..capacity` reporting `sentinel` for missing edges.
    /// The sentinel must be below [`DEFAULT_WEIGHT`] (see [`GraphConfig::validate`](crate::config::GraphConfig::validate)).
    pub fn with_sentinel(capacity: NumNodes, directed: bool, sentinel: Weight) -> Self {
        debug_assert!(sentinel < DEFAULT_WEIGHT);
        let cells = if E::WEIGHTED {
            Cells::Weights(vec![sentinel; capacity as usize * capacity as usize])
        } else {
            Cells::Bits(vec![NodeBitSet::new(capacity); capacity as usize])
        };

        Self {
            cells,
            payloads: BTreeMap::new(),
            capacity,
            directed,
            sentinel,
            _edge: PhantomData,
        }
    }

    /// Returns the fixed number of addressable indices
    pub fn capacity(&self) -> NumNodes {
        self.capacity
    }

    #[inline]
    fn index(&self, s: Node, d: Node) -> usize {
        s as usize * self.capacity as usize + d as usize
    }

    /// Returns *true* if both endpoints are in range and live
    #[inline]
    fn check(&self, s: Node, d: Node) -> bool {
        self.has_vertex(s) && self.has_vertex(d)
    }

    /// Reads a cell; `None` if it holds no edge. Endpoints must be in range.
    fn cell(&self, s: Node, d: Node) -> Option<Weight> {
        match &self.cells {
            Cells::Bits(rows) => rows[s as usize].get_bit(d).then_some(DEFAULT_WEIGHT),
            Cells::Weights(table) => {
                let weight = table[self.index(s, d)];
                (weight > self.sentinel).then_some(weight)
            }
        }
    }

    fn set_cell(&mut self, s: Node, d: Node, weight: Weight) {
        let idx = self.index(s, d);
        match &mut self.cells {
            Cells::Bits(rows) => {
                rows[s as usize].set_bit(d);
            }
            Cells::Weights(table) => table[idx] = weight,
        }
    }

    fn clear_cell(&mut self, s: Node, d: Node) {
        let idx = self.index(s, d);
        match &mut self.cells {
            Cells::Bits(rows) => {
                rows[s as usize].clear_bit(d);
            }
            Cells::Weights(table) => table[idx] = self.sentinel,
        }
    }
}

impl<T, E: EdgeModel> VertexEdgeStore for MatrixStore<T, E> {
    type Payload = T;
    type Edge = E;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn sentinel(&self) -> Weight {
        self.sentinel
    }

    fn at(&self, v: Node) -> Option<&T> {
        self.payloads.get(&v)
    }

    fn at_mut(&mut self, v: Node) -> Option<&mut T> {
        self.payloads.get_mut(&v)
    }

    fn register_vertex(&mut self, v: Node, payload: T) -> bool {
        if v >= self.capacity || self.payloads.contains_key(&v) {
            return false;
        }
        self.payloads.insert(v, payload);
        trace!(vertex = v, "registered vertex");
        true
    }

    fn erase_vertex(&mut self, v: Node) -> bool {
        if self.payloads.remove(&v).is_none() {
            return false;
        }

        // Row and column are cleared regardless of direction
        for u in 0..self.capacity {
            self.clear_cell(v, u);
            self.clear_cell(u, v);
        }

        debug!(vertex = v, "erased vertex");
        true
    }

    fn has_vertex(&self, v: Node) -> bool {
        self.payloads.contains_key(&v)
    }

    fn vertices_size(&self) -> NumNodes {
        self.payloads.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.payloads.keys().copied()
    }

    fn out_edges(&self, s: Node) -> impl Iterator<Item = E> + '_ {
        let live = self.has_vertex(s);
        (0..self.capacity)
            .filter(move |_| live)
            .filter_map(move |d| self.cell(s, d).map(|w| E::with_weight(s, d, w)))
    }

    fn in_edges(&self, d: Node) -> impl Iterator<Item = E> + '_ {
        let live = self.has_vertex(d);
        (0..self.capacity)
            .filter(move |_| live)
            .filter_map(move |s| self.cell(s, d).map(|w| E::with_weight(s, d, w)))
    }

    fn weight_of_edge(&self, s: Node, d: Node) -> Weight {
        if !self.check(s, d) {
            return self.sentinel;
        }
        self.cell(s, d).unwrap_or(self.sentinel)
    }

    fn insert_weighted_edge(&mut self, s: Node, d: Node, weight: Weight) -> bool {
        if !self.check(s, d) {
            return false;
        }

        let weight = if E::WEIGHTED {
            if weight <= self.sentinel {
                warn!(s, d, weight, "rejected edge weight at or below the sentinel");
                return false;
            }
            weight
        } else {
            DEFAULT_WEIGHT
        };

        self.set_cell(s, d, weight);
        if !self.directed {
            self.set_cell(d, s, weight);
        }

        trace!(s, d, weight, "inserted edge");
        true
    }

    fn erase_edge(&mut self, s: Node, d: Node) -> bool {
        if !self.check(s, d) {
            return false;
        }

        self.clear_cell(s, d);
        if !self.directed {
            self.clear_cell(d, s);
        }

        trace!(s, d, "erased edge");
        true
    }

    fn out_degree(&self, v: Node) -> NumNodes {
        if !self.has_vertex(v) {
            return 0;
        }
        match &self.cells {
            Cells::Bits(rows) => rows[v as usize].cardinality(),
            Cells::Weights(_) => self.out_edges(v).count() as NumNodes,
        }
    }
}


test_store_ops!(
    test_matrix_undirected,
    MatrixStore::<Node, Edge>::new(64, false),
    Edge,
    true,
    (VertexLifecycle, EdgeEditing, Degrees, EdgeEnumeration)
);

test_store_ops!(
    test_matrix_directed,
    MatrixStore::<Node, Edge>::new(64, true),
    Edge,
    false,
    (VertexLifecycle, EdgeEditing, Degrees, EdgeEnumeration)
);

test_store_ops!(
    test_matrix_weighted_undirected,
    MatrixStore::<Node, WeightedEdge>::new(64, false),
    WeightedEdge,
    true,
    (VertexLifecycle, EdgeEditing, Degrees, EdgeEnumeration)
);
