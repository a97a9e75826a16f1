/*!
# Adjacency List Backend

Sparse storage: every registered vertex owns its payload and a [`Chain`] of outgoing
[`Link`]s kept sorted ascending by destination without duplicates.

Lookups, insertions and deletions on a chain are `O(deg)`; computing in-degrees or
erasing a vertex requires a scan over all vertices. This favors memory compactness and is
the right choice for sparse graphs whose index range is not known in advance.
*/

use std::{collections::BTreeMap, marker::PhantomData};

use smallvec::SmallVec;

use super::*;

/// One outgoing edge record of a chain
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    pub destination: Node,
    pub weight: Weight,
}

/// Ordered sequence of outgoing links; sorted ascending by destination
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chain(SmallVec<[Link; 4]>);

impl Chain {
    /// Returns the number of links
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the links in ascending order of destination
    pub fn as_slice(&self) -> &[Link] {
        &self.0
    }

    fn position(&self, d: Node) -> Result<usize, usize> {
        self.0.binary_search_by_key(&d, |link| link.destination)
    }

    /// Returns the link to `d` if present
    pub fn get(&self, d: Node) -> Option<&Link> {
        self.position(d).ok().map(|i| &self.0[i])
    }

    /// Inserts a link to `d` keeping the chain sorted.
    /// If `d` is already linked, its weight is overwritten.
    /// Returns *true* if a new link was created.
    fn link(&mut self, d: Node, weight: Weight) -> bool {
        match self.position(d) {
            Ok(i) => {
                self.0[i].weight = weight;
                false
            }
            Err(i) => {
                self.0.insert(
                    i,
                    Link {
                        destination: d,
                        weight,
                    },
                );
                true
            }
        }
    }

    /// Removes the link to `d`. Returns *true* if it was present.
    fn unlink(&mut self, d: Node) -> bool {
        match self.position(d) {
            Ok(i) => {
                self.0.remove(i);
                true
            }
            Err(_) => false,
        }
    }
}

/// Adjacency-list backend storing `T` per vertex and edges of model `E`
#[derive(Clone)]
pub struct ListStore<T, E: EdgeModel> {
    vertices: BTreeMap<Node, (T, Chain)>,
    directed: bool,
    sentinel: Weight,
    _edge: PhantomData<E>,
}

impl<T, E: EdgeModel> ListStore<T, E> {
    /// Creates an empty store with the default sentinel
    pub fn new(directed: bool) -> Self {
        Self::with_sentinel(directed, DISCONNECTED)
    }

    /// Creates an empty store reporting `sentinel` for missing edges.
    /// The sentinel must be below [`DEFAULT_WEIGHT`] (see [`GraphConfig::validate`](crate::config::GraphConfig::validate)).
    pub fn with_sentinel(directed: bool, sentinel: Weight) -> Self {
        debug_assert!(sentinel < DEFAULT_WEIGHT);
        Self {
            vertices: BTreeMap::new(),
            directed,
            sentinel,
            _edge: PhantomData,
        }
    }

    /// Returns the chain of outgoing links of `v`
    pub fn chain(&self, v: Node) -> Option<&Chain> {
        self.vertices.get(&v).map(|(_, chain)| chain)
    }

    fn to_edge(s: Node, link: &Link) -> E {
        E::with_weight(s, link.destination, link.weight)
    }

    /// Links `(s, d)` without checking the endpoints
    fn link(&mut self, s: Node, d: Node, weight: Weight) {
        if let Some((_, chain)) = self.vertices.get_mut(&s) {
            chain.link(d, weight);
        }
    }

    /// Unlinks `(s, d)` without checking the endpoints
    fn unlink(&mut self, s: Node, d: Node) {
        if let Some((_, chain)) = self.vertices.get_mut(&s) {
            chain.unlink(d);
        }
    }
}

impl<T, E: EdgeModel> Default for ListStore<T, E> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T, E: EdgeModel> VertexEdgeStore for ListStore<T, E> {
    type Payload = T;
    type Edge = E;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn sentinel(&self) -> Weight {
        self.sentinel
    }

    fn at(&self, v: Node) -> Option<&T> {
        self.vertices.get(&v).map(|(payload, _)| payload)
    }

    fn at_mut(&mut self, v: Node) -> Option<&mut T> {
        self.vertices.get_mut(&v).map(|(payload, _)| payload)
    }

    fn register_vertex(&mut self, v: Node, payload: T) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, (payload, Chain::default()));
        trace!(vertex = v, "registered vertex");
        true
    }

    fn erase_vertex(&mut self, v: Node) -> bool {
        let Some((_, chain)) = self.vertices.remove(&v) else {
            return false;
        };

        let mut unlinked = 0usize;
        for (_, other) in self.vertices.values_mut() {
            unlinked += other.unlink(v) as usize;
        }

        debug!(
            vertex = v,
            outgoing = chain.len(),
            incoming = unlinked,
            "erased vertex"
        );
        true
    }

    fn has_vertex(&self, v: Node) -> bool {
        self.vertices.contains_key(&v)
    }

    fn vertices_size(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices.keys().copied()
    }

    fn out_edges(&self, s: Node) -> impl Iterator<Item = E> + '_ {
        self.chain(s)
            .into_iter()
            .flat_map(move |chain| chain.as_slice().iter().map(move |link| Self::to_edge(s, link)))
    }

    fn in_edges(&self, d: Node) -> impl Iterator<Item = E> + '_ {
        let registered = self.vertices.contains_key(&d);
        self.vertices
            .iter()
            .filter(move |_| registered)
            .filter_map(move |(&s, (_, chain))| chain.get(d).map(|link| Self::to_edge(s, link)))
    }

    fn weight_of_edge(&self, s: Node, d: Node) -> Weight {
        self.chain(s)
            .and_then(|chain| chain.get(d))
            .map_or(self.sentinel, |link| link.weight)
    }

    fn insert_weighted_edge(&mut self, s: Node, d: Node, weight: Weight) -> bool {
        if !self.has_vertex(s) || !self.has_vertex(d) {
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

        self.link(s, d, weight);
        if !self.directed {
            self.link(d, s, weight);
        }

        trace!(s, d, weight, "inserted edge");
        true
    }

    fn erase_edge(&mut self, s: Node, d: Node) -> bool {
        if !self.has_vertex(s) || !self.has_vertex(d) {
            return false;
        }

        self.unlink(s, d);
        if !self.directed {
            self.unlink(d, s);
        }

        trace!(s, d, "erased edge");
        true
    }

    fn has_edge(&self, s: Node, d: Node) -> bool {
        self.chain(s).is_some_and(|chain| chain.get(d).is_some())
    }

    fn out_degree(&self, v: Node) -> NumNodes {
        self.chain(v).map_or(0, |chain| chain.len() as NumNodes)
    }

    fn number_of_records(&self) -> NumEdges {
        self.vertices
            .values()
            .map(|(_, chain)| chain.len() as NumEdges)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn chain_stays_sorted() {
        let mut store = ListStore::<(), Edge>::new(true);
        for v in 0..10 {
            assert!(store.register_vertex(v, ()));
        }

        for d in [7, 2, 9, 0, 5, 2, 7] {
            assert!(store.insert_edge(4, d));
        }

        let dests = store
            .chain(4)
            .unwrap()
            .as_slice()
            .iter()
            .map(|l| l.destination)
            .collect_vec();
        assert_eq!(dests, vec![0, 2, 5, 7, 9]);
        assert_eq!(store.edge_size(), 5);
    }

    #[test]
    fn weight_updated_in_place() {
        let mut store = ListStore::<(), WeightedEdge>::new(false);
        store.register_vertex(1, ());
        store.register_vertex(2, ());

        assert!(store.insert_weighted_edge(1, 2, 5));
        assert!(store.insert_weighted_edge(1, 2, 8));

        assert_eq!(store.weight_of_edge(1, 2), 8);
        assert_eq!(store.weight_of_edge(2, 1), 8);
        assert_eq!(store.edge_size(), 1);
        assert_eq!(store.number_of_records(), 2);
    }

    #[test]
    fn rejects_weight_at_sentinel() {
        let mut store = ListStore::<(), WeightedEdge>::new(true);
        store.register_vertex(0, ());
        store.register_vertex(1, ());

        assert!(!store.insert_weighted_edge(0, 1, DISCONNECTED));
        assert!(!store.has_edge(0, 1));
        assert!(store.insert_weighted_edge(0, 1, 0));
        assert!(store.has_edge(0, 1));
    }

    #[test]
    fn unweighted_ignores_weight() {
        let mut store = ListStore::<(), Edge>::new(true);
        store.register_vertex(0, ());
        store.register_vertex(1, ());

        assert!(store.insert_weighted_edge(0, 1, -20));
        assert_eq!(store.weight_of_edge(0, 1), DEFAULT_WEIGHT);
        assert!(store.exists_edge(&Edge(0, 1)));
    }

    #[test]
    fn erase_vertex_cascades() {
        let mut store = ListStore::<&str, Edge>::new(true);
        store.register_vertex(0, "a");
        store.register_vertex(1, "b");
        store.register_vertex(2, "c");

        store.insert_edge(0, 1);
        store.insert_edge(1, 2);
        store.insert_edge(2, 1);
        store.insert_edge(2, 0);

        assert!(store.erase_vertex(1));
        assert!(!store.erase_vertex(1));
        assert!(!store.has_vertex(1));
        assert_eq!(store.at(1), None);

        assert_eq!(store.edges().collect_vec(), vec![Edge(2, 0)]);
        assert_eq!(store.in_degree(0), 1);
        assert_eq!(store.out_degree(0), 0);
    }

    #[test]
    fn sparse_indices() {
        let mut store = ListStore::<u64, WeightedEdge>::new(true);
        assert!(store.register_vertex(1_000_000, 7));
        assert!(store.register_vertex(3, 9));
        assert!(!store.register_vertex(3, 10));
        assert_eq!(store.at(3), Some(&9));

        assert!(store.insert(WeightedEdge::new(1_000_000, 3, 12)));
        assert_eq!(store.vertices().collect_vec(), vec![3, 1_000_000]);
        assert_eq!(
            store.in_edges(3).collect_vec(),
            vec![WeightedEdge::new(1_000_000, 3, 12)]
        );
        assert!(!store.insert_edge(3, 4));
        assert!(!store.erase_edge(3, 4));
    }
}

test_store_ops!(
    test_list_undirected,
    ListStore::<Node, Edge>::new(false),
    Edge,
    true,
    (VertexLifecycle, EdgeEditing, Degrees, EdgeEnumeration)
);

test_store_ops!(
    test_list_directed,
    ListStore::<Node, Edge>::new(true),
    Edge,
    false,
    (VertexLifecycle, EdgeEditing, Degrees, EdgeEnumeration)
);

test_store_ops!(
    test_list_weighted_directed,
    ListStore::<Node, WeightedEdge>::new(true),
    WeightedEdge,
    false,
    (VertexLifecycle, EdgeEditing, Degrees, EdgeEnumeration)
);
