/*!
# Edge Models

An edge is an ordered pair `(source, destination)`, optionally carrying a [`Weight`].
Which of the two models a graph uses is fixed by its edge type:

- [`Edge`] for unweighted graphs,
- [`WeightedEdge`] for weighted graphs.

Both implement [`EdgeModel`]. A weighted edge can be turned into an unweighted one by
dropping its weight, never the other way around.

Weighted edges are ordered by weight which makes them usable in an [`EdgeQueue`].
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    fmt::{Debug, Display},
    hash::Hash,
};

use crate::node::Node;

/// Signed weight domain of weighted edges
pub type Weight = i16;

/// Weight assigned to an edge if none is provided
pub const DEFAULT_WEIGHT: Weight = 1;

/// Default sentinel marking a missing edge in weighted storage.
/// An edge is considered present iff its weight is strictly greater than the sentinel.
pub const DISCONNECTED: Weight = -1;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Common interface of [`Edge`] and [`WeightedEdge`]
pub trait EdgeModel: Copy + Eq + Ord + Hash + Debug + Display {
    /// *true* if edges of this model carry a weight
    const WEIGHTED: bool;

    /// Creates an edge. Unweighted models ignore `weight`.
    fn with_weight(source: Node, destination: Node, weight: Weight) -> Self;

    /// Creates an edge with [`DEFAULT_WEIGHT`]
    fn new(source: Node, destination: Node) -> Self {
        Self::with_weight(source, destination, DEFAULT_WEIGHT)
    }

    /// Returns the endpoint the edge leaves
    fn source(&self) -> Node;

    /// Returns the endpoint the edge enters
    fn destination(&self) -> Node;

    /// Returns the weight of the edge; [`DEFAULT_WEIGHT`] for unweighted edges
    fn weight(&self) -> Weight;

    /// Reverses the edge by switching the endpoints (the weight is kept)
    fn reverse(&self) -> Self {
        Self::with_weight(self.destination(), self.source(), self.weight())
    }

    /// Returns true if both endpoints are equal
    fn is_loop(&self) -> bool {
        self.source() == self.destination()
    }
}

/// An unweighted edge `(source, destination)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl EdgeModel for Edge {
    const WEIGHTED: bool = false;

    fn with_weight(source: Node, destination: Node, _weight: Weight) -> Self {
        Edge(source, destination)
    }

    fn source(&self) -> Node {
        self.0
    }

    fn destination(&self) -> Node {
        self.1
    }

    fn weight(&self) -> Weight {
        DEFAULT_WEIGHT
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// Dropping the weight is the only allowed conversion between the two models
impl From<WeightedEdge> for Edge {
    fn from(value: WeightedEdge) -> Self {
        Edge(value.source, value.destination)
    }
}

/// An edge `(source, destination)` carrying a weight.
///
/// Edges compare by weight first; source and destination only break ties so that
/// `Ord` stays consistent with `Eq`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub source: Node,
    pub destination: Node,
    pub weight: Weight,
}

impl WeightedEdge {
    pub const fn new(source: Node, destination: Node, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.source, self.destination, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.source.cmp(&other.source))
            .then(self.destination.cmp(&other.destination))
    }
}

impl EdgeModel for WeightedEdge {
    const WEIGHTED: bool = true;

    fn with_weight(source: Node, destination: Node, weight: Weight) -> Self {
        WeightedEdge::new(source, destination, weight)
    }

    fn source(&self) -> Node {
        self.source
    }

    fn destination(&self) -> Node {
        self.destination
    }

    fn weight(&self) -> Weight {
        self.weight
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        WeightedEdge::new(value.0, value.1, DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

/// Order in which an [`EdgeQueue`] hands out its edges
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Smallest edge first (lightest for weighted edges)
    Ascending,
    /// Largest edge first (heaviest for weighted edges)
    Descending,
}

/// A priority queue of edges.
///
/// Popping (or iterating) yields edges in the [`Priority`] the queue was created with.
#[derive(Debug, Clone)]
pub enum EdgeQueue<E: Ord> {
    Ascending(BinaryHeap<Reverse<E>>),
    Descending(BinaryHeap<E>),
}

impl<E: Ord> EdgeQueue<E> {
    /// Creates an empty queue
    pub fn new(priority: Priority) -> Self {
        match priority {
            Priority::Ascending => Self::Ascending(BinaryHeap::new()),
            Priority::Descending => Self::Descending(BinaryHeap::new()),
        }
    }

    /// Returns the order this queue yields its edges in
    pub fn priority(&self) -> Priority {
        match self {
            Self::Ascending(_) => Priority::Ascending,
            Self::Descending(_) => Priority::Descending,
        }
    }

    pub fn push(&mut self, edge: E) {
        match self {
            Self::Ascending(heap) => heap.push(Reverse(edge)),
            Self::Descending(heap) => heap.push(edge),
        }
    }

    /// Removes and returns the edge with the highest priority
    pub fn pop(&mut self) -> Option<E> {
        match self {
            Self::Ascending(heap) => heap.pop().map(|Reverse(e)| e),
            Self::Descending(heap) => heap.pop(),
        }
    }

    /// Returns the edge with the highest priority without removing it
    pub fn peek(&self) -> Option<&E> {
        match self {
            Self::Ascending(heap) => heap.peek().map(|Reverse(e)| e),
            Self::Descending(heap) => heap.peek(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ascending(heap) => heap.len(),
            Self::Descending(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        match self {
            Self::Ascending(heap) => heap.clear(),
            Self::Descending(heap) => heap.clear(),
        }
    }
}

impl<E: Ord> Extend<E> for EdgeQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for edge in iter {
            self.push(edge);
        }
    }
}

/// Drains the queue in priority order
impl<E: Ord> Iterator for EdgeQueue<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}
