/*!
# Cursors

A [`Cursor`] is bound to one store and one current vertex and walks the store one edge at a
time. Hops are validated:

- [`Cursor::advance`] moves from `edge.source()` to `edge.destination()` and only applies if
  the cursor currently sits at `edge.source()`,
- [`Cursor::back`] is the inverse and requires the cursor to sit at `edge.destination()`.

A *checked* cursor additionally requires the edge to exist in the store (with exactly the
given weight) and reports a [`CursorError::InvalidOperation`] otherwise. An *unchecked* cursor
trusts the caller.

A cursor created at an unregistered vertex is unbound: it has no position, dereferences to
nothing and never moves.

```
use smartgraph::prelude::*;

let graph = Graph::<Node>::from_edge_containers(
    GraphConfig::list().directed(true),
    [vec![Edge(0, 1), Edge(1, 2)]],
).unwrap();

let mut cursor = graph.cursor(0);
assert_eq!(cursor.advance(&Edge(0, 1)), Ok(true));
assert_eq!(cursor.position(), Some(1));
assert!(cursor.advance(&Edge(1, 0)).is_err());
```
*/

use crate::{edge::*, error::CursorError, node::*, ops::*};

/// Position of a walk over a [`VertexEdgeStore`]
#[derive(Debug)]
pub struct Cursor<'a, S, const CHECKED: bool> {
    store: Option<&'a S>,
    position: Node,
}

/// Cursor that verifies every hop against the store
pub type CheckedCursor<'a, S> = Cursor<'a, S, true>;

/// Cursor that only verifies positions
pub type UncheckedCursor<'a, S> = Cursor<'a, S, false>;

impl<S, const CHECKED: bool> Clone for Cursor<'_, S, CHECKED> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, const CHECKED: bool> Copy for Cursor<'_, S, CHECKED> {}

impl<'a, S, const CHECKED: bool> Cursor<'a, S, CHECKED>
where
    S: VertexEdgeStore,
{
    /// Creates a cursor at `v`; unbound if `v` is not registered in `store`
    pub fn new(store: &'a S, v: Node) -> Self {
        if store.has_vertex(v) {
            Self {
                store: Some(store),
                position: v,
            }
        } else {
            Self {
                store: None,
                position: INVALID_NODE,
            }
        }
    }

    /// Returns *true* if this cursor verifies hops against the store
    pub const fn is_checked(&self) -> bool {
        CHECKED
    }

    /// Returns *true* if the cursor was created at a registered vertex
    pub fn is_bound(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the current vertex or `None` if unbound
    pub fn position(&self) -> Option<Node> {
        self.store.map(|_| self.position)
    }

    /// Returns the payload of the current vertex
    pub fn payload(&self) -> Option<&'a S::Payload> {
        self.store.and_then(|store| store.at(self.position))
    }

    /// Returns an iterator over the edges leaving the current vertex
    pub fn out_edges(&self) -> impl Iterator<Item = S::Edge> + use<'a, S, CHECKED> {
        let position = self.position;
        self.store
            .into_iter()
            .flat_map(move |store| store.out_edges(position))
    }

    /// Moves along `edge` if the cursor sits at its source.
    ///
    /// Returns `Ok(true)` if the cursor moved and `Ok(false)` if it is unbound or positioned
    /// elsewhere.
    ///
    /// # Errors
    /// A checked cursor returns [`CursorError::InvalidOperation`] if `edge` does not exist.
    pub fn advance(&mut self, edge: &S::Edge) -> Result<bool, CursorError> {
        self.hop(edge, edge.source(), edge.destination())
    }

    /// Moves backwards along `edge` if the cursor sits at its destination.
    ///
    /// Returns `Ok(true)` if the cursor moved and `Ok(false)` if it is unbound or positioned
    /// elsewhere.
    ///
    /// # Errors
    /// A checked cursor returns [`CursorError::InvalidOperation`] if `edge` does not exist.
    pub fn back(&mut self, edge: &S::Edge) -> Result<bool, CursorError> {
        self.hop(edge, edge.destination(), edge.source())
    }

    fn hop(&mut self, edge: &S::Edge, from: Node, to: Node) -> Result<bool, CursorError> {
        let Some(store) = self.store else {
            return Ok(false);
        };

        if self.position != from {
            return Ok(false);
        }

        if CHECKED && !store.exists_edge(edge) {
            return Err(CursorError::InvalidOperation {
                from: edge.source(),
                to: edge.destination(),
                weight: edge.weight(),
            });
        }

        self.position = to;
        Ok(true)
    }
}

impl<'a, S> From<UncheckedCursor<'a, S>> for CheckedCursor<'a, S> {
    fn from(value: UncheckedCursor<'a, S>) -> Self {
        Self {
            store: value.store,
            position: value.position,
        }
    }
}

impl<'a, S> From<CheckedCursor<'a, S>> for UncheckedCursor<'a, S> {
    fn from(value: CheckedCursor<'a, S>) -> Self {
        Self {
            store: value.store,
            position: value.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{config::GraphConfig, graph::Graph};

    fn path() -> Graph<&'static str, WeightedEdge> {
        let mut graph = Graph::new(GraphConfig::matrix(8).directed(true)).unwrap();
        graph.register_vertex(0, "a");
        graph.register_vertex(1, "b");
        graph.register_vertex(2, "c");
        graph.insert_weighted_edge(0, 1, 5);
        graph.insert_weighted_edge(1, 2, 6);
        graph
    }

    #[test]
    fn unbound_cursor() {
        let graph = path();
        let mut cursor = graph.cursor(7);

        assert!(!cursor.is_bound());
        assert_eq!(cursor.position(), None);
        assert_eq!(cursor.payload(), None);
        assert_eq!(cursor.out_edges().count(), 0);
        assert_eq!(cursor.advance(&WeightedEdge::new(7, 0, 1)), Ok(false));
    }

    #[test]
    fn walk_forth_and_back() {
        let graph = path();
        let mut cursor = graph.cursor(0);
        assert!(cursor.is_checked());
        assert_eq!(cursor.payload(), Some(&"a"));

        let hop = cursor.out_edges().collect_vec();
        assert_eq!(hop, vec![WeightedEdge::new(0, 1, 5)]);

        assert_eq!(cursor.advance(&hop[0]), Ok(true));
        assert_eq!(cursor.advance(&WeightedEdge::new(1, 2, 6)), Ok(true));
        assert_eq!(cursor.payload(), Some(&"c"));

        // wrong position is not an error
        assert_eq!(cursor.advance(&WeightedEdge::new(1, 2, 6)), Ok(false));
        assert_eq!(cursor.back(&WeightedEdge::new(0, 1, 5)), Ok(false));

        assert_eq!(cursor.back(&WeightedEdge::new(1, 2, 6)), Ok(true));
        assert_eq!(cursor.back(&WeightedEdge::new(0, 1, 5)), Ok(true));
        assert_eq!(cursor.position(), Some(0));
    }

    #[test]
    fn checked_rejects_missing_edges() {
        let graph = path();
        let mut cursor = graph.cursor(1);

        assert_eq!(
            cursor.advance(&WeightedEdge::new(1, 0, 5)),
            Err(CursorError::InvalidOperation {
                from: 1,
                to: 0,
                weight: 5
            })
        );
        // the weight has to match exactly
        assert!(cursor.advance(&WeightedEdge::new(1, 2, 7)).is_err());
        assert!(cursor.back(&WeightedEdge::new(2, 1, 6)).is_err());
        assert_eq!(cursor.position(), Some(1));
    }

    #[test]
    fn unchecked_trusts_the_caller() {
        let graph = path();
        let mut cursor = graph.unchecked_cursor(1);

        assert!(!cursor.is_checked());
        assert_eq!(cursor.advance(&WeightedEdge::new(1, 0, 5)), Ok(true));
        assert_eq!(cursor.position(), Some(0));

        let mut checked: CheckedCursor<'_, _> = cursor.into();
        assert!(checked.advance(&WeightedEdge::new(0, 2, 1)).is_err());
        assert_eq!(checked.advance(&WeightedEdge::new(0, 1, 5)), Ok(true));

        let unchecked: UncheckedCursor<'_, _> = checked.into();
        assert_eq!(unchecked.position(), Some(1));
    }
}
