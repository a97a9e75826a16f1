/*!
`smartgraph` is a generic in-memory graph container. A graph stores a payload per vertex and
directed or undirected, weighted or unweighted edges over one of two storage backends chosen
when the graph is built.

# Representation

We represent **vertices** as `u32` indices. Indices do not need to be contiguous: a vertex
exists once it has been registered together with its payload.
For **edges**, we use the tuple-struct `Edge(Node, Node)` or, for weighted graphs, the
struct `WeightedEdge { source, destination, weight }` with an `i16` weight.

### Directed vs Undirected

- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.
- In an **undirected** graph, every edge is stored as two mirrored records, so
  inserting or erasing `(u, v)` always affects `(v, u)` as well.

### Weighted vs Unweighted

Weightedness is decided by the edge model: a `Graph<T, WeightedEdge>` stores weights while a
`Graph<T, Edge>` reports [`DEFAULT_WEIGHT`](edge::DEFAULT_WEIGHT) for every edge. Missing
edges are reported with a sentinel weight ([`DISCONNECTED`](edge::DISCONNECTED) by default)
which no stored edge may carry.

### Available Representations

See the [`repr`] module for both storage backends:

- [`ListStore`](crate::repr::ListStore): one sorted outgoing chain per vertex, unbounded indices
- [`MatrixStore`](crate::repr::MatrixStore): dense table with a fixed capacity

# Design

Both backends implement the same [`VertexEdgeStore`](ops::VertexEdgeStore) trait. The
[`Graph`](graph::Graph) facade picks one from a validated [`GraphConfig`](config::GraphConfig)
and forwards the full contract to it. Structural operations never panic and never raise:
they report failure by returning `false` or `None`. The only error values are invalid
configurations and invalid hops of a checked [`Cursor`](cursor::Cursor).

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, configuration, the store trait and
  the graph facade,
- [`algo`] includes bulk construction from edge containers and subgraph extraction,
- [`io`] includes the human-readable dump of a graph.

In most use-cases, `use smartgraph::{prelude::*, algo::*};` suffices for your needs.

```
use smartgraph::{algo::*, prelude::*};

let graph = Graph::<Node>::from_edge_containers(
    GraphConfig::list(),
    [vec![Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(1, 2), Edge(1, 3), Edge(2, 3)]],
).unwrap();

assert_eq!(graph.edge_size(), 6);
assert!(graph.vertices().all(|v| graph.degree(v) == 3));

let sub = graph.make_subgraph([1, 3, 0]);
assert_eq!(sub.vertices_size(), 4);
```

The library installs no `tracing` subscriber. Mutations are logged at `trace` level, cascading
deletes and bulk construction at `debug` level and rejected edge weights at `warn` level.
*/

pub mod algo;
pub mod config;
pub mod cursor;
pub mod edge;
pub mod error;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `smartgraph::prelude` includes definitions for vertices and edges, the configuration and
/// error types, the store trait, both backends, cursors and the graph facade.
pub mod prelude {
    pub use super::{
        config::*, cursor::*, edge::*, error::*, graph::*, io::DumpWrite, node::*, ops::*,
        repr::*,
    };
}
