/*!
# Graph Construction

This module adds bulk construction and subgraph extraction on top of [`Graph`]:
```rust
use smartgraph::{algo::*, prelude::*};
```

- [`Graph::from_edge_containers`] and [`Graph::extend_edges`] build index-payload graphs from
  plain edge collections, registering endpoints on the fly.
- [`Subgraph`] extracts the incident edges of a vertex subset into a new graph with the same
  configuration.
*/

mod construction;
mod subgraph;

use tracing::{debug, trace};

use crate::prelude::*;

pub use subgraph::*;
