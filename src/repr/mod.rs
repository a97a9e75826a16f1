/*!
# Storage Backends

Both backends implement [`VertexEdgeStore`]:

- [`ListStore`]: one sorted outgoing [`Chain`] per vertex, arbitrary indices. Use for sparse graphs.
- [`MatrixStore`]: fixed `capacity x capacity` cell table, indices `0..capacity`. Use for
  dense graphs of known size.

Most users select a backend through [`GraphConfig`](crate::config::GraphConfig) and work with
[`Graph`](crate::graph::Graph) instead of using these types directly.
*/

use tracing::{debug, trace, warn};

use crate::{edge::*, node::*, ops::*, testing::test_store_ops};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;
