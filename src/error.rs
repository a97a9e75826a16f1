/*!
# Errors

Structural operations (registering vertices, inserting edges, ...) report failure through
`bool`/`Option` returns. Only two situations produce an error value:

- an invalid [`GraphConfig`](crate::config::GraphConfig), rejected once at construction,
- a checked [`Cursor`](crate::cursor::Cursor) asked to hop along an edge that does not exist.
*/

use thiserror::Error;

use crate::{edge::Weight, node::*};

/// Reasons a [`GraphConfig`](crate::config::GraphConfig) is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("an adjacency matrix needs a capacity of at least one vertex")]
    ZeroCapacity,

    #[error("disconnected sentinel {sentinel} must be below the default weight {default}")]
    SentinelCollidesWithDefault { sentinel: Weight, default: Weight },

    #[error("disconnected sentinel {0} leaves no legal weight")]
    NoLegalWeight(Weight),
}

/// Errors raised by a checked [`Cursor`](crate::cursor::Cursor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("invalid hop along edge ({from},{to};{weight}): edge does not exist")]
    InvalidOperation {
        from: Node,
        to: Node,
        weight: Weight,
    },
}
