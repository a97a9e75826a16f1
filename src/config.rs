/*!
# Graph Configuration

A [`GraphConfig`] fixes everything about a graph that never changes after construction:

- the storage [`Backend`] (adjacency list or fixed-capacity adjacency matrix),
- whether edges are directed,
- the sentinel weight marking a missing edge.

Whether edges carry a weight is decided statically by the edge model of the graph
(see [`EdgeModel`]). The configuration is validated exactly once, when the graph is built.

```
use smartgraph::prelude::*;

let config = GraphConfig::matrix(10).directed(true);
assert!(config.validate::<WeightedEdge>().is_ok());
assert!(GraphConfig::matrix(0).validate::<Edge>().is_err());
```
*/

use std::fmt::Display;

use crate::{edge::*, error::ConfigError, node::*};

/// Storage strategy of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Backend {
    /// One sorted outgoing chain per vertex; unbounded indices
    List,
    /// Dense `capacity x capacity` table; indices below `capacity`
    Matrix,
}

impl Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::List => write!(f, "adjacency list"),
            Backend::Matrix => write!(f, "adjacency matrix"),
        }
    }
}

/// Static configuration of a graph, built with setters
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GraphConfig {
    backend: Backend,
    directed: bool,
    capacity: NumNodes,
    disconnected: Weight,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::list()
    }
}

impl GraphConfig {
    /// Undirected graph on the adjacency-list backend
    pub fn list() -> Self {
        Self {
            backend: Backend::List,
            directed: false,
            capacity: 0,
            disconnected: DISCONNECTED,
        }
    }

    /// Undirected graph on an adjacency matrix holding indices `0..capacity`
    pub fn matrix(capacity: NumNodes) -> Self {
        Self {
            backend: Backend::Matrix,
            directed: false,
            capacity,
            disconnected: DISCONNECTED,
        }
    }

    /// Sets whether edges are directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets the weight that marks a missing edge (`-1` by default)
    pub fn disconnected(mut self, sentinel: Weight) -> Self {
        self.disconnected = sentinel;
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the fixed capacity for matrices and `None` for lists
    pub fn capacity(&self) -> Option<NumNodes> {
        (self.backend == Backend::Matrix).then_some(self.capacity)
    }

    pub fn sentinel(&self) -> Weight {
        self.disconnected
    }

    /// Checks the configuration for a graph with edge model `E`.
    ///
    /// The sentinel must stay below [`DEFAULT_WEIGHT`] for both models: unweighted stores
    /// report [`DEFAULT_WEIGHT`] for every present edge, so a larger sentinel would hide them.
    /// Only weighted models can run out of legal weights above the sentinel.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroCapacity`] for matrices without capacity,
    /// - [`ConfigError::NoLegalWeight`] if `E` is weighted and the sentinel is `Weight::MAX`,
    /// - [`ConfigError::SentinelCollidesWithDefault`] if the default weight would not be
    ///   a legal weight.
    pub fn validate<E: EdgeModel>(&self) -> Result<(), ConfigError> {
        if self.backend == Backend::Matrix && self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        if E::WEIGHTED && self.disconnected == Weight::MAX {
            return Err(ConfigError::NoLegalWeight(self.disconnected));
        }

        if self.disconnected >= DEFAULT_WEIGHT {
            return Err(ConfigError::SentinelCollidesWithDefault {
                sentinel: self.disconnected,
                default: DEFAULT_WEIGHT,
            });
        }

        Ok(())
    }

    /// Returns *true* if `weight` marks an existing edge
    #[inline]
    pub fn is_connected(&self, weight: Weight) -> bool {
        weight > self.disconnected
    }
}
