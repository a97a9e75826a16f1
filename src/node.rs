/*!
# Node Representation

Vertices are addressed by an index of type `Node = u32`.
Indices do not have to be dense: the adjacency-list backend accepts any index, the
adjacency-matrix backend accepts indices below its capacity.
*/

use stream_bitset::bitset::BitSetImpl;

/// Index of a vertex; every value except [`INVALID_NODE`] is addressable
pub type Node = u32;

/// Position of an unbound cursor
pub const INVALID_NODE: Node = Node::MAX;

/// Vertex counts, degrees and matrix capacities
pub type NumNodes = Node;

/// BitSet for Nodes; one row of the unweighted adjacency matrix
pub type NodeBitSet = BitSetImpl<Node>;
