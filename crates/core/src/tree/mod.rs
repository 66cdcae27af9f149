//! Section trees stored as flat, pre-ordered node sequences.
//!
//! The node sequence is the arena: a node's subtree is the index range made of
//! the node itself and the maximal run of following nodes with a greater level.

pub mod builder;
pub mod outline;
pub mod types;

pub use builder::{TreeOptions, build_nodes, summarize, word_count};
pub use outline::{OutlineNode, build_outline, flatten_outline, parent_index, subtree_range};
pub use types::Node;
