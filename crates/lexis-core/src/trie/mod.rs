//! In-memory LCRS term trie.
//!
//! A trie encoded as a binary tree: the left child heads the chain of
//! next-character branches, the right sibling is the next alternative at the
//! same depth. The trie is built by repeated insertion, walked once by the
//! [`codec`](crate::codec) to produce node blocks, and can answer every query
//! type directly while it is still in memory.
//!
//! # Architecture
//!
//! - Nodes live in a `Vec` arena and link through integer handles, so the
//!   arena owns every node and there are no back-pointers.
//! - New branches are prepended to their sibling chain
//!   (most-recently-inserted first); no query result depends on that order.
//! - Traversals use explicit `(node, depth)` stacks, so very long terms never
//!   hit a recursion limit.

mod lcrs;
mod node;

pub use lcrs::LcrsTrie;
pub use node::NodeId;
