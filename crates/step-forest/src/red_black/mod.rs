//! Red-black tree, insertion only.
//!
//! Nodes carry a color tag but no fixup pass runs after insertion; the
//! red-black invariants are intentionally not maintained.  See
//! [`util::insert`].

pub mod tree;
pub mod types;
pub mod util;

pub use tree::RbTree;
pub use types::{Color, RbNode, RbNodeLike};
pub use util::{insert, print};
