//! Height-balanced (AVL) tree.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::Avl;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl, insert, print, remove, rotate_left, rotate_right};
