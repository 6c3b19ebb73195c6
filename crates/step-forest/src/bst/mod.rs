//! Plain binary search tree.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::Bst;
pub use types::BstNode;
pub use util::{assert_bst, insert, print, remove};
