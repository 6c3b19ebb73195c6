use std::fmt::Debug;

use crate::bst;
use crate::traverse::{inorder, postorder, preorder};
use crate::types::{default_comparator, KeyNode};
use crate::util::find;

use super::types::{Color, RbNode};
use super::util;

/// Arena-backed red-black tree, insert-only.
///
/// See [`util::insert`]: colors are assigned on insertion but never fixed
/// up afterwards, and deletion is not offered.
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<RbNode<K>>,
    root: Option<u32>,
    comparator: C,
    len: usize,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            len: 0,
        }
    }

    pub fn insert(&mut self, key: K) -> u32 {
        self.arena.push(RbNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        self.root = util::insert(&mut self.arena, self.root, idx, &self.comparator);
        self.len += 1;
        idx
    }

    pub fn contains(&self, key: &K) -> bool {
        find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[RbNode<K>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &RbNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn color(&self, idx: u32) -> Color {
        self.node(idx).color
    }

    pub fn inorder(&self) -> impl Iterator<Item = &K> + '_ {
        inorder(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn preorder(&self) -> impl Iterator<Item = &K> + '_ {
        preorder(&self.arena, self.root).map(|i| self.key(i))
    }

    pub fn postorder(&self) -> impl Iterator<Item = &K> + '_ {
        postorder(&self.arena, self.root).map(|i| self.key(i))
    }

    /// Order and link checks only; the color invariants are out of contract.
    pub fn assert_valid(&self) -> Result<(), String> {
        bst::assert_bst(&self.arena, self.root, &self.comparator)
    }
}

impl<K, C> RbTree<K, C>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}
