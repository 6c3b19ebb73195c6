use std::fmt::Debug;

use crate::traverse::{inorder, postorder, preorder};
use crate::types::{default_comparator, KeyNode};
use crate::util::find;

use super::types::AvlNode;
use super::util;

/// Arena-backed AVL tree.
///
/// Every insert and delete leaves each node's height difference within
/// ±1, restructuring along the mutation path with the four standard
/// rotation cases.
pub struct Avl<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<AvlNode<K>>,
    root: Option<u32>,
    comparator: C,
    len: usize,
}

impl<K> Avl<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for Avl<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Avl<K, C>
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
        self.arena.push(AvlNode::new(key));
        let idx = (self.arena.len() - 1) as u32;
        self.root = util::insert(&mut self.arena, self.root, idx, &self.comparator);
        self.len += 1;
        idx
    }

    pub fn delete(&mut self, key: &K) -> bool {
        let Some(n) = find(&self.arena, self.root, key, &self.comparator) else {
            return false;
        };
        self.root = util::remove(&mut self.arena, self.root, n);
        self.len -= 1;
        true
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

    pub fn arena(&self) -> &[AvlNode<K>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> u32 {
        self.root.map(|i| self.node(i).height).unwrap_or(0)
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

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl(&self.arena, self.root, &self.comparator)
    }
}

impl<K, C> Avl<K, C>
where
    K: Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}
