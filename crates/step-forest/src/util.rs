//! Shared arena walks: leftmost descent, in-order succession, key lookup.
//!
//! Every walk here is iterative; parent links make the successor walk
//! possible without a stack.

use crate::types::{KeyNode, Node};

#[inline]
fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}
#[inline]
fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}
#[inline]
fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Minimum of the subtree rooted at `node`; `node` itself when it has no
/// left child.
pub fn subtree_min<N: Node>(arena: &[N], node: u32) -> u32 {
    let mut curr = node;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    curr
}

/// In-order successor of `node`, following parent links upward when the
/// right subtree is empty.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return Some(subtree_min(arena, r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Locate the topmost node holding `key`, descending by comparator.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(idx) = curr {
        let cmp = comparator(key, arena[idx as usize].key());
        if cmp == 0 {
            return Some(idx);
        }
        curr = if cmp < 0 {
            get_l(arena, idx)
        } else {
            get_r(arena, idx)
        };
    }
    None
}

/// Swap the keys of two arena slots, leaving links untouched.
///
/// Used by the delete paths when the in-order successor's key is copied
/// into the doomed node before the successor is spliced out.
pub fn swap_keys<K, N: KeyNode<K>>(arena: &mut [N], a: u32, b: u32) {
    if a == b {
        return;
    }
    let (a, b) = (a as usize, b as usize);
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi);
    core::mem::swap(head[lo].key_mut(), tail[0].key_mut());
}
