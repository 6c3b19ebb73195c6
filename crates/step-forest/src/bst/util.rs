use std::fmt::Debug;

use crate::types::KeyNode;
use crate::util::{next, subtree_min, swap_keys};

#[inline]
fn set_p<N: crate::types::Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<N: crate::types::Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: crate::types::Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Insert node `n` below `root`, descending by comparator.
///
/// Keys equal to an existing key descend right, so duplicates are kept.
/// Returns the new root.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(n);
    };

    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let child = if cmp < 0 {
            arena[curr as usize].l()
        } else {
            arena[curr as usize].r()
        };
        match child {
            Some(child) => curr = child,
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                return root;
            }
        }
    }
}

/// Remove node `n` from the tree rooted at `root`.  Returns the new root.
///
/// Three cases: a leaf is unlinked, a node with one child is spliced, and a
/// node with two children first receives its in-order successor's key and
/// then the successor (which has no left child) is spliced from the right
/// subtree.  The spliced slot stays in the arena, detached and carrying the
/// removed key.
pub fn remove<K, N>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32>
where
    N: KeyNode<K>,
{
    let root = root?;

    let target = match (arena[n as usize].l(), arena[n as usize].r()) {
        (Some(_), Some(r)) => {
            let succ = subtree_min(arena, r);
            swap_keys(arena, n, succ);
            succ
        }
        _ => n,
    };

    let p = arena[target as usize].p();
    let child = arena[target as usize]
        .l()
        .or(arena[target as usize].r());

    set_p(arena, target, None);
    set_l(arena, target, None);
    set_r(arena, target, None);

    if let Some(child) = child {
        set_p(arena, child, p);
    }
    match p {
        None => child,
        Some(p) => {
            if arena[p as usize].l() == Some(target) {
                set_l(arena, p, child);
            } else {
                set_r(arena, p, child);
            }
            Some(root)
        }
    }
}

/// Check parent-link integrity and in-order key order.
pub fn assert_bst<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err("root has parent".to_string());
    }

    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        for child in [arena[i as usize].l(), arena[i as usize].r()]
            .into_iter()
            .flatten()
        {
            if arena[child as usize].p() != Some(i) {
                return Err(format!("broken parent link at node {child}"));
            }
            stack.push(child);
        }
    }

    let mut curr = crate::util::first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) > 0 {
                return Err("node order violated".to_string());
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for plain BST arenas.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: KeyNode<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!("Node[{i}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}", n.key())
        }
    }
}
