use std::fmt::Debug;

use crate::types::Node;

use super::types::{Color, RbNodeLike};

#[inline]
fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Insert node `n` below `root` following BST order; a fresh root is
/// colored black, every other fresh node red.  Returns the new root.
///
/// Insertion stops there: no recoloring or rotation follows, so the
/// red-black invariants (no red-red parent/child pair, equal black height)
/// are **not** restored.  The color tags exist for display, and the tree
/// degrades to an ordinary BST shape-wise.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        arena[n as usize].set_color(Color::Black);
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

/// Debug printer; `R`/`B` marks the node color.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: RbNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let tag = match n.color() {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [{tag}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key()
            )
        }
    }
}
