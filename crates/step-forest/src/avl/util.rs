use std::fmt::Debug;

use crate::types::Node;
use crate::util::{first, next, subtree_min, swap_keys};

use super::types::AvlNodeLike;

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

#[inline]
fn height<K, N>(arena: &[N], node: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    node.map(|i| arena[i as usize].height()).unwrap_or(0)
}

#[inline]
fn update_height<K, N>(arena: &mut [N], i: u32)
where
    N: AvlNodeLike<K>,
{
    let l = arena[i as usize].l();
    let r = arena[i as usize].r();
    let h = 1 + height(arena, l).max(height(arena, r));
    arena[i as usize].set_height(h);
}

#[inline]
fn balance<K, N>(arena: &[N], i: u32) -> i32
where
    N: AvlNodeLike<K>,
{
    height(arena, arena[i as usize].l()) as i32 - height(arena, arena[i as usize].r()) as i32
}

/// Rotate the subtree rooted at `y` to the right; `y`'s left child takes
/// its place.  Recomputes the heights of exactly the two nodes involved and
/// fixes the parent's child link.  Returns the new subtree root.
pub fn rotate_right<K, N>(arena: &mut [N], y: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let x = arena[y as usize].l().expect("left child exists");
    let t2 = arena[x as usize].r();
    let p = arena[y as usize].p();

    set_l(arena, y, t2);
    if let Some(t2) = t2 {
        set_p(arena, t2, Some(y));
    }
    set_r(arena, x, Some(y));
    set_p(arena, y, Some(x));
    set_p(arena, x, p);
    if let Some(p) = p {
        if arena[p as usize].l() == Some(y) {
            set_l(arena, p, Some(x));
        } else {
            set_r(arena, p, Some(x));
        }
    }

    update_height(arena, y);
    update_height(arena, x);
    x
}

/// Mirror image of [`rotate_right`].
pub fn rotate_left<K, N>(arena: &mut [N], x: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let y = arena[x as usize].r().expect("right child exists");
    let t2 = arena[y as usize].l();
    let p = arena[x as usize].p();

    set_r(arena, x, t2);
    if let Some(t2) = t2 {
        set_p(arena, t2, Some(x));
    }
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    set_p(arena, y, p);
    if let Some(p) = p {
        if arena[p as usize].l() == Some(x) {
            set_l(arena, p, Some(y));
        } else {
            set_r(arena, p, Some(y));
        }
    }

    update_height(arena, x);
    update_height(arena, y);
    y
}

/// Walk from `start` to the root, refreshing heights and repairing any node
/// whose balance reaches ±2.  The rotation case is picked by the taller
/// child's balance sign.  Returns the (possibly new) root.
fn rebalance_upward<K, N>(arena: &mut [N], start: Option<u32>, mut root: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let mut curr = start;
    while let Some(i) = curr {
        update_height(arena, i);
        let b = balance(arena, i);
        let top = if b > 1 {
            let l = arena[i as usize].l().expect("left child exists");
            if balance(arena, l) >= 0 {
                rotate_right(arena, i)
            } else {
                rotate_left(arena, l);
                rotate_right(arena, i)
            }
        } else if b < -1 {
            let r = arena[i as usize].r().expect("right child exists");
            if balance(arena, r) <= 0 {
                rotate_left(arena, i)
            } else {
                rotate_right(arena, r);
                rotate_left(arena, i)
            }
        } else {
            i
        };
        if arena[top as usize].p().is_none() {
            root = top;
        }
        curr = arena[top as usize].p();
    }
    root
}

/// Insert node `n` below `root` and rebalance the insertion path.
/// Duplicate keys descend right.  Returns the new root.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<K>,
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
                let root = root.expect("root exists");
                return Some(rebalance_upward(arena, Some(curr), root));
            }
        }
    }
}

/// Remove node `n` and rebalance bottom-up from the splice point to the
/// root.  Same three delete cases as the plain BST; the two-children case
/// copies the in-order successor's key down before splicing the successor.
/// Returns the new root.
pub fn remove<K, N>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32>
where
    N: AvlNodeLike<K>,
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
            Some(rebalance_upward(arena, Some(p), root))
        }
    }
}

fn tree_height<K, N>(arena: &[N], node: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let l = arena[node as usize]
        .l()
        .map(|i| tree_height(arena, i))
        .unwrap_or(0);
    let r = arena[node as usize]
        .r()
        .map(|i| tree_height(arena, i))
        .unwrap_or(0);
    1 + l.max(r)
}

/// Validate parent links, stored heights, the balance range, and in-order
/// key order for the tree rooted at `root`.
pub fn assert_avl<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err("root has parent".to_string());
    }

    fn validate_links_and_heights<K, N>(arena: &[N], node: u32) -> Result<(), String>
    where
        N: AvlNodeLike<K>,
    {
        let l = arena[node as usize].l();
        let r = arena[node as usize].r();

        if let Some(l) = l {
            if arena[l as usize].p() != Some(node) {
                return Err("broken parent link on left child".to_string());
            }
            validate_links_and_heights(arena, l)?;
        }
        if let Some(r) = r {
            if arena[r as usize].p() != Some(node) {
                return Err("broken parent link on right child".to_string());
            }
            validate_links_and_heights(arena, r)?;
        }

        let lh = l.map(|i| tree_height(arena, i)).unwrap_or(0);
        let rh = r.map(|i| tree_height(arena, i)).unwrap_or(0);
        let expected = 1 + lh.max(rh);
        if arena[node as usize].height() != expected {
            return Err(format!(
                "height mismatch: expected {expected}, got {}",
                arena[node as usize].height()
            ));
        }
        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(format!("balance violated: factor {bf}"));
        }

        Ok(())
    }

    validate_links_and_heights(arena, root)?;

    let mut curr = first(arena, Some(root));
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

/// Debug printer for height-balanced arenas.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.key()
            )
        }
    }
}
