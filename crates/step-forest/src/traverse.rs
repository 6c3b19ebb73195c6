//! Depth-first traversal iterators.
//!
//! All three orders are lazy iterators over arena indices, driven by
//! explicit stacks so traversal depth never touches the call stack.  Each
//! call builds a fresh iterator, so a traversal can be restarted at will.

use crate::types::Node;

/// In-order: left subtree, node, right subtree.  Over a search tree this
/// yields keys in ascending comparator order.
pub fn inorder<N: Node>(arena: &[N], root: Option<u32>) -> Inorder<'_, N> {
    Inorder {
        arena,
        stack: Vec::new(),
        descend: root,
    }
}

/// Pre-order: node, left subtree, right subtree.
pub fn preorder<N: Node>(arena: &[N], root: Option<u32>) -> Preorder<'_, N> {
    Preorder {
        arena,
        stack: root.into_iter().collect(),
    }
}

/// Post-order: left subtree, right subtree, node.
pub fn postorder<N: Node>(arena: &[N], root: Option<u32>) -> Postorder<'_, N> {
    Postorder {
        arena,
        stack: root.map(|r| vec![(r, false)]).unwrap_or_default(),
    }
}

pub struct Inorder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
    descend: Option<u32>,
}

impl<N: Node> Iterator for Inorder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some(i) = self.descend {
            self.stack.push(i);
            self.descend = self.arena[i as usize].l();
        }
        let i = self.stack.pop()?;
        self.descend = self.arena[i as usize].r();
        Some(i)
    }
}

pub struct Preorder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<N: Node> Iterator for Preorder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        // Right below left so the left subtree pops first.
        if let Some(r) = self.arena[i as usize].r() {
            self.stack.push(r);
        }
        if let Some(l) = self.arena[i as usize].l() {
            self.stack.push(l);
        }
        Some(i)
    }
}

pub struct Postorder<'a, N> {
    arena: &'a [N],
    stack: Vec<(u32, bool)>,
}

impl<N: Node> Iterator for Postorder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some((i, expanded)) = self.stack.pop() {
            if expanded {
                return Some(i);
            }
            self.stack.push((i, true));
            if let Some(r) = self.arena[i as usize].r() {
                self.stack.push((r, false));
            }
            if let Some(l) = self.arena[i as usize].l() {
                self.stack.push((l, false));
            }
        }
        None
    }
}
