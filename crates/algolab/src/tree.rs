//! Tree engine facade: one session per tree, one snapshot per completed
//! insert or delete.
//!
//! Rotations and splices inside a single call never snapshot on their own;
//! the log records the tree as the caller saw it between operations.

use serde::Serialize;
use step_forest::red_black::{Color, RbNode};
use step_forest::types::KeyNode;
use step_forest::{Avl, Bst, RbTree};

use crate::error::EngineError;
use crate::step::StepLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TreeKind {
    Bst,
    Avl,
    RedBlack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TraversalOrder {
    Inorder,
    Preorder,
    Postorder,
}

/// Snapshot color tag; only red-black snapshots carry one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Red,
    Black,
}

/// Frozen copy of a whole tree, linked by ownership instead of arena
/// handles so a renderer can walk it without the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot {
    pub root: Option<Box<SnapshotNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode {
    pub key: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NodeColor>,
    pub left: Option<Box<SnapshotNode>>,
    pub right: Option<Box<SnapshotNode>>,
}

enum TreeInner {
    Bst(Bst<i64>),
    Avl(Avl<i64>),
    Rb(RbTree<i64>),
}

/// A tree-building session: owns one tree of the chosen kind and the step
/// log of its completed mutations.
pub struct TreeLab {
    kind: TreeKind,
    inner: TreeInner,
    steps: StepLog<TreeSnapshot>,
}

impl TreeLab {
    pub fn new(kind: TreeKind) -> Self {
        let inner = match kind {
            TreeKind::Bst => TreeInner::Bst(Bst::new()),
            TreeKind::Avl => TreeInner::Avl(Avl::new()),
            TreeKind::RedBlack => TreeInner::Rb(RbTree::new()),
        };
        Self {
            kind,
            inner,
            steps: StepLog::new(),
        }
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        match &self.inner {
            TreeInner::Bst(t) => t.size(),
            TreeInner::Avl(t) => t.size(),
            TreeInner::Rb(t) => t.size(),
        }
    }

    pub fn contains(&self, key: i64) -> bool {
        match &self.inner {
            TreeInner::Bst(t) => t.contains(&key),
            TreeInner::Avl(t) => t.contains(&key),
            TreeInner::Rb(t) => t.contains(&key),
        }
    }

    /// Insert `key` and record the resulting tree.
    pub fn insert(&mut self, key: i64) {
        match &mut self.inner {
            TreeInner::Bst(t) => {
                t.insert(key);
            }
            TreeInner::Avl(t) => {
                t.insert(key);
            }
            TreeInner::Rb(t) => {
                t.insert(key);
            }
        }
        let snapshot = self.snapshot();
        self.steps.push(snapshot);
    }

    /// Insert every key in order, one recorded step each.
    pub fn run_inserts(&mut self, keys: impl IntoIterator<Item = i64>) {
        for key in keys {
            self.insert(key);
        }
    }

    /// Delete `key` and, when it was present, record the resulting tree.
    /// Returns whether a node was removed.
    ///
    /// Red-black deletion is not part of this engine's contract.
    pub fn delete(&mut self, key: i64) -> Result<bool, EngineError> {
        let deleted = match &mut self.inner {
            TreeInner::Bst(t) => t.delete(&key),
            TreeInner::Avl(t) => t.delete(&key),
            TreeInner::Rb(_) => {
                return Err(EngineError::UnsupportedOperation(
                    "red-black deletion is not implemented".to_string(),
                ))
            }
        };
        if deleted {
            let snapshot = self.snapshot();
            self.steps.push(snapshot);
        }
        Ok(deleted)
    }

    /// Keys in the requested depth-first order.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<i64> {
        match &self.inner {
            TreeInner::Bst(t) => match order {
                TraversalOrder::Inorder => t.inorder().copied().collect(),
                TraversalOrder::Preorder => t.preorder().copied().collect(),
                TraversalOrder::Postorder => t.postorder().copied().collect(),
            },
            TreeInner::Avl(t) => match order {
                TraversalOrder::Inorder => t.inorder().copied().collect(),
                TraversalOrder::Preorder => t.preorder().copied().collect(),
                TraversalOrder::Postorder => t.postorder().copied().collect(),
            },
            TreeInner::Rb(t) => match order {
                TraversalOrder::Inorder => t.inorder().copied().collect(),
                TraversalOrder::Preorder => t.preorder().copied().collect(),
                TraversalOrder::Postorder => t.postorder().copied().collect(),
            },
        }
    }

    /// Frozen copy of the current tree.
    pub fn snapshot(&self) -> TreeSnapshot {
        let root = match &self.inner {
            TreeInner::Bst(t) => copy_subtree(t.arena(), t.root_index(), &|_| None),
            TreeInner::Avl(t) => copy_subtree(t.arena(), t.root_index(), &|_| None),
            TreeInner::Rb(t) => copy_subtree(t.arena(), t.root_index(), &|n: &RbNode<i64>| {
                Some(match n.color {
                    Color::Red => NodeColor::Red,
                    Color::Black => NodeColor::Black,
                })
            }),
        };
        TreeSnapshot { root }
    }

    /// Completed-mutation log, oldest first.
    pub fn steps(&self) -> &StepLog<TreeSnapshot> {
        &self.steps
    }
}

fn copy_subtree<N>(
    arena: &[N],
    idx: Option<u32>,
    color: &impl Fn(&N) -> Option<NodeColor>,
) -> Option<Box<SnapshotNode>>
where
    N: KeyNode<i64>,
{
    let i = idx?;
    let n = &arena[i as usize];
    Some(Box::new(SnapshotNode {
        key: *n.key(),
        color: color(n),
        left: copy_subtree(arena, n.l(), color),
        right: copy_subtree(arena, n.r(), color),
    }))
}
