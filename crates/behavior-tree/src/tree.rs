//! Behavior tree root and the per-tick evaluation entry point.

use std::fmt;

use crate::{Behavior, Node, Outcome, TreeError};

/// A fully assembled behavior tree.
///
/// The tree owns its root composite and exposes no way to add, remove or
/// reorder nodes, so the shape is frozen from the first evaluation on.
///
/// # Evaluation Policy
///
/// Every call to [`Tree::evaluate`] starts again from the root. The tree
/// keeps no record of which branch returned `Running` last tick; leaf
/// functions observe agent state ("am I already attacking?") to carry a
/// behavior across ticks. All traversal goes through `evaluate`, so a
/// resume-from-running policy would only change this type.
pub struct Tree<C> {
    root: Node<C>,
}

impl<C> Tree<C> {
    /// Wraps `root` into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::RootNotComposite`] if `root` is an action leaf.
    pub fn new(root: Node<C>) -> Result<Self, TreeError> {
        if !root.is_composite() {
            return Err(TreeError::RootNotComposite(root.kind()));
        }

        let empty = root.empty_composites();
        if empty > 0 {
            tracing::warn!(empty, "behavior tree contains composites without children");
        }
        tracing::debug!(
            nodes = root.count(),
            depth = root.depth(),
            root = %root.kind(),
            "behavior tree assembled"
        );

        Ok(Self { root })
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Number of levels from the root to the deepest leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Runs one tick: evaluates the root against `ctx` and returns its outcome.
    pub fn evaluate(&self, ctx: &mut C) -> Outcome {
        let outcome = self.root.evaluate(ctx);
        tracing::trace!(%outcome, "behavior tree evaluated");
        outcome
    }
}

impl<C> Behavior<C> for Tree<C> {
    #[inline]
    fn evaluate(&self, ctx: &mut C) -> Outcome {
        Tree::evaluate(self, ctx)
    }
}

impl<C> fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn action_root_is_rejected() {
        let result = Tree::<()>::new(Node::action(|_| Outcome::Running));

        assert_eq!(
            result.err(),
            Some(TreeError::RootNotComposite(NodeKind::Action))
        );
    }

    #[test]
    fn empty_composite_root_is_accepted_and_fails() {
        let tree = Tree::<()>::new(Node::selector()).expect("selector root");

        assert_eq!(tree.evaluate(&mut ()), Outcome::Failed);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn evaluation_restarts_from_root_each_tick() {
        // First leaf reports Running on its first call only. A tree that
        // resumed the running branch would never call it a second time.
        let root = Node::selector()
            .with_child(Node::action(|calls: &mut Vec<&'static str>| {
                calls.push("first");
                if calls.len() == 1 {
                    Outcome::Running
                } else {
                    Outcome::Failed
                }
            }))
            .and_then(|node| {
                node.with_child(Node::action(|calls: &mut Vec<&'static str>| {
                    calls.push("second");
                    Outcome::Success
                }))
            })
            .expect("selector accepts children");
        let tree = Tree::new(root).expect("composite root");

        let mut calls = Vec::new();
        assert_eq!(tree.evaluate(&mut calls), Outcome::Running);
        assert_eq!(tree.evaluate(&mut calls), Outcome::Success);
        assert_eq!(calls, vec!["first", "first", "second"]);
    }
}
