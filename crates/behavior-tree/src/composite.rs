//! Composite behavior nodes.
//!
//! Composite nodes control the evaluation flow of multiple child nodes.
//! This module provides the two combination policies of the tree:
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Child order is priority order. Both composites short-circuit, so a child
//! that is never reached never runs its leaf function that tick.

use crate::{Behavior, Node, Outcome};

/// Evaluates children in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops immediately** and returns `Running`
/// - If a child returns `Failed`, the selector **continues** to the next child
/// - If all children return `Failed` (or there are none), the selector returns `Failed`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Node<C>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given children, in priority order.
    ///
    /// An empty selector is allowed and always evaluates to `Failed`.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }

    /// Appends a child with the lowest priority so far.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    /// Returns the children in evaluation order.
    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

impl<C> Default for Selector<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn evaluate(&self, ctx: &mut C) -> Outcome {
        for child in &self.children {
            match child.evaluate(ctx) {
                Outcome::Failed => continue,
                Outcome::Success => return Outcome::Success,
                Outcome::Running => return Outcome::Running,
            }
        }
        // All children failed
        Outcome::Failed
    }
}

/// Evaluates children in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failed`, the sequence **stops immediately** and returns `Failed`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// A sequence with no children returns `Failed`: there is nothing to do,
/// so it cannot succeed.
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given children, in evaluation order.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }

    /// Appends a child to the end of the sequence.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    /// Returns the children in evaluation order.
    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn evaluate(&self, ctx: &mut C) -> Outcome {
        if self.children.is_empty() {
            return Outcome::Failed;
        }

        for child in &self.children {
            match child.evaluate(ctx) {
                Outcome::Success => continue,
                Outcome::Failed => return Outcome::Failed,
                Outcome::Running => return Outcome::Running,
            }
        }
        // All children succeeded
        Outcome::Success
    }
}
