//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the "evaluate to an
//! [`Outcome`]" capability shared by every node and by the tree itself.
//! The trait is generic over a context type `C`, the agent-owned state
//! that leaf functions read and mutate.

use crate::Outcome;

/// Something that can be evaluated against a context.
///
/// [`Node`](crate::Node) is a closed enum and does not need this trait for
/// dispatch; the trait exists so hosts can be generic over anything that
/// evaluates, whether a full [`Tree`](crate::Tree) or a detached subtree.
pub trait Behavior<C> {
    /// Evaluate this behavior against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the agent state. Leaf functions are
    ///   the only place where it is read or modified.
    ///
    /// # Returns
    ///
    /// - `Outcome::Running` if the behavior is still in progress
    /// - `Outcome::Success` if the behavior succeeded
    /// - `Outcome::Failed` if the behavior failed
    fn evaluate(&self, ctx: &mut C) -> Outcome;
}

impl<C, B: Behavior<C> + ?Sized> Behavior<C> for Box<B> {
    #[inline]
    fn evaluate(&self, ctx: &mut C) -> Outcome {
        (**self).evaluate(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, Tree};

    fn countdown(ctx: &mut i32) -> Outcome {
        if *ctx > 0 {
            *ctx -= 1;
            Outcome::Running
        } else {
            Outcome::Success
        }
    }

    fn countdown_sequence() -> Node<i32> {
        Node::sequence()
            .with_child(Node::action(countdown))
            .expect("sequence accepts children")
    }

    #[test]
    fn boxed_tree_and_subtree_evaluate_alike() {
        let tree = Tree::new(countdown_sequence()).expect("composite root");
        let behaviors: Vec<Box<dyn Behavior<i32>>> =
            vec![Box::new(tree), Box::new(countdown_sequence())];

        let mut ticks = 2;
        let outcomes: Vec<Outcome> = behaviors.iter().map(|b| b.evaluate(&mut ticks)).collect();

        assert_eq!(outcomes, vec![Outcome::Running, Outcome::Running]);
        assert_eq!(ticks, 0);
        assert!(behaviors.iter().all(|b| b.evaluate(&mut ticks).is_success()));
    }
}
