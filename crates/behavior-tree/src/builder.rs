//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when the
//! whole shape of a (sub)tree is known up front. Instead of writing
//! `Node::Sequence(Sequence::new(vec![...]))`, you can use shorter functions
//! like `sequence(vec![...])`. Children keep the order of the `Vec`.

use crate::{Node, Outcome, Selector, Sequence};

/// Creates an action leaf.
///
/// Shorthand for `Node::action(func)`.
#[inline]
pub fn action<C, F>(func: F) -> Node<C>
where
    F: Fn(&mut C) -> Outcome + Send + Sync + 'static,
{
    Node::action(func)
}

/// Creates a sequence node.
///
/// Shorthand for `Node::Sequence(Sequence::new(children))`.
#[inline]
pub fn sequence<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::Sequence(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::Selector(Selector::new(children))`.
#[inline]
pub fn selector<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::Selector(Selector::new(children))
}
