//! The closed node taxonomy.
//!
//! A tree is built from exactly three kinds of node: [`Action`] leaves and
//! the two composites, [`Selector`] and [`Sequence`]. [`Node`] is the tagged
//! union over them, dispatched by `match`.

use std::fmt;

use crate::{Behavior, Outcome, Selector, Sequence, TreeError};

/// Boxed leaf decision function.
type LeafFn<C> = Box<dyn Fn(&mut C) -> Outcome + Send + Sync>;

/// Discriminant of a [`Node`], used in errors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Action,
    Selector,
    Sequence,
}

/// Leaf node wrapping one decision function supplied by the owning agent.
///
/// Evaluating an action is exactly one call of its function. An action with
/// no function bound evaluates to `Failed`, so a partially initialized tree
/// degrades to inaction instead of crashing.
pub struct Action<C> {
    func: Option<LeafFn<C>>,
}

impl<C> Action<C> {
    /// Creates an action bound to `func`.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut C) -> Outcome + Send + Sync + 'static,
    {
        Self {
            func: Some(Box::new(func)),
        }
    }

    /// Creates an action with no function bound.
    pub fn unbound() -> Self {
        Self { func: None }
    }

    /// Returns `true` if a decision function is bound.
    pub fn is_bound(&self) -> bool {
        self.func.is_some()
    }
}

impl<C> Default for Action<C> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn evaluate(&self, ctx: &mut C) -> Outcome {
        match &self.func {
            Some(func) => func(ctx),
            None => {
                tracing::trace!("unbound action evaluated as failed");
                Outcome::Failed
            }
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// A behavior tree node.
///
/// Composites start empty and receive children through [`Node::add_child`]
/// (or are built directly with [`crate::builder`] helpers). Ownership makes
/// the structure acyclic: a child is moved into exactly one parent.
pub enum Node<C> {
    Action(Action<C>),
    Selector(Selector<C>),
    Sequence(Sequence<C>),
}

impl<C> Node<C> {
    /// Creates an action leaf bound to `func`.
    pub fn action<F>(func: F) -> Self
    where
        F: Fn(&mut C) -> Outcome + Send + Sync + 'static,
    {
        Node::Action(Action::new(func))
    }

    /// Creates an action leaf with no function bound.
    pub fn unbound() -> Self {
        Node::Action(Action::unbound())
    }

    /// Creates an empty selector.
    pub fn selector() -> Self {
        Node::Selector(Selector::default())
    }

    /// Creates an empty sequence.
    pub fn sequence() -> Self {
        Node::Sequence(Sequence::default())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Action(_) => NodeKind::Action,
            Node::Selector(_) => NodeKind::Selector,
            Node::Sequence(_) => NodeKind::Sequence,
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self, Node::Action(_))
    }

    /// Returns the children in evaluation order. Actions have none.
    pub fn children(&self) -> &[Node<C>] {
        match self {
            Node::Action(_) => &[],
            Node::Selector(selector) => selector.children(),
            Node::Sequence(sequence) => sequence.children(),
        }
    }

    /// Appends `child` as the last child of this composite.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ChildOnAction`] if `self` is an action leaf.
    pub fn add_child(&mut self, child: Node<C>) -> Result<(), TreeError> {
        match self {
            Node::Action(_) => Err(TreeError::ChildOnAction),
            Node::Selector(selector) => {
                selector.push(child);
                Ok(())
            }
            Node::Sequence(sequence) => {
                sequence.push(child);
                Ok(())
            }
        }
    }

    /// Chaining form of [`Node::add_child`].
    pub fn with_child(mut self, child: Node<C>) -> Result<Self, TreeError> {
        self.add_child(child)?;
        Ok(self)
    }

    /// Evaluates this node and, recursively, the children its policy reaches.
    #[inline]
    pub fn evaluate(&self, ctx: &mut C) -> Outcome {
        match self {
            Node::Action(action) => action.evaluate(ctx),
            Node::Selector(selector) => selector.evaluate(ctx),
            Node::Sequence(sequence) => sequence.evaluate(ctx),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }

    /// Number of levels in this subtree; a lone node has depth 1.
    pub(crate) fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Number of composites in this subtree that have no children.
    pub(crate) fn empty_composites(&self) -> usize {
        let own = usize::from(self.is_composite() && self.children().is_empty());
        own + self
            .children()
            .iter()
            .map(Node::empty_composites)
            .sum::<usize>()
    }
}

impl<C> Behavior<C> for Node<C> {
    #[inline]
    fn evaluate(&self, ctx: &mut C) -> Outcome {
        Node::evaluate(self, ctx)
    }
}

impl<C> From<Action<C>> for Node<C> {
    fn from(action: Action<C>) -> Self {
        Node::Action(action)
    }
}

impl<C> From<Selector<C>> for Node<C> {
    fn from(selector: Selector<C>) -> Self {
        Node::Selector(selector)
    }
}

impl<C> From<Sequence<C>> for Node<C> {
    fn from(sequence: Sequence<C>) -> Self {
        Node::Sequence(sequence)
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Action(action) => action.fmt(f),
            Node::Selector(selector) => f
                .debug_tuple("Selector")
                .field(&selector.children())
                .finish(),
            Node::Sequence(sequence) => f
                .debug_tuple("Sequence")
                .field(&sequence.children())
                .finish(),
        }
    }
}
