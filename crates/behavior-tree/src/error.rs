//! Tree assembly errors.
//!
//! Evaluation never fails with an error: [`crate::Outcome::Failed`] is the
//! failure signal. These errors cover misuse while the tree is being built.

use crate::NodeKind;

/// Error raised while assembling a behavior tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A child was added to an action leaf.
    #[error("action nodes cannot have children")]
    ChildOnAction,

    /// The tree root was not a selector or sequence.
    #[error("tree root must be a composite node, got {0}")]
    RootNotComposite(NodeKind),
}
