//! Lightweight behavior tree library for frame-driven game agents.
//!
//! A tree picks one behavior per tick for an autonomous agent. The host
//! calls [`Tree::evaluate`] once per frame with its own state as context;
//! leaf functions read that state, optionally mutate it, and report an
//! [`Outcome`].
//!
//! - **Three outcomes**: `Running`, `Success`, `Failed`
//! - **No suspension**: `Running` is a value, every tick finishes immediately
//! - **No cross-tick memory**: each tick re-evaluates from the root
//! - **Closed node set**: actions, selectors and sequences, matched as an enum
//!
//! # Architecture
//!
//! - [`Behavior`]: "evaluate to an outcome" capability
//! - [`Outcome`]: Running, Success or Failed
//! - [`Node`]: [`Action`] leaf or a composite, [`Selector`] / [`Sequence`]
//! - [`Tree`]: frozen root composite, the evaluation entry point
//!
//! # Example
//!
//! ```rust
//! use behavior_tree::{Node, Outcome, Tree};
//!
//! let mut root = Node::selector();
//! root.add_child(Node::action(|hp: &mut i32| {
//!     if *hp < 10 { Outcome::Success } else { Outcome::Failed }
//! }))?;
//! root.add_child(Node::action(|_: &mut i32| Outcome::Running))?;
//!
//! let tree = Tree::new(root)?;
//! assert_eq!(tree.evaluate(&mut 50), Outcome::Running);
//! assert_eq!(tree.evaluate(&mut 5), Outcome::Success);
//! # Ok::<(), behavior_tree::TreeError>(())
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod error;
pub mod node;
pub mod outcome;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use error::TreeError;
pub use node::{Action, Node, NodeKind};
pub use outcome::Outcome;
pub use tree::Tree;
