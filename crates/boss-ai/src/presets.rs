//! Ready-made behavior tree for the boss.
//!
//! ```text
//! boss_tree()
//!   └─ Selector
//!       ├─ Sequence                 ← attack when the cooldown allows
//!       │   ├─ cooldown_check
//!       │   └─ Selector
//!       │       ├─ skill_attack     ← preferred
//!       │       └─ default_attack
//!       ├─ trace                    ← otherwise chase
//!       └─ idle                     ← always Running
//! ```

use behavior_tree::{Node, Tree, TreeError};

use crate::actions::{cooldown_check, default_attack, idle, skill_attack, trace};
use crate::context::BossContext;
use crate::target::Target;

/// Boss tree type for a given target type.
pub type BossTree<T> = Tree<BossContext<T>>;

/// Attack-choice selector: skill first, default attack second.
pub fn attack_choice<T: Target + 'static>() -> Result<Node<BossContext<T>>, TreeError> {
    let mut choice = Node::selector();
    choice.add_child(Node::action(skill_attack::<T>))?;
    choice.add_child(Node::action(default_attack::<T>))?;
    Ok(choice)
}

/// Attack sequence: the cooldown gate followed by the attack choice.
pub fn attack_sequence<T: Target + 'static>() -> Result<Node<BossContext<T>>, TreeError> {
    let mut sequence = Node::sequence();
    sequence.add_child(Node::action(cooldown_check::<T>))?;
    sequence.add_child(attack_choice()?)?;
    Ok(sequence)
}

/// Full boss tree: attack, else chase, else idle.
pub fn boss_tree<T: Target + 'static>() -> Result<BossTree<T>, TreeError> {
    let mut root = Node::selector();
    root.add_child(attack_sequence()?)?;
    root.add_child(Node::action(trace::<T>))?;
    root.add_child(Node::action(idle::<T>))?;
    Tree::new(root)
}
