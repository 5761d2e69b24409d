//! Evaluation-order properties of selectors, sequences and full trees.
//!
//! Leaves record their name in the context when evaluated, so a test can
//! check both the outcome and exactly which leaves ran.

use std::collections::HashMap;

use behavior_tree::builder::{selector, sequence};
use behavior_tree::{Node, Outcome, Tree};

#[derive(Default)]
struct Recorder {
    script: HashMap<&'static str, Outcome>,
    log: Vec<&'static str>,
}

impl Recorder {
    fn scripted(entries: &[(&'static str, Outcome)]) -> Self {
        Self {
            script: entries.iter().copied().collect(),
            log: Vec::new(),
        }
    }

    fn calls(&self, name: &str) -> usize {
        self.log.iter().filter(|entry| **entry == name).count()
    }
}

/// Leaf that logs its name and returns its scripted outcome (Failed if unscripted).
fn leaf(name: &'static str) -> Node<Recorder> {
    Node::action(move |rec: &mut Recorder| {
        rec.log.push(name);
        rec.script.get(name).copied().unwrap_or(Outcome::Failed)
    })
}

fn leaves(names: &[&'static str]) -> Vec<Node<Recorder>> {
    names.iter().copied().map(leaf).collect()
}

const ALL: [Outcome; 3] = [Outcome::Running, Outcome::Success, Outcome::Failed];

// ============================================================================
// Selector
// ============================================================================

#[test]
fn selector_stops_at_first_success() {
    for fourth in ALL {
        let node = selector(leaves(&["a", "b", "c", "d"]));
        let mut rec = Recorder::scripted(&[
            ("a", Outcome::Failed),
            ("b", Outcome::Failed),
            ("c", Outcome::Success),
            ("d", fourth),
        ]);

        assert_eq!(node.evaluate(&mut rec), Outcome::Success);
        assert_eq!(rec.log, vec!["a", "b", "c"]);
        assert_eq!(rec.calls("d"), 0);
    }
}

#[test]
fn selector_with_all_failed_children_fails() {
    for len in 0..4 {
        let names = &["a", "b", "c"][..len];
        let node = selector(leaves(names));
        let mut rec = Recorder::default();

        assert_eq!(node.evaluate(&mut rec), Outcome::Failed);
        assert_eq!(rec.log, names.to_vec());
    }
}

#[test]
fn selector_returns_running_at_any_position() {
    let names = ["a", "b", "c", "d"];
    for i in 0..names.len() {
        let node = selector(leaves(&names));
        let mut rec = Recorder::scripted(&[(names[i], Outcome::Running)]);
        for later in &names[i + 1..] {
            rec.script.insert(*later, Outcome::Success);
        }

        assert_eq!(node.evaluate(&mut rec), Outcome::Running);
        assert_eq!(rec.log, names[..=i].to_vec());
    }
}

// ============================================================================
// Sequence
// ============================================================================

#[test]
fn sequence_stops_at_first_failure() {
    for fourth in ALL {
        let node = sequence(leaves(&["a", "b", "c", "d"]));
        let mut rec = Recorder::scripted(&[
            ("a", Outcome::Success),
            ("b", Outcome::Success),
            ("c", Outcome::Failed),
            ("d", fourth),
        ]);

        assert_eq!(node.evaluate(&mut rec), Outcome::Failed);
        assert_eq!(rec.calls("d"), 0);
    }
}

#[test]
fn empty_sequence_fails() {
    let node: Node<Recorder> = Node::sequence();

    assert_eq!(node.evaluate(&mut Recorder::default()), Outcome::Failed);
}

#[test]
fn sequence_with_all_success_children_succeeds() {
    let node = sequence(leaves(&["a", "b", "c"]));
    let mut rec = Recorder::scripted(&[
        ("a", Outcome::Success),
        ("b", Outcome::Success),
        ("c", Outcome::Success),
    ]);

    assert_eq!(node.evaluate(&mut rec), Outcome::Success);
    assert_eq!(rec.log, vec!["a", "b", "c"]);
}

#[test]
fn sequence_returns_running_at_any_position() {
    let names = ["a", "b", "c", "d"];
    for i in 0..names.len() {
        let node = sequence(leaves(&names));
        let mut rec = Recorder::default();
        for earlier in &names[..i] {
            rec.script.insert(*earlier, Outcome::Success);
        }
        rec.script.insert(names[i], Outcome::Running);

        assert_eq!(node.evaluate(&mut rec), Outcome::Running);
        assert_eq!(rec.log, names[..=i].to_vec());
    }
}

// ============================================================================
// Actions
// ============================================================================

#[test]
fn unbound_action_is_idempotently_failed() {
    let tree = Tree::new(selector(vec![Node::unbound(), Node::unbound()]))
        .expect("selector root");
    let mut rec = Recorder::default();

    for _ in 0..5 {
        assert_eq!(tree.evaluate(&mut rec), Outcome::Failed);
    }
    assert!(rec.log.is_empty());
}

#[test]
fn unbound_action_inside_sequence_short_circuits() {
    let node = sequence(vec![leaf("a"), Node::unbound(), leaf("b")]);
    let mut rec = Recorder::scripted(&[("a", Outcome::Success), ("b", Outcome::Success)]);

    assert_eq!(node.evaluate(&mut rec), Outcome::Failed);
    assert_eq!(rec.log, vec!["a"]);
}

// ============================================================================
// Enemy tree scenarios
// ============================================================================

/// Selector[ Sequence[cooldown, Selector[skill, attack]], trace, idle ],
/// assembled one child at a time.
fn enemy_tree() -> Tree<Recorder> {
    let mut attack_choice = Node::selector();
    attack_choice.add_child(leaf("skill")).expect("composite");
    attack_choice.add_child(leaf("attack")).expect("composite");

    let mut attack_sequence = Node::sequence();
    attack_sequence.add_child(leaf("cooldown")).expect("composite");
    attack_sequence.add_child(attack_choice).expect("composite");

    let mut root = Node::selector();
    root.add_child(attack_sequence).expect("composite");
    root.add_child(leaf("trace")).expect("composite");
    root.add_child(leaf("idle")).expect("composite");

    Tree::new(root).expect("selector root")
}

#[test]
fn enemy_tree_shape() {
    let tree = enemy_tree();

    assert_eq!(tree.node_count(), 8);
    assert_eq!(tree.depth(), 4);
}

#[test]
fn default_attack_wins_when_skill_fails() {
    let tree = enemy_tree();
    let mut rec = Recorder::scripted(&[
        ("cooldown", Outcome::Success),
        ("skill", Outcome::Failed),
        ("attack", Outcome::Success),
        ("trace", Outcome::Running),
        ("idle", Outcome::Running),
    ]);

    assert_eq!(tree.evaluate(&mut rec), Outcome::Success);
    assert_eq!(rec.log, vec!["cooldown", "skill", "attack"]);
}

#[test]
fn attack_in_progress_blocks_everything_else() {
    let tree = enemy_tree();
    let mut rec = Recorder::scripted(&[
        ("cooldown", Outcome::Running),
        ("skill", Outcome::Success),
        ("trace", Outcome::Running),
        ("idle", Outcome::Running),
    ]);

    assert_eq!(tree.evaluate(&mut rec), Outcome::Running);
    assert_eq!(rec.log, vec!["cooldown"]);
}

#[test]
fn chasing_when_cooldown_not_ready() {
    let tree = enemy_tree();
    let mut rec = Recorder::scripted(&[
        ("cooldown", Outcome::Failed),
        ("trace", Outcome::Running),
        ("idle", Outcome::Running),
    ]);

    assert_eq!(tree.evaluate(&mut rec), Outcome::Running);
    assert_eq!(rec.log, vec!["cooldown", "trace"]);
}

#[test]
fn idle_is_the_fallback() {
    let tree = enemy_tree();
    let mut rec = Recorder::scripted(&[
        ("cooldown", Outcome::Failed),
        ("trace", Outcome::Failed),
        ("idle", Outcome::Running),
    ]);

    assert_eq!(tree.evaluate(&mut rec), Outcome::Running);
    assert_eq!(rec.log, vec!["cooldown", "trace", "idle"]);
}

#[test]
fn neither_attack_available_falls_through_to_trace() {
    let tree = enemy_tree();
    let mut rec = Recorder::scripted(&[
        ("cooldown", Outcome::Success),
        ("trace", Outcome::Running),
    ]);

    assert_eq!(tree.evaluate(&mut rec), Outcome::Running);
    assert_eq!(rec.log, vec!["cooldown", "skill", "attack", "trace"]);
}
