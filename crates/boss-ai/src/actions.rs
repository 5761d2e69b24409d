//! Leaf functions of the boss tree.
//!
//! Each function is one decision. It reads the [`BossContext`], may start
//! or stop a behavior by changing state, and reports an [`Outcome`].
//! Continuity across ticks comes from the state flags: an attack that is
//! still playing keeps [`cooldown_check`] answering `Running`.

use behavior_tree::Outcome;

use crate::context::BossContext;
use crate::target::Target;

/// Gate in front of both attacks.
///
/// - `Running` while an attack or skill is in progress
/// - `Failed` while the time since the last attack is below a cooldown
///   drawn from `[attack_cooldown_min, attack_cooldown_max)`
/// - `Success` otherwise
///
/// The cooldown is drawn again on every evaluation, so readiness becomes
/// more likely the longer the boss waits inside the range.
pub fn cooldown_check<T: Target>(ctx: &mut BossContext<T>) -> Outcome {
    if ctx.state.is_attacking() {
        tracing::trace!("attack in progress");
        return Outcome::Running;
    }

    let cooldown = ctx.draw_cooldown();
    if ctx.state.attack_cooldown < cooldown {
        return Outcome::Failed;
    }
    Outcome::Success
}

/// Casts the skill with probability `skill_chance` percent.
pub fn skill_attack<T: Target>(ctx: &mut BossContext<T>) -> Outcome {
    let Some(offset) = ctx.target_offset() else {
        return Outcome::Failed;
    };

    let roll = ctx.roll_percent();
    if !ctx.state.is_attacking() && roll < ctx.config.skill_chance {
        tracing::debug!(roll, offset, "boss casts skill");
        ctx.start_skill(offset);
        return Outcome::Success;
    }
    Outcome::Failed
}

/// Starts a default attack when the target is inside `attack_range`.
pub fn default_attack<T: Target>(ctx: &mut BossContext<T>) -> Outcome {
    let Some(offset) = ctx.target_offset() else {
        return Outcome::Failed;
    };

    if !ctx.state.is_attacking() && offset.abs() < ctx.config.attack_range {
        tracing::debug!(offset, "boss attacks");
        ctx.start_attack();
        return Outcome::Success;
    }
    Outcome::Failed
}

/// Chases the target until it is closer than `trace_distance`.
///
/// Returns `Running` while chasing. Never chases during an attack.
pub fn trace<T: Target>(ctx: &mut BossContext<T>) -> Outcome {
    let Some(offset) = ctx.target_offset() else {
        return Outcome::Failed;
    };

    if offset.abs() < ctx.config.trace_distance || ctx.state.is_attacking() {
        return Outcome::Failed;
    }

    tracing::trace!(offset, "boss chasing");
    ctx.set_moving(true);
    ctx.face_target();
    Outcome::Running
}

/// Stands still, turned toward the target. Always `Running`, so the root
/// never falls through.
pub fn idle<T: Target>(ctx: &mut BossContext<T>) -> Outcome {
    tracing::trace!("boss idle");
    ctx.set_moving(false);
    ctx.face_target();
    Outcome::Running
}
