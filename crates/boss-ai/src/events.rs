//! Notifications from boss state changes to presentation.
//!
//! Leaves and callbacks push events while they mutate state; the host
//! drains them after each update and drives animation, audio, UI or
//! network replication from them.

use crate::state::Facing;

/// One spell spawned by a skill cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellCast {
    /// Spawn position on the x axis.
    pub x: f32,
    pub damage: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BossEvent {
    /// Health changed; carries the new value.
    HealthChanged(i32),
    /// A skill started and spawned these spells.
    SkillCast { spells: Vec<SpellCast> },
    /// A default attack started.
    AttackStarted,
    /// The running attack or skill finished.
    AttackEnded,
    /// Chasing started or stopped.
    MovingChanged(bool),
    FacingChanged(Facing),
    /// Took damage while neither moving nor attacking.
    Hurt,
}
