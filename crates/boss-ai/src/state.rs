//! Mutable per-boss state carried across ticks.

/// Horizontal facing of the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Facing that points along the sign of `offset` (zero counts as right).
    pub fn toward(offset: f32) -> Self {
        if offset.is_sign_negative() && offset != 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    /// Unit step along the x axis: -1 for left, 1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Everything the leaf functions remember between ticks.
///
/// The tree itself keeps no memory; "attack in progress" or "chasing" are
/// these flags, set by leaves and cleared by leaves or animation callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct BossState {
    pub(crate) health: i32,
    pub(crate) attacking: bool,
    pub(crate) skill_using: bool,
    pub(crate) moving: bool,
    /// Seconds since the last attack or skill started.
    pub(crate) attack_cooldown: f32,
    pub(crate) facing: Facing,
    /// Position on the x axis.
    pub(crate) x: f32,
}

impl BossState {
    pub fn new(max_health: i32, x: f32) -> Self {
        Self {
            health: max_health,
            attacking: false,
            skill_using: false,
            moving: false,
            attack_cooldown: 0.0,
            facing: Facing::default(),
            x,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// `true` while a default attack or a skill cast is in progress.
    pub fn is_attacking(&self) -> bool {
        self.attacking || self.skill_using
    }

    pub fn is_casting(&self) -> bool {
        self.skill_using
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn x(&self) -> f32 {
        self.x
    }
}
