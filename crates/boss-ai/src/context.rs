//! Boss context passed to every leaf function.
//!
//! The [`BossContext`] is the "blackboard" of the boss tree. It owns
//! everything a leaf may read or change during a tick:
//!
//! - Tuning from [`BossConfig`]
//! - Mutable [`BossState`] (flags, timers, position)
//! - The seeded random source used for probability checks
//! - The current target, if any
//! - Pending [`BossEvent`]s for presentation

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::BossConfig;
use crate::events::{BossEvent, SpellCast};
use crate::state::{BossState, Facing};
use crate::target::Target;

/// Context for boss decision-making.
///
/// # Determinism
///
/// All randomness comes from a ChaCha8 generator seeded from
/// [`BossConfig::seed`], so two bosses with the same config, the same
/// target movement and the same `dt` sequence make the same decisions.
pub struct BossContext<T> {
    pub(crate) config: BossConfig,
    pub(crate) state: BossState,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) target: Option<T>,
    pub(crate) events: Vec<BossEvent>,
}

impl<T: Target> BossContext<T> {
    /// Creates a context for a boss standing at `x` with full health.
    ///
    /// `config` is expected to be validated.
    pub fn new(config: BossConfig, x: f32) -> Self {
        Self {
            state: BossState::new(config.max_health, x),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            target: None,
            events: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    pub fn state(&self) -> &BossState {
        &self.state
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Signed offset from the boss to its target.
    pub fn target_offset(&self) -> Option<f32> {
        self.target.as_ref().map(|t| t.offset_from(self.state.x))
    }

    /// Rolls a percentage in `0..100`.
    pub(crate) fn roll_percent(&mut self) -> u32 {
        self.rng.gen_range(0..100)
    }

    /// Draws an attack cooldown in `[min, max)`, or `min` if the range is empty.
    pub(crate) fn draw_cooldown(&mut self) -> f32 {
        let (min, max) = (self.config.attack_cooldown_min, self.config.attack_cooldown_max);
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    fn draw_spell_count(&mut self) -> u32 {
        let (min, max) = (self.config.skill_count_min, self.config.skill_count_max);
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    pub(crate) fn set_moving(&mut self, moving: bool) {
        if self.state.moving != moving {
            self.state.moving = moving;
            self.events.push(BossEvent::MovingChanged(moving));
        }
    }

    pub(crate) fn set_facing(&mut self, facing: Facing) {
        if self.state.facing != facing {
            self.state.facing = facing;
            self.events.push(BossEvent::FacingChanged(facing));
        }
    }

    /// Turns toward the target, if there is one and it is not at the same x.
    ///
    /// Only the movement leaves call this, so the facing chosen when an
    /// attack starts holds for the whole swing.
    pub(crate) fn face_target(&mut self) {
        if let Some(offset) = self.target_offset()
            && offset != 0.0
        {
            self.set_facing(Facing::toward(offset));
        }
    }

    /// Starts a default attack and restarts the cooldown timer.
    pub(crate) fn start_attack(&mut self) {
        self.state.attacking = true;
        self.state.attack_cooldown = 0.0;
        self.events.push(BossEvent::AttackStarted);
    }

    /// Starts a skill cast, spawning spells behind the target.
    ///
    /// Spells are laid out from the target's position away from the boss,
    /// `skill_spacing` apart.
    pub(crate) fn start_skill(&mut self, offset: f32) {
        let count = self.draw_spell_count();
        let direction = Facing::toward(offset).sign();
        let origin = self.state.x + offset;
        let spells = (0..count)
            .map(|i| SpellCast {
                x: origin + self.config.skill_spacing * i as f32 * direction,
                damage: self.config.skill_damage,
            })
            .collect();

        self.state.skill_using = true;
        self.state.attack_cooldown = 0.0;
        self.events.push(BossEvent::SkillCast { spells });
    }

    /// Clears both the attack and the skill flag.
    pub(crate) fn end_attack(&mut self) {
        if self.state.is_attacking() {
            self.state.attacking = false;
            self.state.skill_using = false;
            self.events.push(BossEvent::AttackEnded);
        }
    }

    pub(crate) fn set_health(&mut self, health: i32) {
        self.state.health = health.max(0);
        self.events.push(BossEvent::HealthChanged(self.state.health));
    }
}
