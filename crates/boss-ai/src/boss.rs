//! Per-frame driver for one boss.

use behavior_tree::Outcome;

use crate::config::BossConfig;
use crate::context::BossContext;
use crate::error::BossError;
use crate::events::{BossEvent, SpellCast};
use crate::presets::{BossTree, boss_tree};
use crate::state::BossState;
use crate::target::Target;

/// A boss enemy: its behavior tree plus the context the tree decides over.
///
/// The host calls [`Boss::update`] once per frame and forwards animation
/// callbacks ([`Boss::resolve_default_hit`], [`Boss::end_attack`]) and
/// incoming damage ([`Boss::take_damage`]). Presentation reacts to the
/// events returned by [`Boss::drain_events`].
pub struct Boss<T> {
    tree: BossTree<T>,
    ctx: BossContext<T>,
}

impl<T: Target + 'static> Boss<T> {
    /// Creates a boss at `x` with the standard boss tree.
    ///
    /// # Errors
    ///
    /// Returns [`BossError::Config`] if `config` fails validation.
    pub fn new(config: BossConfig, x: f32) -> Result<Self, BossError> {
        config.validate()?;
        let tree = boss_tree()?;
        tracing::debug!(seed = config.seed, x, "boss spawned");

        Ok(Self {
            tree,
            ctx: BossContext::new(config, x),
        })
    }

    pub fn set_target(&mut self, target: T) {
        self.ctx.target = Some(target);
    }

    /// Drops the current target and returns it.
    pub fn clear_target(&mut self) -> Option<T> {
        self.ctx.target.take()
    }

    pub fn target(&self) -> Option<&T> {
        self.ctx.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.ctx.target.as_mut()
    }

    pub fn config(&self) -> &BossConfig {
        &self.ctx.config
    }

    pub fn state(&self) -> &BossState {
        &self.ctx.state
    }

    /// Advances the boss by `dt` seconds.
    ///
    /// The tree is evaluated only while a target is set; the returned
    /// outcome is `None` otherwise. A chasing boss then steps along its
    /// facing, unless an attack is playing, and the attack cooldown timer
    /// advances.
    pub fn update(&mut self, dt: f32) -> Option<Outcome> {
        let outcome = if self.ctx.target.is_some() {
            let outcome = self.tree.evaluate(&mut self.ctx);
            self.integrate_movement(dt);
            Some(outcome)
        } else {
            None
        };

        self.ctx.state.attack_cooldown += dt;
        outcome
    }

    fn integrate_movement(&mut self, dt: f32) {
        let state = &mut self.ctx.state;
        if state.moving && !state.is_attacking() {
            state.x += state.facing.sign() * self.ctx.config.speed * dt;
        }
    }

    /// Called when the attack or skill animation finishes.
    pub fn end_attack(&mut self) {
        if !self.ctx.state.is_attacking() {
            tracing::warn!("end_attack called with no attack in progress");
            return;
        }
        self.ctx.end_attack();
    }

    /// Called at the impact frame of a default attack.
    ///
    /// Damages the target if it is on the side the boss faces and inside
    /// `attack_range`. Returns whether the hit landed.
    pub fn resolve_default_hit(&mut self) -> bool {
        let Some(offset) = self.ctx.target_offset() else {
            return false;
        };

        let facing = self.ctx.state.facing;
        if offset.signum() != facing.sign() || offset.abs() >= self.ctx.config.attack_range {
            tracing::debug!(offset, %facing, "boss attack missed");
            return false;
        }

        let damage = self.ctx.config.default_damage;
        if let Some(target) = self.ctx.target.as_mut() {
            target.take_damage(damage);
        }
        tracing::debug!(damage, "boss attack hit");
        true
    }

    /// Called at the impact frame of one spell from a skill cast.
    ///
    /// Damages the target if it stands within `skill_radius` of the spell.
    /// Returns whether the spell hit.
    pub fn resolve_spell_hit(&mut self, spell: &SpellCast) -> bool {
        let radius = self.ctx.config.skill_radius;
        let Some(target) = self.ctx.target.as_mut() else {
            return false;
        };

        let distance = target.offset_from(spell.x).abs();
        if distance > radius {
            tracing::trace!(spell_x = spell.x, distance, "spell missed");
            return false;
        }

        target.take_damage(spell.damage);
        tracing::debug!(spell_x = spell.x, damage = spell.damage, "spell hit");
        true
    }

    /// Applies incoming damage to the boss.
    pub fn take_damage(&mut self, amount: i32) {
        let health = self.ctx.state.health.saturating_sub(amount);
        tracing::debug!(amount, health = health.max(0), "boss damaged");
        self.ctx.set_health(health);

        if !self.ctx.state.moving && !self.ctx.state.is_attacking() {
            self.ctx.events.push(BossEvent::Hurt);
        }
    }

    /// Takes all events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<BossEvent> {
        std::mem::take(&mut self.ctx.events)
    }
}
