//! Scripted encounter between a boss and a training dummy.

use behavior_tree::Outcome;
use boss_ai::{Boss, BossEvent, SpellCast, Target};

use crate::config::SimConfig;

/// Target that walks toward the boss and soaks up damage.
#[derive(Debug)]
pub struct Dummy {
    pub x: f32,
    pub speed: f32,
    pub damage_taken: i32,
}

impl Dummy {
    /// Walks toward `boss_x`, stopping one unit short of it.
    fn approach(&mut self, boss_x: f32, dt: f32) {
        let offset = boss_x - self.x;
        if offset.abs() > 1.0 {
            self.x += offset.signum() * (self.speed * dt).min(offset.abs() - 1.0);
        }
    }
}

impl Target for Dummy {
    fn offset_from(&self, x: f32) -> f32 {
        self.x - x
    }

    fn take_damage(&mut self, amount: i32) {
        self.damage_taken += amount;
    }
}

/// What a swing deals once its animation reaches the halfway point.
#[derive(Debug)]
enum Strike {
    Melee,
    Spells(Vec<SpellCast>),
}

/// Animation currently playing on the boss.
#[derive(Debug)]
struct Swing {
    remaining: f32,
    /// `None` once the strike has been resolved.
    strike: Option<Strike>,
}

/// Totals reported at the end of a run.
#[derive(Debug, Default)]
pub struct Summary {
    pub attacks: u32,
    pub casts: u32,
    pub spells: usize,
    pub damage_dealt: i32,
    pub running_ticks: u32,
    pub final_boss_x: f32,
    pub final_target_x: f32,
}

/// Runs the encounter for `config.ticks` frames.
pub fn run(boss: &mut Boss<Dummy>, config: &SimConfig) -> Summary {
    let mut summary = Summary::default();
    let mut swing: Option<Swing> = None;
    let half = config.attack_duration / 2.0;

    for tick in 0..config.ticks {
        let boss_x = boss.state().x();
        if let Some(target) = boss.target_mut() {
            target.approach(boss_x, config.dt);
        }

        let outcome = boss.update(config.dt);
        if outcome == Some(Outcome::Running) {
            summary.running_ticks += 1;
        }

        for event in boss.drain_events() {
            match &event {
                BossEvent::AttackStarted => {
                    summary.attacks += 1;
                    swing = Some(Swing {
                        remaining: config.attack_duration,
                        strike: Some(Strike::Melee),
                    });
                }
                BossEvent::SkillCast { spells } => {
                    summary.casts += 1;
                    summary.spells += spells.len();
                    swing = Some(Swing {
                        remaining: config.attack_duration,
                        strike: Some(Strike::Spells(spells.clone())),
                    });
                }
                _ => {}
            }
            tracing::info!(tick, ?outcome, ?event, "boss event");
        }

        if let Some(mut current) = swing.take() {
            current.remaining -= config.dt;
            if current.remaining <= half
                && let Some(strike) = current.strike.take()
            {
                match strike {
                    Strike::Melee => {
                        boss.resolve_default_hit();
                    }
                    Strike::Spells(spells) => {
                        for spell in &spells {
                            boss.resolve_spell_hit(spell);
                        }
                    }
                }
            }
            if current.remaining <= 0.0 {
                boss.end_attack();
                for event in boss.drain_events() {
                    tracing::info!(tick, ?event, "boss event");
                }
            } else {
                swing = Some(current);
            }
        }
    }

    summary.final_boss_x = boss.state().x();
    if let Some(target) = boss.target() {
        summary.damage_dealt = target.damage_taken;
        summary.final_target_x = target.x;
    }
    summary
}

#[cfg(test)]
mod tests {
    use boss_ai::BossConfig;

    use super::*;

    fn boss_with_dummy(config: BossConfig, target_x: f32) -> Boss<Dummy> {
        let mut boss = Boss::new(config, 0.0).expect("valid config");
        boss.set_target(Dummy {
            x: target_x,
            speed: 0.0,
            damage_taken: 0,
        });
        boss
    }

    #[test]
    fn dummy_stops_one_unit_short() {
        let mut dummy = Dummy {
            x: 3.0,
            speed: 10.0,
            damage_taken: 0,
        };

        dummy.approach(0.0, 1.0);
        assert_eq!(dummy.x, 1.0);

        dummy.approach(0.0, 1.0);
        assert_eq!(dummy.x, 1.0);
    }

    #[test]
    fn melee_boss_lands_hits() {
        let config = BossConfig {
            skill_chance: 0,
            attack_cooldown_min: 1.0,
            attack_cooldown_max: 1.0,
            ..BossConfig::default()
        };
        let mut boss = boss_with_dummy(config, 1.5);
        let sim = SimConfig {
            ticks: 300,
            dt: 0.05,
            ..SimConfig::default()
        };

        let summary = run(&mut boss, &sim);

        assert!(summary.attacks >= 2);
        assert_eq!(summary.casts, 0);
        // The last swing may still be playing when the run ends.
        let landed = summary.damage_dealt / BossConfig::DEFAULT_DAMAGE;
        assert_eq!(summary.damage_dealt % BossConfig::DEFAULT_DAMAGE, 0);
        assert!(landed == summary.attacks as i32 || landed + 1 == summary.attacks as i32);
    }

    #[test]
    fn caster_boss_lands_spells() {
        let config = BossConfig {
            skill_chance: 100,
            ..BossConfig::default()
        };
        let mut boss = boss_with_dummy(config, 1.5);
        let sim = SimConfig {
            ticks: 600,
            dt: 0.05,
            ..SimConfig::default()
        };

        let summary = run(&mut boss, &sim);

        assert!(summary.casts >= 2);
        assert_eq!(summary.attacks, 0);
        // Only the first spell of each cast falls within reach of the dummy,
        // and the last cast may still be playing when the run ends.
        let landed = summary.damage_dealt / BossConfig::DEFAULT_SKILL_DAMAGE;
        assert!(summary.damage_dealt > 0);
        assert_eq!(summary.damage_dealt % BossConfig::DEFAULT_SKILL_DAMAGE, 0);
        assert!(landed == summary.casts as i32 || landed + 1 == summary.casts as i32);
    }
}
