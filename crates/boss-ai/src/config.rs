//! Boss tuning parameters.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Tunable numbers for one boss.
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides. Times are in seconds, distances in world units, chances in
/// percent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BossConfig {
    pub max_health: i32,
    /// Movement speed while chasing (units per second).
    pub speed: f32,
    /// Maximum distance at which a default attack starts and lands.
    pub attack_range: f32,
    /// Chasing stops once the target is closer than this.
    pub trace_distance: f32,
    pub default_damage: i32,
    pub skill_damage: i32,
    /// Chance (0-100) that a skill is cast when the attack cooldown is ready.
    pub skill_chance: u32,
    /// Lower bound of the randomized attack cooldown.
    pub attack_cooldown_min: f32,
    /// Upper bound (exclusive) of the randomized attack cooldown.
    pub attack_cooldown_max: f32,
    /// Lower bound of spells spawned per skill cast.
    pub skill_count_min: u32,
    /// Upper bound (exclusive) of spells spawned per skill cast.
    pub skill_count_max: u32,
    /// Distance between consecutive spells of one cast.
    pub skill_spacing: f32,
    /// Half-width of the area a single spell damages.
    pub skill_radius: f32,
    /// Seed of the boss' random source.
    pub seed: u64,
}

impl BossConfig {
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_SPEED: f32 = 2.0;
    pub const DEFAULT_ATTACK_RANGE: f32 = 3.0;
    pub const DEFAULT_TRACE_DISTANCE: f32 = 2.0;
    pub const DEFAULT_DAMAGE: i32 = 5;
    pub const DEFAULT_SKILL_DAMAGE: i32 = 10;
    pub const DEFAULT_SKILL_CHANCE: u32 = 30;
    pub const DEFAULT_ATTACK_COOLDOWN_MIN: f32 = 3.0;
    pub const DEFAULT_ATTACK_COOLDOWN_MAX: f32 = 5.0;
    pub const DEFAULT_SKILL_COUNT_MIN: u32 = 2;
    pub const DEFAULT_SKILL_COUNT_MAX: u32 = 5;
    pub const DEFAULT_SKILL_SPACING: f32 = 3.0;
    pub const DEFAULT_SKILL_RADIUS: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            speed: Self::DEFAULT_SPEED,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            trace_distance: Self::DEFAULT_TRACE_DISTANCE,
            default_damage: Self::DEFAULT_DAMAGE,
            skill_damage: Self::DEFAULT_SKILL_DAMAGE,
            skill_chance: Self::DEFAULT_SKILL_CHANCE,
            attack_cooldown_min: Self::DEFAULT_ATTACK_COOLDOWN_MIN,
            attack_cooldown_max: Self::DEFAULT_ATTACK_COOLDOWN_MAX,
            skill_count_min: Self::DEFAULT_SKILL_COUNT_MIN,
            skill_count_max: Self::DEFAULT_SKILL_COUNT_MAX,
            skill_spacing: Self::DEFAULT_SKILL_SPACING,
            skill_radius: Self::DEFAULT_SKILL_RADIUS,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that ranges are ordered and magnitudes are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("speed", self.speed),
            ("attack_range", self.attack_range),
            ("trace_distance", self.trace_distance),
            ("attack_cooldown_min", self.attack_cooldown_min),
            ("attack_cooldown_max", self.attack_cooldown_max),
            ("skill_spacing", self.skill_spacing),
            ("skill_radius", self.skill_radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if self.max_health <= 0 {
            return Err(ConfigError::MaxHealth(self.max_health));
        }
        for (field, value) in [
            ("speed", self.speed),
            ("attack_range", self.attack_range),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("trace_distance", self.trace_distance),
            ("attack_cooldown_min", self.attack_cooldown_min),
            ("skill_spacing", self.skill_spacing),
            ("skill_radius", self.skill_radius),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.default_damage < 0 || self.skill_damage < 0 {
            return Err(ConfigError::NegativeDamage);
        }
        if self.skill_chance > 100 {
            return Err(ConfigError::SkillChance(self.skill_chance));
        }
        if self.attack_cooldown_min > self.attack_cooldown_max {
            return Err(ConfigError::CooldownRange {
                min: self.attack_cooldown_min,
                max: self.attack_cooldown_max,
            });
        }
        if self.skill_count_min > self.skill_count_max {
            return Err(ConfigError::SkillCountRange {
                min: self.skill_count_min,
                max: self.skill_count_max,
            });
        }
        Ok(())
    }

    /// Parses and validates a config from TOML text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: BossConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boss config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid boss config: {}", e))?;

        Ok(config)
    }

    /// Loads and validates a config from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;

        Self::parse(&content)
    }
}

impl Default for BossConfig {
    fn default() -> Self {
        Self::new()
    }
}
