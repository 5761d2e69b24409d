//! Error types for boss construction.

use behavior_tree::TreeError;

/// Invalid tuning in a [`crate::BossConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_health must be positive, got {0}")]
    MaxHealth(i32),

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("damage values must not be negative")]
    NegativeDamage,

    #[error("skill_chance is a percentage, got {0}")]
    SkillChance(u32),

    #[error("attack cooldown range is inverted: min {min} > max {max}")]
    CooldownRange { min: f32, max: f32 },

    #[error("skill count range is inverted: min {min} > max {max}")]
    SkillCountRange { min: u32, max: u32 },
}

/// Failure to construct a [`crate::Boss`].
#[derive(Debug, thiserror::Error)]
pub enum BossError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to assemble boss behavior tree: {0}")]
    Tree(#[from] TreeError),
}
