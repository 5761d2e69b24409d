//! Boss enemy AI built on a behavior tree.
//!
//! The boss picks one behavior per frame from a fixed tree:
//!
//! 1. Attack when the randomized cooldown allows, preferring a skill cast
//! 2. Otherwise chase the target
//! 3. Otherwise idle
//!
//! # Core Components
//!
//! - [`Boss`]: per-frame driver owning the tree and its context
//! - [`BossContext`]: state, tuning, seeded RNG and target seen by leaves
//! - [`actions`]: the five leaf functions
//! - [`presets::boss_tree`]: tree assembly
//! - [`BossEvent`]: notifications for presentation
//! - [`Target`]: boundary to whatever the boss fights

pub mod actions;
pub mod boss;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod presets;
pub mod state;
pub mod target;

// Re-export public API
pub use boss::Boss;
pub use config::BossConfig;
pub use context::BossContext;
pub use error::{BossError, ConfigError};
pub use events::{BossEvent, SpellCast};
pub use presets::{BossTree, boss_tree};
pub use state::{BossState, Facing};
pub use target::Target;
