//! Simulator configuration.
use std::env;
use std::path::PathBuf;

/// Encounter settings read from the environment.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Optional TOML file with boss tuning; defaults are used when unset.
    pub boss_config: Option<PathBuf>,
    /// Number of frames to simulate.
    pub ticks: u32,
    /// Frame length in seconds.
    pub dt: f32,
    /// Overrides the seed from the boss config.
    pub seed: Option<u64>,
    /// Starting x of the dummy target (the boss starts at 0).
    pub target_x: f32,
    /// Dummy walking speed toward the boss, units per second.
    pub target_speed: f32,
    /// Length of an attack or skill animation in seconds.
    pub attack_duration: f32,
}

impl SimConfig {
    /// Construct simulator configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOSS_CONFIG` - Path to a boss tuning TOML file
    /// - `BOSS_SIM_TICKS` - Frames to simulate (default: 600)
    /// - `BOSS_SIM_DT` - Frame length in seconds (default: 1/60)
    /// - `BOSS_SIM_SEED` - RNG seed override
    /// - `BOSS_SIM_TARGET_X` - Dummy start position (default: 12.0)
    /// - `BOSS_SIM_TARGET_SPEED` - Dummy approach speed (default: 0.5)
    /// - `BOSS_SIM_ATTACK_DURATION` - Attack animation length (default: 0.8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("BOSS_CONFIG") {
            config.boss_config = Some(PathBuf::from(path));
        }
        if let Some(ticks) = read_env::<u32>("BOSS_SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Some(dt) = read_env::<f32>("BOSS_SIM_DT") {
            config.dt = dt.max(0.001);
        }
        config.seed = read_env::<u64>("BOSS_SIM_SEED");
        if let Some(x) = read_env::<f32>("BOSS_SIM_TARGET_X") {
            config.target_x = x;
        }
        if let Some(speed) = read_env::<f32>("BOSS_SIM_TARGET_SPEED") {
            config.target_speed = speed.max(0.0);
        }
        if let Some(duration) = read_env::<f32>("BOSS_SIM_ATTACK_DURATION") {
            config.attack_duration = duration.max(0.0);
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            boss_config: None,
            ticks: 600,
            dt: 1.0 / 60.0,
            seed: None,
            target_x: 12.0,
            target_speed: 0.5,
            attack_duration: 0.8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
