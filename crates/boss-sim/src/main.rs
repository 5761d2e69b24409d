//! Headless boss encounter entry point.
mod arena;
mod config;

use anyhow::Result;
use boss_ai::{Boss, BossConfig};

use arena::Dummy;
use config::SimConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let sim = SimConfig::from_env();
    let mut boss_config = match &sim.boss_config {
        Some(path) => BossConfig::load(path)?,
        None => BossConfig::default(),
    };
    if let Some(seed) = sim.seed {
        boss_config.seed = seed;
    }
    tracing::info!(?sim, seed = boss_config.seed, "starting encounter");

    let mut boss = Boss::new(boss_config, 0.0)?;
    boss.set_target(Dummy {
        x: sim.target_x,
        speed: sim.target_speed,
        damage_taken: 0,
    });

    let summary = arena::run(&mut boss, &sim);
    tracing::info!(
        attacks = summary.attacks,
        casts = summary.casts,
        spells = summary.spells,
        damage = summary.damage_dealt,
        running_ticks = summary.running_ticks,
        boss_x = summary.final_boss_x,
        target_x = summary.final_target_x,
        "encounter finished"
    );

    Ok(())
}
