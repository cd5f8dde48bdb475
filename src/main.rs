use anyhow::Context;
use rhea::config::{AppConfig, ConfigManager, GameKind};
use rhea::engines::planning::{LogProgressCallback, RollingHorizonEngine};
use rhea::games::{LineWalk, MMaxGame};
use rhea::{Environment, RunSummary};
use std::env;

fn run_game<E: Environment>(config: &AppConfig, environment: E) -> anyhow::Result<RunSummary> {
    let mut engine = RollingHorizonEngine::new(config.rhea.clone(), environment)?
        .with_progress(Box::new(LogProgressCallback));
    Ok(engine.run()?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let manager = ConfigManager::new();

    if args.iter().any(|a| a == "--manifest") {
        let manifests = manager.get().manifests();
        println!("{}", serde_json::to_string_pretty(&manifests)?);
        return Ok(());
    }

    let config_path = args.first();
    manager
        .load_layered(config_path)
        .with_context(|| format!("loading configuration from {:?}", config_path))?;
    let config = manager.get();

    log::info!(
        "Running {:?} with rollout length {}, {} evaluations per turn, mutation probability {}",
        config.game.kind,
        config.rhea.rollout_actions_length,
        config.rhea.num_evals,
        config.rhea.mutation_probability
    );

    let summary = match config.game.kind {
        GameKind::MMax => run_game(
            &config,
            MMaxGame::new(config.game.m_max.num_dims, config.game.m_max.m),
        )?,
        GameKind::LineWalk => run_game(
            &config,
            LineWalk::new(config.game.line_walk.start, config.game.line_walk.goal),
        )?,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
