use rhea::config::{AppConfig, ConfigManager, ConfigSection, GameKind, RheaConfig};
use rhea::RheaError;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rhea-{}-{}", std::process::id(), name))
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_path("round_trip.toml");
    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.rhea.num_evals = 12;
            config.rhea.discount_factor = Some(0.95);
            config.rhea.seed = Some(99);
            config.game.kind = GameKind::LineWalk;
            config.game.line_walk.goal = -4;
        })
        .unwrap();

    manager.save_to_file(&path).unwrap();
    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.get(), manager.get());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = temp_path("partial.toml");
    std::fs::write(&path, "[rhea]\nrollout_actions_length = 4\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let config = manager.get();
    assert_eq!(config.rhea.rollout_actions_length, 4);
    assert_eq!(config.rhea.num_evals, RheaConfig::default().num_evals);
    assert_eq!(config.game, AppConfig::default().game);
}

#[test]
fn test_invalid_file_is_rejected() {
    let path = temp_path("invalid.toml");
    std::fs::write(&path, "[rhea]\nmutation_probability = 2.0\n").unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(RheaError::Configuration(_))));
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let manager = ConfigManager::new();
    assert!(matches!(
        manager.load_from_file(temp_path("does_not_exist.toml")),
        Err(RheaError::Configuration(_))
    ));
}

#[test]
fn test_rejected_update_keeps_previous_config() {
    let manager = ConfigManager::new();

    let result = manager.update(|config| config.rhea.num_evals = 0);

    assert!(result.is_err());
    assert_eq!(manager.get().rhea.num_evals, 50);
}

#[test]
fn test_layered_loading_merges_file_and_environment() {
    let path = temp_path("layered.toml");
    std::fs::write(
        &path,
        "[rhea]\nrollout_actions_length = 3\nnum_evals = 10\n\n[game]\nkind = \"line_walk\"\n",
    )
    .unwrap();
    std::env::set_var("RHEA__RHEA__NUM_EVALS", "20");

    let manager = ConfigManager::new();
    let result = manager.load_layered(Some(&path));
    std::env::remove_var("RHEA__RHEA__NUM_EVALS");
    std::fs::remove_file(&path).ok();
    result.unwrap();

    let config = manager.get();
    assert_eq!(config.rhea.rollout_actions_length, 3);
    assert_eq!(config.rhea.num_evals, 20);
    assert_eq!(config.rhea.mutation_probability, 0.1);
    assert_eq!(config.game.kind, GameKind::LineWalk);
}

#[test]
fn test_manifests_cover_both_sections() {
    let manifests = AppConfig::default().manifests();
    let sections: Vec<_> = manifests.iter().map(|m| m.section.as_str()).collect();
    assert_eq!(sections, vec!["RHEA", "Game"]);

    let probability = manifests[0]
        .fields
        .iter()
        .find(|f| f.name == "mutation_probability")
        .unwrap();
    assert_eq!(probability.min, Some(0.0));
    assert_eq!(probability.max, Some(1.0));
    assert_eq!(probability.default, serde_json::json!(0.1));
    assert_eq!(RheaConfig::section_name(), "rhea");
}
