use merit_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MeritConfig::from_toml("").unwrap();

    assert_eq!(config.embedding.provider, "openai");
    assert_eq!(config.embedding.dimensions, 1536);
    assert_eq!(config.embedding.timeout_ms, 10_000);

    assert_eq!(config.decay.decay_factor_days, 30.0);
    assert_eq!(config.decay.decay_factor_ms(), 2_592_000_000.0);

    assert_eq!(config.judge.timeout_ms, 30_000);
    assert_eq!(config.judge.summary_max_chars, 280);

    assert_eq!(config.rewards.project_creation_xp, 200);
    assert_eq!(config.engine.history_window, 500);

    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[embedding]
dimensions = 384

[decay]
decay_factor_days = 7.0
"#;
    let config = MeritConfig::from_toml(toml).unwrap();
    assert_eq!(config.embedding.dimensions, 384);
    // Non-overridden fields keep defaults
    assert_eq!(config.embedding.timeout_ms, 10_000);
    assert_eq!(config.decay.decay_factor_ms(), 7.0 * 86_400_000.0);
    assert_eq!(config.judge.timeout_ms, 30_000);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = MeritConfig::from_toml("[embedding\ndimensions = ").unwrap_err();
    assert!(matches!(err, merit_core::MeritError::ConfigError(_)));
}

#[test]
fn config_rejects_wrongly_typed_values() {
    let err = MeritConfig::from_toml("[rewards]\nproject_creation_xp = \"lots\"").unwrap_err();
    assert!(err.to_string().contains("configuration error"));
}

#[test]
fn config_serde_roundtrip() {
    let config = MeritConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = MeritConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.embedding.dimensions, config.embedding.dimensions);
    assert_eq!(
        roundtripped.rewards.project_creation_xp,
        config.rewards.project_creation_xp
    );
}

#[test]
fn config_from_missing_file_names_the_path() {
    let err = MeritConfig::from_file("/definitely/not/here/merit.toml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/merit.toml"));
}
