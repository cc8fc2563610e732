use filedeck_config::{Config, LogLevel};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.server_url, "http://127.0.0.1:3000");
    assert_eq!(config.start_path, "");
    assert_eq!(config.min_pane_percent, 10.0);
    assert_eq!(config.divider_width, 1.0);
    assert_eq!(config.divider_hit_width, 8.0);
    assert_eq!(config.font_size, 13.0);
    assert_eq!(config.window_width, 1280.0);
    assert_eq!(config.window_height, 800.0);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_server_url("http://files.internal:8080")
        .with_start_path("src/ui")
        .with_min_pane_percent(20.0);
    assert_eq!(config.server_url, "http://files.internal:8080");
    assert_eq!(config.start_path, "src/ui");
    assert_eq!(config.min_pane_percent, 20.0);
}

#[test]
fn test_config_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config::new()
        .with_server_url("http://10.1.2.3:3000")
        .with_start_path("notes");
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.server_url, "http://10.1.2.3:3000");
    assert_eq!(loaded.start_path, "notes");
}

#[test]
fn test_missing_config_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh").join("config.toml");
    assert!(!path.exists());

    let config = Config::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.server_url, Config::default().server_url);
}

#[test]
fn test_unknown_fields_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "server_url = \"http://localhost:3000\"\nfuture_option = true\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.server_url, "http://localhost:3000");
}

#[test]
fn test_log_level_names() {
    assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::parse("nope"), None);
    assert_eq!(log::LevelFilter::from(LogLevel::Debug), log::LevelFilter::Debug);
}
