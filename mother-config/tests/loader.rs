use std::fs;
use std::path::Path;

use mother_config::loader::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, WindowConfigSource, load_from_file,
    load_with,
};
use mother_core::WindowConfig;
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn toml_file_by_extension() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("window.toml");
    fs::write(
        &path,
        "load_delay_ms = 150\nmax_past = 2\nmax_future = false\n",
    )?;

    let config = load_from_file(&path)?;
    assert_eq!(config.load_delay_ms, 150);
    assert_eq!(config.max_past, Some(2));
    assert_eq!(config.max_future, None);
    assert_eq!(config.friction, WindowConfig::default().friction);
    Ok(())
}

#[test]
fn json_file_by_extension() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("window.json");
    fs::write(&path, r#"{ "bounce_duration_ms": 450, "max_future": 10 }"#)?;

    let config = load_from_file(&path)?;
    assert_eq!(config.bounce_duration_ms, 450);
    assert_eq!(config.max_future, Some(10));
    Ok(())
}

#[test]
fn unknown_extension_tries_both_formats() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("window.conf");
    fs::write(&path, r#"{ "max_speed": 4.5 }"#)?;

    let config = load_from_file(&path)?;
    assert_eq!(config.max_speed, 4.5);
    Ok(())
}

#[test]
fn missing_file_names_the_path() {
    let err = load_from_file(Path::new("/definitely/not/here.toml"))
        .expect_err("missing file");
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

#[test]
fn invalid_values_fail_validation() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("window.toml");
    fs::write(&path, "max_speed = 0.0\n")?;

    let err = load_from_file(&path).expect_err("zero max speed");
    assert!(format!("{err:#}").contains("max_speed"));
    Ok(())
}

#[test]
fn true_is_not_a_limit() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("window.toml");
    fs::write(&path, "max_past = true\n")?;

    assert!(load_from_file(&path).is_err());
    Ok(())
}

#[test]
fn default_candidates_are_discovered() -> anyhow::Result<()> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("config"))?;
    let path = dir.path().join("config/mother.toml");
    fs::write(&path, "trigger_distance = 25.0\n")?;

    let (config, source) = load_with(no_env, dir.path())?;
    assert_eq!(source, WindowConfigSource::File(path));
    assert_eq!(config.trigger_distance, 25.0);
    Ok(())
}

#[test]
fn path_variable_beats_inline_json_and_files() -> anyhow::Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mother.toml"), "friction = 0.01\n")?;
    let explicit = dir.path().join("explicit.json");
    fs::write(&explicit, r#"{ "friction": 0.004 }"#)?;
    let explicit_str = explicit.display().to_string();

    let lookup = |key: &str| match key {
        CONFIG_PATH_VAR => Some(explicit_str.clone()),
        CONFIG_JSON_VAR => Some(r#"{ "friction": 0.02 }"#.to_string()),
        _ => None,
    };
    let (config, source) = load_with(lookup, dir.path())?;
    assert_eq!(source, WindowConfigSource::EnvPath(explicit));
    assert_eq!(config.friction, 0.004);
    Ok(())
}

#[test]
fn nothing_configured_yields_defaults() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let (config, source) = load_with(no_env, dir.path())?;
    assert_eq!(source, WindowConfigSource::Default);
    assert_eq!(config, WindowConfig::default());
    Ok(())
}
