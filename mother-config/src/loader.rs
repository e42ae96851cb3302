use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use mother_core::WindowConfig;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "MOTHER_CONFIG_PATH";
/// Environment variable carrying an inline JSON config.
pub const CONFIG_JSON_VAR: &str = "MOTHER_CONFIG_JSON";

/// Files probed, relative to the working directory, when neither variable is
/// set.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "mother.toml",
    "mother.json",
    "config/mother.toml",
    "config/mother.json",
];

/// Source that produced the window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WindowConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Load window configuration overrides using environment variables.
/// Evaluation order:
/// 1) `$MOTHER_CONFIG_PATH` (TOML or JSON file),
/// 2) `$MOTHER_CONFIG_JSON` (inline JSON),
/// 3) the first existing file in [`DEFAULT_CANDIDATES`],
/// 4) defaults.
///
/// Whatever is loaded is validated before it is returned.
pub fn load_from_env() -> anyhow::Result<(WindowConfig, WindowConfigSource)> {
    load_with(|key| env::var(key).ok(), Path::new("."))
}

/// [`load_from_env`] with an explicit variable lookup and base directory for
/// the default candidates.
pub fn load_with<F>(
    lookup: F,
    base_dir: &Path,
) -> anyhow::Result<(WindowConfig, WindowConfigSource)>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path_str) = lookup(CONFIG_PATH_VAR)
        && !path_str.trim().is_empty()
    {
        let path = PathBuf::from(path_str);
        let config = load_from_file(&path)?;
        return Ok((config, WindowConfigSource::EnvPath(path)));
    }

    if let Some(raw) = lookup(CONFIG_JSON_VAR)
        && !raw.trim().is_empty()
    {
        let parsed = parse_json(&raw)
            .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
        let config = validated(parsed, CONFIG_JSON_VAR)?;
        return Ok((config, WindowConfigSource::EnvInline));
    }

    if let Some(path) = find_default_file(base_dir) {
        let config = load_from_file(&path)?;
        return Ok((config, WindowConfigSource::File(path)));
    }

    Ok((WindowConfig::default(), WindowConfigSource::Default))
}

/// Read and validate a config file. `.json` is parsed as JSON, `.toml` and
/// `.tml` as TOML; anything else tries TOML then JSON.
pub fn load_from_file(path: &Path) -> anyhow::Result<WindowConfig> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read window config from {}", path.display())
    })?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents).with_context(|| {
            format!("invalid window config {}", path.display())
        })?,
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid window config {}: {}", path.display(), err)
            })?
        }
        _ => parse_from_str(&contents, &path.display().to_string())?,
    };
    validated(parsed, &path.display().to_string())
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> anyhow::Result<WindowConfig> {
    // TOML first, then JSON.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse window config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<WindowConfig> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid window config json: {err}"))
}

fn validated(
    config: WindowConfig,
    origin: &str,
) -> anyhow::Result<WindowConfig> {
    config.validate().with_context(|| {
        format!("window config {origin} failed validation")
    })?;
    Ok(config)
}

fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|candidate| base_dir.join(candidate))
        .find(|path| path.exists())
}
