use crate::app::cli::Cli;
use crate::app::models::{Config, DEFAULT_OUTPUT};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
struct PresetConfig {
    ignore_dirs: Option<Vec<String>>,
    ignore_files: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    output: Option<PathBuf>,
}

/// `~/.config/combine_code/presets.toml`
fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("combine_code")
        .join("presets.toml"))
}

fn load_presets_file(config_path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content)
        .context(format!("Failed to parse {:?}", config_path))?;

    Ok(parsed.presets)
}

/// Appends preset entries to the defaults, keeping the first occurrence of each.
fn extend_defaults(defaults: Vec<String>, extra: Option<Vec<String>>) -> Vec<String> {
    let mut combined = defaults;
    if let Some(mut items) = extra {
        combined.append(&mut items);
    }
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

pub fn resolve_config(cli: Cli, project_name: Option<&str>) -> Result<Config> {
    let presets = load_presets_file(&presets_path()?)?;
    resolve_with_presets(cli, project_name, &presets)
}

fn resolve_with_presets(
    cli: Cli,
    project_name: Option<&str>,
    presets: &HashMap<String, PresetConfig>,
) -> Result<Config> {
    // Preset to use: CLI flag > folder name > none
    let preset = match cli.preset.as_deref() {
        Some(key) => presets
            .get(key)
            .cloned()
            .with_context(|| format!("Unknown preset '{}'", key))?,
        None => project_name
            .and_then(|k| presets.get(k))
            .cloned()
            .unwrap_or_default(),
    };

    let defaults = Config::default();
    let output_path = cli
        .output
        .or(preset.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    Ok(Config::new(
        output_path,
        extend_defaults(defaults.ignored_dirs, preset.ignore_dirs),
        extend_defaults(defaults.ignored_files, preset.ignore_files),
        extend_defaults(defaults.allowed_extensions, preset.extensions),
        preset.exclude.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PRESETS: &str = r#"
[backend]
ignore_dirs = ["vendor", "target"]
extensions = [".rs"]
exclude = ["docs/**"]
output = "backend.txt"

[web]
ignore_files = ["secrets.json"]
"#;

    fn presets() -> HashMap<String, PresetConfig> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.toml");
        fs::write(&path, PRESETS).unwrap();
        load_presets_file(&path).unwrap()
    }

    #[test]
    fn missing_presets_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = load_presets_file(&dir.path().join("presets.toml")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_presets_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.toml");
        fs::write(&path, "[backend]\nextensions = \".rs\"\n").unwrap();
        assert!(load_presets_file(&path).is_err());
    }

    #[test]
    fn no_preset_gives_defaults() {
        let config = resolve_with_presets(Cli::default(), Some("unknown"), &presets()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.ignored_dirs, defaults.ignored_dirs);
        assert_eq!(config.ignored_files, defaults.ignored_files);
        assert_eq!(config.allowed_extensions, defaults.allowed_extensions);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn folder_name_selects_preset_and_extends_defaults() {
        let config = resolve_with_presets(Cli::default(), Some("backend"), &presets()).unwrap();
        assert_eq!(config.output_path, PathBuf::from("backend.txt"));
        assert!(config.is_ignored_dir("vendor"));
        assert!(config.is_ignored_dir("node_modules"));
        assert_eq!(
            config.ignored_dirs.iter().filter(|d| *d == "target").count(),
            1
        );
        assert!(config.has_allowed_extension("main.rs"));
        assert!(config.has_allowed_extension("app.ts"));
        assert!(config.is_ignored_file("backend.txt"));
        assert_eq!(config.exclude, vec!["docs/**".to_string()]);
    }

    #[test]
    fn cli_output_overrides_preset() {
        let cli = Cli {
            preset: Some("backend".to_string()),
            output: Some(PathBuf::from("mine.txt")),
        };
        let config = resolve_with_presets(cli, None, &presets()).unwrap();
        assert_eq!(config.output_path, PathBuf::from("mine.txt"));
        assert!(config.is_ignored_file("mine.txt"));
        assert!(config.is_ignored_dir("vendor"));
    }

    #[test]
    fn explicit_unknown_preset_is_an_error() {
        let cli = Cli {
            preset: Some("missing".to_string()),
            output: None,
        };
        assert!(resolve_with_presets(cli, Some("web"), &presets()).is_err());
    }
}
