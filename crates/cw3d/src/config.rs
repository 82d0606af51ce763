use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize as _;
use serde::Deserialize;
use toml::Value as TomlValue;

/// Known top-level config keys.
const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["chain", "template"];

/// Known keys within `[template]` section.
const KNOWN_TEMPLATE_KEYS: &[&str] = &["repo", "path"];

/// Overrides `template.repo`.
pub const TEMPLATE_REPO_ENV: &str = "CW3D_TEMPLATE_REPO";

// Embed repository defaults
const DEFAULT_TOML: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/cw3d.toml"));

/// Embedded config template with all options commented out for documentation.
const CONFIG_TEMPLATE: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/cw3d.template.toml"));

/// Returns the config template with all options commented out.
#[must_use]
pub fn config_template() -> &'static str {
  CONFIG_TEMPLATE
}

/// Resolve the global config file path.
///
/// # Errors
/// Returns an error if the XDG config home cannot be resolved.
pub fn global_config_path() -> Result<PathBuf> {
  let xdg = xdg::BaseDirectories::with_prefix("cw3d");
  let config_home = xdg
    .get_config_home()
    .ok_or_else(|| anyhow::anyhow!("unable to resolve XDG config home"))?;
  Ok(config_home.join("cw3d.toml"))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
  /// Repository cloned into new projects.
  #[serde(default)]
  pub repo: String,
  /// File rendered instead of the bundled `cw3d.config.ts` template.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cw3dConfig {
  /// Chain pre-selected when `--chain` is omitted.
  #[serde(default)]
  pub chain: Option<String>,
  #[serde(default)]
  pub template: TemplateConfig,
}

#[derive(Debug, Clone)]
pub struct AppContext {
  pub cwd: PathBuf,
  pub config: Cw3dConfig,
}

fn merge_values(base: &mut TomlValue, overlay: TomlValue) {
  match (base, overlay) {
    (TomlValue::Table(base_tbl), TomlValue::Table(overlay_tbl)) => {
      for (k, v) in overlay_tbl {
        match base_tbl.get_mut(&k) {
          Some(existing) => merge_values(existing, v),
          None => {
            base_tbl.insert(k, v);
          }
        }
      }
    }
    // Arrays and scalars: replace last-wins
    (base_slot, new_v) => *base_slot = new_v,
  }
}

/// Warn about unknown keys in a parsed TOML config file.
fn warn_unknown_keys(val: &TomlValue, file_path: &Path) {
  let TomlValue::Table(table) = val else {
    return;
  };

  for key in table.keys() {
    if !KNOWN_TOP_LEVEL_KEYS.contains(&key.as_str()) {
      anstream::eprintln!(
        "{}: unknown config key '{}' in {} (did you mean one of: {}?)",
        "warning".yellow(),
        key,
        file_path.display(),
        KNOWN_TOP_LEVEL_KEYS.join(", ")
      );
    }
  }

  if let Some(TomlValue::Table(template)) = table.get("template") {
    for key in template.keys() {
      if !KNOWN_TEMPLATE_KEYS.contains(&key.as_str()) {
        anstream::eprintln!(
          "{}: unknown config key 'template.{}' in {} (known keys: {})",
          "warning".yellow(),
          key,
          file_path.display(),
          KNOWN_TEMPLATE_KEYS.join(", ")
        );
      }
    }
  }
}

/// Load configuration from embedded defaults, the global XDG file and the environment.
///
/// # Errors
/// Returns an error if the global config file cannot be read or is not valid TOML.
pub fn load_config() -> Result<Cw3dConfig> {
  let mut merged: TomlValue =
    toml::from_str(DEFAULT_TOML).context("invalid embedded default config")?;

  let xdg = xdg::BaseDirectories::with_prefix("cw3d");
  if let Some(global_path) = xdg.find_config_file("cw3d.toml") {
    let data = fs::read_to_string(&global_path)
      .with_context(|| format!("failed to read {}", global_path.display()))?;
    let val: TomlValue = toml::from_str(&data)
      .with_context(|| format!("invalid TOML in {}", global_path.display()))?;
    warn_unknown_keys(&val, &global_path);
    merge_values(&mut merged, val);
  }

  // Deserialize into strongly typed config
  let merged_str = toml::to_string(&merged).context("failed to serialize merged config")?;
  let mut cfg: Cw3dConfig =
    toml::from_str(&merged_str).context("failed to parse merged config")?;

  if let Ok(repo) = std::env::var(TEMPLATE_REPO_ENV)
    && !repo.trim().is_empty()
  {
    cfg.template.repo = repo.trim().to_string();
  }
  if let Some(path) = cfg.template.path.take() {
    cfg.template.path = Some(expand_home(&path));
  }
  Ok(cfg)
}

// Expand a leading `~/` against $HOME
fn expand_home(path: &Path) -> PathBuf {
  if let Ok(rest) = path.strip_prefix("~")
    && let Some(home) = std::env::var_os("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
