use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::chains::ChainConfig;
use crate::error::{Result, ScaffoldError};

/// Config template bundled with the binary.
const CONFIG_TEMPLATE: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/cw3d.config.template"));

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

pub const CONFIG_FILE_NAME: &str = "cw3d.config.ts";

/// `packages/shared`, relative to a project root.
#[must_use]
pub fn shared_package_dir(base: &Path) -> PathBuf {
  base.join("packages").join("shared")
}

/// `packages/shared/src/cw3d.config.ts`, relative to a project root.
#[must_use]
pub fn config_path(base: &Path) -> PathBuf {
  shared_package_dir(base).join("src").join(CONFIG_FILE_NAME)
}

#[must_use]
pub fn bundled_template() -> &'static str {
  CONFIG_TEMPLATE
}

/// Load the config template, preferring `override_path` when given.
pub fn load_template(override_path: Option<&Path>) -> Result<String> {
  match override_path {
    Some(path) => {
      fs::read_to_string(path).map_err(|err| ScaffoldError::fs("read template", path, err))
    }
    None => Ok(CONFIG_TEMPLATE.to_string()),
  }
}

/// Substitute every occurrence of the four chain placeholders.
///
/// Values are inserted verbatim. Any other `{{...}}` token is left untouched.
#[must_use]
pub fn render(template: &str, chain: &ChainConfig) -> String {
  template
    .replace("{{mainnetName}}", &chain.mainnet_name)
    .replace("{{mainnetChainId}}", &chain.mainnet_chain_id)
    .replace("{{testnetChainId}}", &chain.testnet_chain_id)
    .replace("{{testnetChainName}}", &chain.testnet_chain_name)
}

/// Names of `{{placeholder}}` tokens still present in `content`.
#[must_use]
pub fn unresolved_placeholders(content: &str) -> Vec<String> {
  let re = PLACEHOLDER_RE.get_or_init(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid regex")
  });
  let mut names: Vec<String> = re
    .captures_iter(content)
    .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
    .collect();
  names.dedup();
  names
}

/// Write `content` to the project's config file, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_config(project_dir: &Path, content: &str) -> Result<PathBuf> {
  let path = config_path(project_dir);
  fs::write(&path, content).map_err(|err| ScaffoldError::fs("write", &path, err))?;
  Ok(path)
}
