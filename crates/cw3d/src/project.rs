use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde_json::Value as JsonValue;

use crate::chains::{ChainConfig, ChainRegistry};
use crate::error::{Result, ScaffoldError};
use crate::template::{
  config_path, load_template, render, shared_package_dir, unresolved_placeholders, write_config,
};
use crate::utils::log::t;
use crate::{log_info, log_warn};

/// Asks the user a yes/no question.
pub trait Prompt {
  fn confirm(&self, message: &str, default: bool) -> anyhow::Result<bool>;
}

/// Fetches a repository into a local directory, history depth 1.
pub trait Cloner {
  fn shallow_clone(&self, url: &str, dest: &Path) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
  pub project_name: String,
  pub project_dir: PathBuf,
  pub current_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
  Created(ProjectContext),
  /// The target directory existed and the user declined to overwrite it.
  Cancelled,
}

/// Creates projects from the template repository and writes their chain config.
pub struct Initializer<'a> {
  registry: &'a ChainRegistry,
  cloner: &'a dyn Cloner,
  template_repo: String,
  template_path: Option<PathBuf>,
}

impl<'a> Initializer<'a> {
  pub fn new(registry: &'a ChainRegistry, cloner: &'a dyn Cloner, template_repo: &str) -> Self {
    Self {
      registry,
      cloner,
      template_repo: template_repo.to_string(),
      template_path: None,
    }
  }

  /// Use a template file instead of the bundled one.
  #[must_use]
  pub fn with_template_path(mut self, path: Option<PathBuf>) -> Self {
    self.template_path = path;
    self
  }

  /// Scaffold `project_name` inside `current_dir`.
  ///
  /// The chain and template are resolved before anything on disk is touched.
  pub fn initialize(
    &self,
    current_dir: &Path,
    project_name: &str,
    chain_short_name: &str,
    prompt: &dyn Prompt,
  ) -> Result<InitOutcome> {
    validate_project_name(project_name)?;
    let chain = self.registry.resolve(chain_short_name)?;
    let template = load_template(self.template_path.as_deref())?;

    let project_dir = current_dir.join(project_name);

    if project_dir.exists() {
      let question =
        format!("Directory {project_name} already exists. Do you want to overwrite it?");
      let overwrite = prompt
        .confirm(&question, false)
        .map_err(|err| ScaffoldError::Prompt(format!("{err:#}")))?;
      if !overwrite {
        return Ok(InitOutcome::Cancelled);
      }
      log::debug!("removing existing {}", project_dir.display());
      remove_path(&project_dir)?;
    }

    fs::create_dir_all(&project_dir)
      .map_err(|err| ScaffoldError::fs("create", &project_dir, err))?;

    log_info!("");
    log_info!("Cloning template from {}...", t::path(&self.template_repo));
    self
      .cloner
      .shallow_clone(&self.template_repo, &project_dir)
      .map_err(|err| ScaffoldError::CloneFailed {
        url: self.template_repo.clone(),
        reason: format!("{err:#}"),
      })?;

    strip_git_dir(&project_dir)?;
    materialize(&project_dir, &template, chain)?;

    Ok(InitOutcome::Created(ProjectContext {
      project_name: project_name.to_string(),
      project_dir,
      current_dir: current_dir.to_path_buf(),
    }))
  }

  /// Rewrite the chain config of the project rooted at `current_dir`.
  ///
  /// Performs no directory or clone operations; the package tree must exist.
  pub fn update_config(&self, current_dir: &Path, chain_short_name: &str) -> Result<PathBuf> {
    let chain = self.registry.resolve(chain_short_name)?;
    let template = load_template(self.template_path.as_deref())?;
    materialize(current_dir, &template, chain)
  }
}

/// Render `template` for `chain` and write it into the project's shared package.
fn materialize(project_dir: &Path, template: &str, chain: &ChainConfig) -> Result<PathBuf> {
  let content = render(template, chain);
  let leftover = unresolved_placeholders(&content);
  if !leftover.is_empty() {
    log_warn!("Template placeholders left unresolved: {}", leftover.join(", "));
  }
  let path = write_config(project_dir, &content)?;
  log::debug!("wrote {} for chain {}", path.display(), chain.short_name);
  Ok(path)
}

/// Whether `dir` looks like the root of a scaffolded project.
///
/// Never fails: any missing file, parse error or unexpected shape yields `false`.
#[must_use]
pub fn is_inside_project(dir: &Path) -> bool {
  let Ok(data) = fs::read_to_string(dir.join("package.json")) else {
    return false;
  };
  let Ok(manifest) = serde_json::from_str::<JsonValue>(&data) else {
    return false;
  };
  let has_packages = manifest
    .get("workspaces")
    .and_then(|w| w.get("packages"))
    .and_then(JsonValue::as_array)
    .is_some_and(|packages| !packages.is_empty());
  if !has_packages {
    return false;
  }
  shared_package_dir(dir).is_dir() && config_path(dir).exists()
}

fn validate_project_name(name: &str) -> Result<()> {
  let mut components = Path::new(name).components();
  match (components.next(), components.next()) {
    (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
    _ => Err(ScaffoldError::InvalidProjectName(name.to_string())),
  }
}

fn remove_path(path: &Path) -> Result<()> {
  let meta =
    fs::symlink_metadata(path).map_err(|err| ScaffoldError::fs("inspect", path, err))?;
  let removed = if meta.is_dir() {
    fs::remove_dir_all(path)
  } else {
    fs::remove_file(path)
  };
  removed.map_err(|err| ScaffoldError::fs("remove", path, err))
}

fn strip_git_dir(project_dir: &Path) -> Result<()> {
  let git_dir = project_dir.join(".git");
  match fs::remove_dir_all(&git_dir) {
    Ok(()) => Ok(()),
    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(err) => Err(ScaffoldError::fs("remove", git_dir, err)),
  }
}
