use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::{Builder, TempDir};

use super::tmp_root;

pub const PROJECT_MANIFEST: &str = r#"{
  "name": "scaffold-alchemy",
  "private": true,
  "workspaces": {
    "packages": ["packages/*"]
  }
}
"#;

#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
  xdg_home: TempDir,
  template_repo: TempDir,
}

impl TestEnv {
  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("cw3d-test-")
      .tempdir_in(tmp_root())
      .expect("temp dir");
    let xdg_home = Builder::new()
      .prefix("xdg-")
      .tempdir_in(tmp_root())
      .expect("xdg dir");
    let template_repo = Builder::new()
      .prefix("template-")
      .tempdir_in(tmp_root())
      .expect("template dir");
    Self {
      temp,
      xdg_home,
      template_repo,
    }
  }

  /// Working directory the binary runs in.
  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn xdg_home_dir(&self) -> &Path {
    self.xdg_home.path()
  }

  pub fn template_repo_dir(&self) -> &Path {
    self.template_repo.path()
  }

  /// `file://` URL of the fixture template repository.
  pub fn template_repo_url(&self) -> String {
    format!("file://{}", self.template_repo_dir().display())
  }

  pub fn cw3d(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("cw3d")?;
    cmd.current_dir(self.path());
    cmd.env("XDG_CONFIG_HOME", self.xdg_home_dir());
    cmd.env("CW3D_TEMPLATE_REPO", self.template_repo_url());
    cmd.env_remove("CW3D_LOG");
    Ok(cmd)
  }

  /// Write the global `cw3d.toml`.
  pub fn write_global_config(&self, body: &str) -> Result<PathBuf> {
    let dir = self.xdg_home_dir().join("cw3d");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("cw3d.toml");
    std::fs::write(&path, body)?;
    Ok(path)
  }

  /// Lay out the files `is_inside_project` looks for under `root`.
  pub fn write_project_tree(&self, root: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(root.join("packages").join("shared").join("src"))?;
    std::fs::write(root.join("package.json"), PROJECT_MANIFEST)?;
    let config = config_file(root);
    std::fs::write(&config, "export const cw3dConfig = {};\n")?;
    Ok(config)
  }
}

pub fn config_file(root: &Path) -> PathBuf {
  root
    .join("packages")
    .join("shared")
    .join("src")
    .join("cw3d.config.ts")
}
