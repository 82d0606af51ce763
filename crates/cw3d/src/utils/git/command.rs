use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::project::Cloner;
use crate::utils::error_messages::git_command_failed;

/// Run `git` quietly and return its trimmed stdout. On a non-zero exit the
/// error carries git's stderr.
pub fn git_stdout(args: &[&str], cwd: &Path) -> Result<String> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .output()
    .with_context(|| format!("failed to run git {}", args.join(" ")))?;
  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let summary = git_command_failed(args.first().copied().unwrap_or_default(), output.status);
    if stderr.is_empty() {
      bail!(summary);
    }
    bail!("{summary}: {stderr}");
  }
  Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Clones through the `git` executable on `PATH`.
#[derive(Clone, Debug, Default)]
pub struct GitCloner;

impl Cloner for GitCloner {
  fn shallow_clone(&self, url: &str, dest: &Path) -> Result<()> {
    let dest_str = dest
      .to_str()
      .with_context(|| format!("clone destination is not valid UTF-8: {}", dest.display()))?;
    let cwd = dest.parent().unwrap_or(dest);
    log::debug!("git clone --depth 1 {url} {dest_str}");
    git_stdout(
      &["clone", "--depth", "1", "--quiet", "--", url, dest_str],
      cwd,
    )?;
    Ok(())
  }
}
