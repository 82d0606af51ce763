use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};

use crate::common::test_env::TestEnv;

fn git_in(dir: &Path, args: &[&str]) -> Result<()> {
  let output = Command::new("git")
    .current_dir(dir)
    .args(args)
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .output()
    .context("run git command")?;
  if !output.status.success() {
    return Err(anyhow!(
      "git {:?} failed with status {status} and stderr: {stderr}",
      args,
      status = output.status,
      stderr = String::from_utf8_lossy(&output.stderr)
    ));
  }
  Ok(())
}

impl TestEnv {
  /// Turn the fixture template dir into a one-commit repository that looks
  /// like the upstream scaffold.
  pub fn init_template_repo(&self) -> Result<()> {
    let repo = self.template_repo_dir();
    self.write_project_tree(repo)?;
    std::fs::write(repo.join("README.md"), "# scaffold-alchemy\n")?;
    std::fs::create_dir_all(repo.join("packages").join("nextjs"))?;
    std::fs::write(
      repo.join("packages").join("nextjs").join("package.json"),
      "{\"name\":\"nextjs\"}\n",
    )?;

    git_in(repo, &["init", "--quiet"])?;
    git_in(repo, &["add", "."])?;
    git_in(
      repo,
      &[
        "-c",
        "user.name=cw3d-test",
        "-c",
        "user.email=cw3d-test@example.com",
        "-c",
        "commit.gpgsign=false",
        "commit",
        "--quiet",
        "-m",
        "template",
      ],
    )?;
    Ok(())
  }
}
