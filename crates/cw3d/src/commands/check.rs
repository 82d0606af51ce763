use anyhow::{Result, bail};

use crate::config::AppContext;
use crate::log_success;
use crate::project::is_inside_project;
use crate::utils::error_messages::not_inside_project;

pub fn run(ctx: &AppContext) -> Result<()> {
  if !is_inside_project(&ctx.cwd) {
    bail!(not_inside_project(ctx.cwd.display()));
  }
  log_success!("{} is a cw3d project", ctx.cwd.display());
  Ok(())
}
