use anyhow::{Result, bail};

use crate::chains::ChainRegistry;
use crate::commands::chain_arg_or_select;
use crate::config::AppContext;
use crate::log_success;
use crate::project::{Initializer, is_inside_project};
use crate::utils::error_messages::not_inside_project;
use crate::utils::git::GitCloner;
use crate::utils::log::t;
use crate::utils::wizard::Wizard;

/// Point the project in the current directory at another chain.
pub fn run(ctx: &AppContext, registry: &ChainRegistry, chain: Option<&str>) -> Result<()> {
  if !is_inside_project(&ctx.cwd) {
    bail!(not_inside_project(ctx.cwd.display()));
  }
  let wizard = Wizard::new();
  let chain = chain_arg_or_select(ctx, registry, &wizard, chain)?;

  let cloner = GitCloner;
  let initializer = Initializer::new(registry, &cloner, &ctx.config.template.repo)
    .with_template_path(ctx.config.template.path.clone());
  let path = initializer.update_config(&ctx.cwd, &chain)?;

  let shown = path.strip_prefix(&ctx.cwd).unwrap_or(&path);
  log_success!("Updated {} for {}", shown.display(), chain);
  log_success!("Run {} to pick up the change", t::cmd("yarn dev"));
  Ok(())
}
