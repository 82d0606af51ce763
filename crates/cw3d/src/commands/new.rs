use anyhow::{Result, bail};

use crate::chains::ChainRegistry;
use crate::commands::chain_arg_or_select;
use crate::config::AppContext;
use crate::project::{InitOutcome, Initializer, ProjectContext};
use crate::utils::error_messages::OPERATION_CANCELLED;
use crate::utils::git::GitCloner;
use crate::utils::log::t;
use crate::utils::wizard::Wizard;
use crate::{log_info, log_success};

pub fn run(
  ctx: &AppContext,
  registry: &ChainRegistry,
  project_name: &str,
  chain: Option<&str>,
) -> Result<ProjectContext> {
  let wizard = Wizard::new();
  let chain = chain_arg_or_select(ctx, registry, &wizard, chain)?;

  let cloner = GitCloner;
  let initializer = Initializer::new(registry, &cloner, &ctx.config.template.repo)
    .with_template_path(ctx.config.template.path.clone());

  let project = match initializer.initialize(&ctx.cwd, project_name, &chain, &wizard)? {
    InitOutcome::Created(project) => project,
    InitOutcome::Cancelled => bail!(OPERATION_CANCELLED),
  };

  log_info!("");
  log_success!("Created {}", project.project_name);
  log_info!("  Path:  {}", t::path(project.project_dir.display()));
  if let Some(cfg) = registry.find(&chain) {
    log_info!(
      "  Chain: {} (testnet {})",
      t::chain(&cfg.mainnet_name),
      t::chain(&cfg.testnet_chain_name)
    );
  }
  log_info!("");
  log_info!("Next steps:");
  log_info!("  {}", t::cmd(format!("cd {}", project.project_name)));
  log_info!("  {}", t::cmd("yarn install"));
  log_info!("  {}", t::cmd("yarn dev"));
  log_info!("");
  Ok(project)
}
