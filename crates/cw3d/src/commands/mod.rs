pub mod chains;
pub mod check;
pub mod config;
pub mod defaults;
pub mod new;

use anyhow::Result;

use crate::chains::ChainRegistry;
use crate::config::AppContext;
use crate::utils::error_messages::NO_CHAINS_AVAILABLE;
use crate::utils::wizard::{Choice, Wizard};

/// Use `--chain` when given, otherwise let the user pick from the registry.
pub(crate) fn chain_arg_or_select(
  ctx: &AppContext,
  registry: &ChainRegistry,
  wizard: &Wizard,
  chain: Option<&str>,
) -> Result<String> {
  if let Some(name) = chain {
    return Ok(name.to_string());
  }
  if registry.chains().is_empty() {
    anyhow::bail!(NO_CHAINS_AVAILABLE);
  }
  let options: Vec<Choice> = registry
    .chains()
    .iter()
    .map(|c| Choice {
      value: c.short_name.clone(),
      label: c.mainnet_name.clone(),
      detail: Some(format!("({}, testnet {})", c.short_name, c.testnet_chain_name)),
    })
    .collect();
  wizard.select("Select a chain", &options, ctx.config.chain.as_deref())
}
