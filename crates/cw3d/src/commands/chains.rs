use anyhow::Result;

use crate::chains::ChainRegistry;
use crate::utils::log::t;
use crate::utils::term::print_table;

pub fn run(registry: &ChainRegistry) -> Result<()> {
  let headers = ["CHAIN", "MAINNET", "ID", "TESTNET", "TESTNET ID"];
  let rows: Vec<Vec<String>> = registry
    .chains()
    .iter()
    .map(|c| {
      vec![
        t::chain(&c.short_name),
        c.mainnet_name.clone(),
        t::id(&c.mainnet_chain_id),
        c.testnet_chain_name.clone(),
        t::id(&c.testnet_chain_id),
      ]
    })
    .collect();
  print_table(&headers, &rows);
  Ok(())
}
