use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ScaffoldError;

// Embed the built-in chain table
const CHAINS_TOML: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/chains.toml"));

/// Mainnet/testnet pair a project can be configured for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainConfig {
  pub short_name: String,
  pub mainnet_name: String,
  pub mainnet_chain_id: String,
  pub testnet_chain_id: String,
  pub testnet_chain_name: String,
}

#[derive(Debug, Deserialize)]
struct ChainsFile {
  #[serde(default)]
  chains: Vec<ChainConfig>,
}

/// Read-only lookup table of chains keyed by short name.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
  chains: Vec<ChainConfig>,
}

impl ChainRegistry {
  #[must_use]
  pub fn new(chains: Vec<ChainConfig>) -> Self {
    Self { chains }
  }

  /// Registry bundled with the binary.
  ///
  /// # Errors
  /// Returns an error if the embedded table is not valid TOML.
  pub fn builtin() -> Result<Self> {
    let file: ChainsFile =
      toml::from_str(CHAINS_TOML).context("invalid embedded chain registry")?;
    Ok(Self::new(file.chains))
  }

  #[must_use]
  pub fn chains(&self) -> &[ChainConfig] {
    &self.chains
  }

  /// Exact, case-sensitive match on the short name. First entry wins.
  #[must_use]
  pub fn find(&self, short_name: &str) -> Option<&ChainConfig> {
    self.chains.iter().find(|c| c.short_name == short_name)
  }

  /// Like [`ChainRegistry::find`] but fails with a message listing known chains.
  pub fn resolve(&self, short_name: &str) -> Result<&ChainConfig, ScaffoldError> {
    self
      .find(short_name)
      .ok_or_else(|| ScaffoldError::UnknownChain {
        name: short_name.to_string(),
        known: self.short_names().join(", "),
      })
  }

  #[must_use]
  pub fn short_names(&self) -> Vec<&str> {
    self.chains.iter().map(|c| c.short_name.as_str()).collect()
  }
}

#[cfg(test)]
pub(crate) fn chain(
  short: &str,
  mainnet: &str,
  mainnet_id: &str,
  testnet_id: &str,
  testnet: &str,
) -> ChainConfig {
  ChainConfig {
    short_name: short.to_string(),
    mainnet_name: mainnet.to_string(),
    mainnet_chain_id: mainnet_id.to_string(),
    testnet_chain_id: testnet_id.to_string(),
    testnet_chain_name: testnet.to_string(),
  }
}
