use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

pub mod chains;
mod commands;
pub mod config;
pub mod error;
pub mod project;
pub mod template;
pub mod utils;

use crate::chains::ChainRegistry;
use crate::config::{AppContext, load_config};

/// cw3d - Scaffold a web3 dapp from the scaffold-alchemy template.
#[derive(Debug, Parser)]
#[command(name = "cw3d", author, version, about, long_about = None)]
pub struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  /// Create a new project in ./<PROJECT_NAME>
  New {
    project_name: String,
    /// Chain short name (see `cw3d chains`). Prompts when omitted.
    #[arg(long, short)]
    chain: Option<String>,
  },
  /// Rewrite packages/shared/src/cw3d.config.ts for another chain
  Config {
    /// Chain short name (see `cw3d chains`). Prompts when omitted.
    #[arg(long, short)]
    chain: Option<String>,
  },
  /// List supported chains
  Chains,
  /// Check whether the current directory is a cw3d project
  Check,
  /// Print the documented config file and where the global config lives
  Defaults,
}

pub fn parse() -> Cli {
  Cli::parse()
}

pub fn run() -> Result<()> {
  utils::log::init_diagnostics();
  let cli = parse();
  let cwd = std::env::current_dir().context("failed to resolve current directory")?;
  let ctx = AppContext {
    cwd,
    config: load_config()?,
  };
  let registry = ChainRegistry::builtin()?;

  match cli.command {
    Commands::New {
      project_name,
      chain,
    } => {
      commands::new::run(&ctx, &registry, &project_name, chain.as_deref())?;
    }
    Commands::Config { chain } => {
      commands::config::run(&ctx, &registry, chain.as_deref())?;
    }
    Commands::Chains => commands::chains::run(&registry)?,
    Commands::Check => commands::check::run(&ctx)?,
    Commands::Defaults => commands::defaults::run()?,
  }

  Ok(())
}
