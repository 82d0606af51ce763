use std::io::{self, Write};

use anyhow::Result;

use crate::config::{config_template, global_config_path};
use crate::log_info;
use crate::utils::log::t;

pub fn run() -> Result<()> {
  let path = global_config_path()?;
  let state = if path.exists() { "present" } else { "not created" };
  log_info!("Global config: {} ({})", t::path(path.display()), state);
  log_info!("");
  let mut stdout = io::stdout().lock();
  write!(stdout, "{}", config_template())?;
  Ok(())
}
