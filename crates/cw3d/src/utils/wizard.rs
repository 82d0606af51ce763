use std::fmt;
use std::io::{self, IsTerminal as _, Read, Write};

use anyhow::{Context, Result, anyhow};
use inquire::{Confirm, Select};
use owo_colors::OwoColorize as _;

use crate::project::Prompt;
use crate::{log_info, log_warn};

/// Choice item that renders nicely in interactive lists while retaining an
/// associated value.
#[derive(Clone, Debug)]
pub struct Choice {
  pub value: String,
  pub label: String,
  pub detail: Option<String>,
}

impl fmt::Display for Choice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.detail {
      Some(detail) => write!(f, "{} {}", self.label.cyan().bold(), detail.dimmed()),
      None => write!(f, "{}", self.label.cyan().bold()),
    }
  }
}

/// Interactive prompts. Uses `inquire` on a TTY and a line-based fallback
/// otherwise, so piped input (and tests) can answer.
#[derive(Clone, Debug)]
pub struct Wizard {
  is_tty: bool,
}

impl Default for Wizard {
  fn default() -> Self {
    Self::new()
  }
}

impl Wizard {
  #[must_use]
  pub fn new() -> Self {
    let stdin_tty = io::stdin().is_terminal();
    let stdout_tty = io::stdout().is_terminal();
    Self {
      is_tty: stdin_tty && stdout_tty,
    }
  }

  /// Select one of `options`, returning its value.
  pub fn select(
    &self,
    prompt: &str,
    options: &[Choice],
    default_value: Option<&str>,
  ) -> Result<String> {
    if options.is_empty() {
      anyhow::bail!("cannot prompt for selection without any options");
    }
    let default_idx = default_value
      .and_then(|value| options.iter().position(|opt| opt.value == value))
      .unwrap_or(0);
    if self.is_tty {
      return Select::new(prompt, options.to_vec())
        .with_starting_cursor(default_idx)
        .prompt()
        .map(|choice| choice.value)
        .map_err(|err| anyhow!(err));
    }
    Self::fallback_select(prompt, options, default_value)
  }

  /// Prompt for a yes/no confirmation.
  pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
    if self.is_tty {
      return Confirm::new(prompt)
        .with_default(default)
        .prompt()
        .map_err(|err| anyhow!(err));
    }
    Self::fallback_confirm(prompt, default)
  }

  fn fallback_select(
    prompt: &str,
    options: &[Choice],
    default_value: Option<&str>,
  ) -> Result<String> {
    log_info!("{}", prompt);
    for (idx, opt) in options.iter().enumerate() {
      match &opt.detail {
        Some(detail) => log_info!("  {}. {} {}", idx + 1, opt.label, detail),
        None => log_info!("  {}. {}", idx + 1, opt.label),
      }
    }
    if let Some(def) = default_value {
      log_info!("  (Press Enter to keep {})", def);
    }
    anstream::print!("{}", "-> ".bright_cyan());
    io::stdout().flush().ok();

    let mut input = String::new();
    read_line(&mut input)?;
    pick_choice(options, default_value, input.trim())
  }

  fn fallback_confirm(prompt: &str, default: bool) -> Result<bool> {
    let suffix = if default { "[Y/n]" } else { "[y/N]" };
    log_info!("{} {}", prompt, suffix);
    anstream::print!("{}", "-> ".bright_cyan());
    io::stdout().flush().ok();

    let mut input = String::new();
    read_line(&mut input)?;
    Ok(parse_confirm(input.trim(), default))
  }
}

impl Prompt for Wizard {
  fn confirm(&self, message: &str, default: bool) -> Result<bool> {
    Wizard::confirm(self, message, default)
  }
}

fn parse_confirm(answer: &str, default: bool) -> bool {
  match answer.chars().next() {
    None => default,
    Some(first) => matches!(first, 'y' | 'Y'),
  }
}

fn pick_choice(options: &[Choice], default_value: Option<&str>, answer: &str) -> Result<String> {
  if answer.is_empty() {
    if let Some(def) = default_value
      && let Some(choice) = options.iter().find(|opt| opt.value == def)
    {
      return Ok(choice.value.clone());
    }
    return Ok(options[0].value.clone());
  }
  if let Ok(idx) = answer.parse::<usize>()
    && (1..=options.len()).contains(&idx)
  {
    return Ok(options[idx - 1].value.clone());
  }
  if let Some(found) = options
    .iter()
    .find(|opt| opt.value.eq_ignore_ascii_case(answer) || opt.label.eq_ignore_ascii_case(answer))
  {
    return Ok(found.value.clone());
  }
  log_warn!("Invalid selection: {}", answer);
  anyhow::bail!("invalid selection")
}

fn read_line(target: &mut String) -> Result<()> {
  let mut stdin = io::stdin().lock();
  loop {
    let mut buf = [0u8; 1];
    match stdin.read(&mut buf) {
      Ok(0) => break,
      Ok(_) => {
        let ch = buf[0] as char;
        if ch == '\n' || ch == '\r' {
          break;
        }
        target.push(ch);
        if target.len() > 200 {
          break;
        }
      }
      Err(err) => {
        return Err(err).context("failed to read from stdin");
      }
    }
  }
  Ok(())
}
