use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the scaffolding workflow.
///
/// User cancellation is not an error; see [`crate::project::InitOutcome`].
#[derive(Debug, Error)]
pub enum ScaffoldError {
  #[error("unknown chain: {name}. Known chains: {known}")]
  UnknownChain { name: String, known: String },

  #[error("invalid project name '{0}': use a plain directory name")]
  InvalidProjectName(String),

  #[error("Failed to clone template from {url}: {reason}")]
  CloneFailed { url: String, reason: String },

  #[error("failed to {action} {}", .path.display())]
  Filesystem {
    action: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("prompt failed: {0}")]
  Prompt(String),
}

impl ScaffoldError {
  pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Filesystem {
      action,
      path: path.into(),
      source,
    }
  }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
