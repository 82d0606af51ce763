//! Common error messages used across the codebase.
//! Centralizes error message strings to ensure consistency and simplify maintenance.

pub(crate) const OPERATION_CANCELLED: &str = "Operation cancelled";

pub(crate) const NO_CHAINS_AVAILABLE: &str = "no chains available in the registry";

pub(crate) fn not_inside_project(cwd: impl std::fmt::Display) -> String {
  format!(
    "{cwd} is not a cw3d project. Run this command from the project root (expected package.json with workspaces and packages/shared/src/cw3d.config.ts)"
  )
}

pub(crate) fn git_command_failed(command: &str, status: impl std::fmt::Display) -> String {
  format!("git {command} failed: status={status}")
}
