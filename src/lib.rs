//! Library backing the `git-check-clean`, `git-check-unpushed`,
//! `git-check-non-tracking` and `git-rm-submodule` binaries.
//!
//! All git knowledge lives behind [`git::Repository`]; the fragile
//! line-format parsing is isolated in [`status`] and [`branch`] so it can be
//! unit-tested against captured output samples without spawning processes.

pub mod branch;
pub mod checks;
pub mod git;
pub mod output;
pub mod status;
pub mod submodule;
pub mod workdir;

pub use checks::{Category, Violation};
