//! Repository hygiene checks.
//!
//! Each check takes a [`Repository`](crate::git::Repository) and an options
//! struct and returns the violations it found as values; the binaries decide
//! how to report them and which exit code to use.

use std::fmt;

pub mod clean;
pub mod non_tracking;
pub mod unpushed;

pub use clean::CleanOptions;

/// What a violation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Unstaged,
    Unmerged,
    Uncommitted,
    Untracked,
    SubmoduleContent,
    Unpushed,
    NonTracking,
}

/// One detected violation with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub category: Category,
    pub message: String,
}

impl Violation {
    pub(crate) fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
