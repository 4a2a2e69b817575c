//! Working-tree cleanliness check.

use anyhow::Result;

use super::{Category, Violation};
use crate::git::{GITLINK_MODE, Repository};
use crate::status::{StatusEntry, parse_status_line};

const UNSTAGED_MSG: &str = "There are unstaged changes. Use \"git add <file>\" to add.";
const UNMERGED_MSG: &str = "There are unmerged files. Use \"git add <file>\" when merged.";
const UNCOMMITTED_MSG: &str = "There are uncommitted files. Use \"git commit\" to commit.";
const UNTRACKED_MSG: &str =
    "There are untracked files not in .gitignore. Try \"make clean\" to remove temporary files.";
const SUBMODULE_MSG: &str = "There is modified content in submodules.";

/// Which categories to check and how to treat submodules.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub unstaged: bool,
    pub uncommitted: bool,
    pub untracked: bool,
    pub unmerged: bool,
    /// Passed to `--ignore-submodules=<mode>` when set. Also enables the
    /// scoped modified-content-in-submodules check.
    pub ignore_submodules: Option<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            unstaged: true,
            uncommitted: true,
            untracked: true,
            unmerged: true,
            ignore_submodules: None,
        }
    }
}

/// Run the cleanliness check, returning at most one violation per category.
pub fn run(repo: &Repository, opts: &CleanOptions) -> Result<Vec<Violation>> {
    let status = repo.status_porcelain(opts.ignore_submodules.as_deref())?;
    let entries: Vec<StatusEntry> = status.lines().filter_map(parse_status_line).collect();

    let mut violations = classify(&entries, opts);

    // When submodules were ignored above, re-check them with a scoped status
    // query so modified content inside a submodule still surfaces.
    if opts.unstaged
        && opts.ignore_submodules.is_some()
        && submodules_have_content(repo)?
    {
        violations.push(Violation::new(Category::SubmoduleContent, SUBMODULE_MSG));
    }

    Ok(violations)
}

/// Classify parsed status entries into the four violation categories.
fn classify(entries: &[StatusEntry], opts: &CleanOptions) -> Vec<Violation> {
    let mut violations = Vec::new();

    if opts.unstaged && entries.iter().any(|e| !e.is_worktree_edit()) {
        violations.push(Violation::new(Category::Unstaged, UNSTAGED_MSG));
    }
    if opts.unmerged && entries.iter().any(StatusEntry::is_unmerged) {
        violations.push(Violation::new(Category::Unmerged, UNMERGED_MSG));
    }
    if opts.uncommitted && entries.iter().any(StatusEntry::is_uncommitted) {
        violations.push(Violation::new(Category::Uncommitted, UNCOMMITTED_MSG));
    }
    // Deliberately permissive: any status output at all trips the untracked
    // category, so this check doubles as a catch-all "tree is not pristine"
    // gate (submodule content changes show up as ` M <path>`, which no other
    // category matches).
    if opts.untracked && !entries.is_empty() {
        violations.push(Violation::new(Category::Untracked, UNTRACKED_MSG));
    }

    violations
}

/// True when any registered submodule has local modifications, judged by a
/// status query scoped to the gitlink paths.
fn submodules_have_content(repo: &Repository) -> Result<bool> {
    let entries = repo.stage_entries(None)?;
    let submodules: Vec<&str> = entries
        .iter()
        .filter(|e| e.mode == GITLINK_MODE)
        .map(|e| e.path.as_str())
        .collect();
    if submodules.is_empty() {
        return Ok(false);
    }

    let scoped = repo.status_porcelain_paths(&submodules)?;
    Ok(scoped.lines().any(|line| parse_status_line(line).is_some()))
}
