//! Non-tracking-branch check: unmerged local branches with no upstream.

use anyhow::Result;

use super::{Category, Violation};
use crate::branch::parse_branch_line;
use crate::git::Repository;

/// Report every branch in the not-fully-merged listing that has no upstream.
pub fn run(repo: &Repository) -> Result<Vec<Violation>> {
    let listing = repo.branch_verbose(true)?;
    Ok(scan(&listing))
}

fn scan(listing: &str) -> Vec<Violation> {
    listing
        .lines()
        .filter_map(parse_branch_line)
        .filter(|branch| branch.upstream.is_none())
        .map(|branch| {
            Violation::new(
                Category::NonTracking,
                format!(
                    "[{}] is not a remote tracking branch and is not fully merged in any tracking branch",
                    branch.name
                ),
            )
        })
        .collect()
}
