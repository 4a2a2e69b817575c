//! Unpushed-commit check: local branches ahead of their upstream.

use anyhow::Result;

use super::{Category, Violation};
use crate::branch::parse_branch_line;
use crate::git::Repository;

/// Report every branch whose upstream annotation carries an ahead count.
/// Ordering follows git's branch listing.
pub fn run(repo: &Repository) -> Result<Vec<Violation>> {
    let listing = repo.branch_verbose(false)?;
    Ok(scan(&listing))
}

fn scan(listing: &str) -> Vec<Violation> {
    listing
        .lines()
        .filter_map(parse_branch_line)
        .filter_map(|branch| {
            let ahead = branch.ahead?;
            Some(Violation::new(
                Category::Unpushed,
                format!("branch [{}] is ahead [{}] commit(s)", branch.name, ahead),
            ))
        })
        .collect()
}
