//! Parsing and classification of `git status --porcelain` lines.

/// One porcelain status line: a two-character code and a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub index_state: char,
    pub worktree_state: char,
    pub path: String,
}

/// Parse a porcelain v1 line (`XY <path>`). Empty or malformed lines yield
/// `None`.
pub fn parse_status_line(line: &str) -> Option<StatusEntry> {
    let mut chars = line.chars();
    let index_state = chars.next()?;
    let worktree_state = chars.next()?;
    let path = chars.as_str().strip_prefix(' ')?;
    if path.is_empty() {
        return None;
    }
    Some(StatusEntry {
        index_state,
        worktree_state,
        path: path.to_string(),
    })
}

impl StatusEntry {
    /// True for the line shapes the unstaged check tolerates: index state in
    /// `{' ', M, A, R, C}` and worktree state in `{M, D}`. Any other
    /// non-empty line counts as "unstaged changes".
    pub fn is_worktree_edit(&self) -> bool {
        matches!(self.index_state, ' ' | 'M' | 'A' | 'R' | 'C')
            && matches!(self.worktree_state, 'M' | 'D')
    }

    /// True when the index holds a staged-but-uncommitted change.
    pub fn is_uncommitted(&self) -> bool {
        matches!(self.index_state, 'M' | 'A' | 'D' | 'R' | 'C')
    }

    /// True for the conflict marker pairs left by an unfinished merge.
    pub fn is_unmerged(&self) -> bool {
        matches!(
            (self.index_state, self.worktree_state),
            ('D', 'D') | ('A', 'U') | ('U', 'D') | ('U', 'A') | ('D', 'U') | ('U', 'U')
        )
    }
}
