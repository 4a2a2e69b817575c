//! Parsing of `git branch -vv` listing lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// One branch listing line: marker, name, abbreviated hash, and the optional
/// bracketed upstream annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    pub current: bool,
    pub name: String,
    pub hash: String,
    pub upstream: Option<String>,
    pub ahead: Option<u32>,
    pub behind: Option<u32>,
}

// `<marker> <name> <hash> <rest>` where the marker is `*` (current branch),
// `+` (checked out in another worktree) or a space.
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([* +]) (\S+) +([0-9a-f]+) (.*)$").expect("valid branch line regex"));

// `[<upstream>]` or `[<upstream>: <state>]` at the start of the rest.
static UPSTREAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]:]+)(:[^\]]*)?\]").expect("valid upstream regex"));

// Current git prints `ahead 2`; very old versions printed `ahead (2)`.
static AHEAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ahead \(?(\d+)\)?").expect("valid ahead regex"));
static BEHIND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"behind \(?(\d+)\)?").expect("valid behind regex"));

/// Parse one `git branch -vv --no-color` line. Detached-HEAD lines and lines
/// that don't fit the listing shape yield `None`.
pub fn parse_branch_line(line: &str) -> Option<BranchEntry> {
    let caps = LINE_RE.captures(line)?;
    let name = &caps[2];
    if name.starts_with('(') {
        // "(HEAD detached at <hash>)" is not a branch
        return None;
    }

    let mut upstream = None;
    let mut ahead = None;
    let mut behind = None;
    if let Some(annotation) = UPSTREAM_RE.captures(&caps[4]) {
        upstream = Some(annotation[1].to_string());
        if let Some(state) = annotation.get(2) {
            ahead = first_count(&AHEAD_RE, state.as_str());
            behind = first_count(&BEHIND_RE, state.as_str());
        }
    }

    Some(BranchEntry {
        current: &caps[1] == "*",
        name: name.to_string(),
        hash: caps[3].to_string(),
        upstream,
        ahead,
        behind,
    })
}

fn first_count(re: &Regex, state: &str) -> Option<u32> {
    re.captures(state).and_then(|caps| caps[1].parse().ok())
}
