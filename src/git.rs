//! Process-level plumbing for invoking git and capturing its output.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow, bail};

/// Index mode recorded for a gitlink (submodule) entry.
pub const GITLINK_MODE: &str = "160000";

/// One `git ls-files --stage` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEntry {
    pub mode: String,
    pub hash: String,
    pub stage: u8,
    pub path: String,
}

/// Repository context for git operations.
///
/// Encapsulates the working directory git commands run in. Every command is
/// executed with `LC_MESSAGES=C` so the output formats we parse are
/// locale-stable.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository context for the current directory.
    pub fn current() -> Self {
        Self::at(".")
    }

    /// Get the path this repository context operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a git command in this repository's context and return its stdout
    /// trimmed of surrounding whitespace.
    ///
    /// A non-zero exit becomes an error carrying the command line and
    /// whatever git wrote to stderr.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        log::debug!("$ git {} ({})", args.join(" "), self.path.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .env("LC_MESSAGES", "C")
            .output()
            .with_context(|| format!("failed to invoke git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// `git status --porcelain`, optionally with an ignore-submodules mode.
    pub fn status_porcelain(&self, ignore_submodules: Option<&str>) -> Result<String> {
        let flag;
        let mut args = vec!["status", "--porcelain"];
        if let Some(mode) = ignore_submodules {
            flag = format!("--ignore-submodules={mode}");
            args.push(&flag);
        }
        self.run(&args)
    }

    /// `git status --porcelain` scoped to the given paths.
    pub fn status_porcelain_paths(&self, paths: &[&str]) -> Result<String> {
        let mut args = vec!["status", "--porcelain", "--"];
        args.extend_from_slice(paths);
        self.run(&args)
    }

    /// Verbose branch listing, optionally restricted to branches not merged
    /// into HEAD.
    pub fn branch_verbose(&self, only_unmerged: bool) -> Result<String> {
        let mut args = vec!["branch", "-vv", "--no-color"];
        if only_unmerged {
            args.push("--no-merged");
        }
        self.run(&args)
    }

    /// Index stage entries, optionally limited to one pathspec. Fails when a
    /// pathspec matches nothing (`--error-unmatch`).
    pub fn stage_entries(&self, path: Option<&str>) -> Result<Vec<StageEntry>> {
        let mut args = vec!["ls-files", "--error-unmatch", "--stage"];
        if let Some(p) = path {
            args.push("--");
            args.push(p);
        }
        let stdout = self.run(&args)?;
        Ok(stdout.lines().filter_map(parse_stage_line).collect())
    }

    /// Resolve a path to its full repository-relative spelling. The index
    /// form may differ from the argument (trailing slashes, relative
    /// prefixes).
    pub fn full_name(&self, path: &str) -> Result<String> {
        let stdout = self.run(&["ls-files", "--full-name", path])?;
        stdout
            .lines()
            .next()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .ok_or_else(|| anyhow!("could not resolve full path for [{path}]"))
    }

    /// Absolute top-level directory of the working tree.
    pub fn toplevel(&self) -> Result<PathBuf> {
        let stdout = self.run(&["rev-parse", "--show-toplevel"])?;
        self.absolutize(PathBuf::from(stdout))
    }

    /// Absolute path of the repository's git directory.
    pub fn git_dir(&self) -> Result<PathBuf> {
        let stdout = self.run(&["rev-parse", "--git-dir"])?;
        self.absolutize(PathBuf::from(stdout))
    }

    /// Read a single config value.
    pub fn config_get(&self, key: &str) -> Result<String> {
        self.run(&["config", "--get", key])
    }

    /// Remove a whole config section, from the given file or from the local
    /// repository config when `file` is `None`.
    pub fn config_remove_section(&self, file: Option<&str>, section: &str) -> Result<()> {
        let mut args = vec!["config"];
        if let Some(f) = file {
            args.push("-f");
            args.push(f);
        }
        args.push("--remove-section");
        args.push(section);
        self.run(&args).map(|_| ())
    }

    /// Remove a path from the index while leaving nothing tracked there.
    pub fn rm_cached(&self, path: &str) -> Result<()> {
        self.run(&["rm", "--cached", path]).map(|_| ())
    }

    /// Stage a path.
    pub fn add(&self, path: &str) -> Result<()> {
        self.run(&["add", path]).map(|_| ())
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn absolutize(&self, path: PathBuf) -> Result<PathBuf> {
        let path = if path.is_absolute() {
            path
        } else {
            self.path.join(path)
        };
        dunce::canonicalize(&path)
            .with_context(|| format!("failed to canonicalize [{}]", path.display()))
    }
}

/// Parse one `ls-files --stage` line: `<mode> <hash> <stage>\t<path>`.
fn parse_stage_line(line: &str) -> Option<StageEntry> {
    let (meta, path) = line.split_once('\t')?;
    let mut fields = meta.split_whitespace();
    let mode = fields.next()?;
    let hash = fields.next()?;
    let stage = fields.next()?.parse().ok()?;
    Some(StageEntry {
        mode: mode.to_string(),
        hash: hash.to_string(),
        stage,
        path: path.to_string(),
    })
}
