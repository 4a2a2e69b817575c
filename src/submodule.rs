//! Sequenced removal of a registered submodule.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info};

use crate::checks::{CleanOptions, clean, non_tracking, unpushed};
use crate::git::{GITLINK_MODE, Repository};
use crate::output;
use crate::workdir::WorkdirGuard;

/// Sentinel recorded in the removal commit when no URL is configured.
const UNKNOWN_URL: &str = "unknown";

#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    /// Leave the staged removal uncommitted.
    pub no_commit: bool,
}

/// Remove the submodule at `dir`.
///
/// Validates registration, moves to the repository toplevel, requires the
/// whole repository to pass the clean/unpushed/non-tracking checks, then
/// deletes the configuration entries, index entry, working tree and metadata
/// directory, and finally commits unless [`RemoveOptions::no_commit`] is set.
///
/// There is no rollback: a failure after mutation has started leaves the
/// repository partially modified.
pub fn remove(dir: &str, opts: &RemoveOptions) -> Result<()> {
    // Gitlink entries never carry a trailing slash in the index.
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || !Path::new(dir).exists() {
        bail!("no such directory [{dir}]");
    }

    let repo = Repository::current();

    // A registered submodule has a gitlink entry staged under the path.
    let entries = repo
        .stage_entries(Some(dir))
        .with_context(|| format!("no such submodule [{dir}]"))?;
    if !entries.iter().any(|e| e.mode == GITLINK_MODE) {
        bail!("no such submodule [{dir}]");
    }

    // The index spelling is authoritative; the argument may carry trailing
    // slashes or relative prefixes.
    let path = repo.full_name(dir)?;
    info!("found submodule [{path}]");

    let top = repo.toplevel()?;
    let _workdir = WorkdirGuard::enter(&top)?;
    info!("root [{}]", top.display());
    let repo = Repository::at(&top);

    // Preconditions over the whole repository, before any mutation.
    let mut violations = clean::run(&repo, &CleanOptions::default())?;
    violations.extend(unpushed::run(&repo)?);
    violations.extend(non_tracking::run(&repo)?);
    if !violations.is_empty() {
        output::report(&violations);
        bail!("repository is not clean, not removing [{path}]");
    }

    let gitdir = repo.git_dir()?;
    debug!("gitdir [{}]", gitdir.display());

    let url = repo
        .config_get(&format!("submodule.{path}.url"))
        .unwrap_or_else(|_| UNKNOWN_URL.to_string());

    // Destructive sequence starts here.
    let section = format!("submodule.{path}");
    repo.config_remove_section(Some(".gitmodules"), &section)?;
    if let Err(err) = repo.config_remove_section(None, &section) {
        // No local section when the submodule was never initialized.
        debug!("no local config section [{section}]: {err:#}");
    }
    repo.rm_cached(&path)?;

    fs::remove_dir_all(&path)
        .with_context(|| format!("failed to remove working tree [{path}]"))?;

    let modules_dir = gitdir.join("modules").join(&path);
    if modules_dir.exists() {
        fs::remove_dir_all(&modules_dir).with_context(|| {
            format!("failed to remove metadata directory [{}]", modules_dir.display())
        })?;
    }

    if opts.no_commit {
        return Ok(());
    }

    repo.add(".gitmodules")?;
    repo.commit(&format!("removed submodule [{path}] (url: \"{url}\")"))?;

    // TODO: commit the removal in super-repositories tracking this one
    Ok(())
}
