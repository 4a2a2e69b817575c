//! Scoped change of the process working directory.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Changes the current working directory and restores the original one on
/// drop, whichever exit path is taken.
#[derive(Debug)]
pub struct WorkdirGuard {
    original: PathBuf,
}

impl WorkdirGuard {
    pub fn enter(dir: &Path) -> Result<Self> {
        let original = env::current_dir().context("failed to read current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to [{}]", dir.display()))?;
        Ok(Self { original })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        // Nothing sensible to do if the original directory vanished.
        let _ = env::set_current_dir(&self.original);
    }
}
