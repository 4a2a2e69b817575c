use std::env;
use std::process;

use clap::Parser;

use git_tools::checks::{CleanOptions, clean};
use git_tools::git::Repository;
use git_tools::output;

/// Check that the git working tree is clean.
#[derive(Parser)]
#[command(name = "git-check-clean", version)]
struct Cli {
    /// Report via the exit code only, without messages
    #[arg(long)]
    exit_code: bool,

    /// Skip the unstaged-changes check
    #[arg(long)]
    no_unstaged: bool,

    /// Skip the staged-but-uncommitted check
    #[arg(long)]
    no_uncommitted: bool,

    /// Skip the untracked-files check
    #[arg(long)]
    no_untracked: bool,

    /// Skip the unmerged-files check
    #[arg(long)]
    no_unmerged: bool,

    /// Ignore submodules in the status query, optionally naming a mode
    #[arg(long, value_name = "MODE", num_args = 0..=1, default_missing_value = "all")]
    ignore_submodules: Option<String>,

    /// Downgrade violations to a warning and exit 0
    #[arg(long)]
    warn: bool,

    /// Echo each git invocation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli: Cli = output::parse_args();
    output::init_logging(cli.verbose);

    let opts = CleanOptions {
        unstaged: !cli.no_unstaged,
        uncommitted: !cli.no_uncommitted,
        untracked: !cli.no_untracked,
        unmerged: !cli.no_unmerged,
        ignore_submodules: cli.ignore_submodules,
    };

    let repo = Repository::current();
    let violations = match clean::run(&repo, &opts) {
        Ok(violations) => violations,
        Err(err) => output::fail(&err),
    };
    if violations.is_empty() {
        return;
    }

    if cli.exit_code {
        process::exit(1);
    }

    output::report(&violations);
    let pwd = env::current_dir().unwrap_or_default();
    if cli.warn {
        eprintln!("Warning in {}", pwd.display());
    } else {
        eprintln!("Error in {}", pwd.display());
        process::exit(1);
    }
}
