use std::process;

use clap::Parser;

use git_tools::checks::non_tracking;
use git_tools::git::Repository;
use git_tools::output;

/// Check for unmerged local branches with no remote counterpart.
#[derive(Parser)]
#[command(name = "git-check-non-tracking", version)]
struct Cli {
    /// Print messages without failing the exit code
    #[arg(long)]
    no_exit_code: bool,

    /// Echo each git invocation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli: Cli = output::parse_args();
    output::init_logging(cli.verbose);

    let repo = Repository::current();
    let violations = match non_tracking::run(&repo) {
        Ok(violations) => violations,
        Err(err) => output::fail(&err),
    };
    if violations.is_empty() {
        return;
    }

    output::report(&violations);
    if !cli.no_exit_code {
        process::exit(1);
    }
}
