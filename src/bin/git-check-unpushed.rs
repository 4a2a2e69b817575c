use std::process;

use clap::Parser;

use git_tools::checks::unpushed;
use git_tools::git::Repository;
use git_tools::output;

/// Check for local branches ahead of their upstream.
#[derive(Parser)]
#[command(name = "git-check-unpushed", version)]
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
    let violations = match unpushed::run(&repo) {
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
