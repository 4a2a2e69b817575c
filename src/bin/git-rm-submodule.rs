use clap::Parser;

use git_tools::output;
use git_tools::submodule::{self, RemoveOptions};

/// Remove a registered submodule: configuration, index entry, working tree
/// and metadata directory. Requires the repository to pass the clean,
/// unpushed and non-tracking checks first.
#[derive(Parser)]
#[command(name = "git-rm-submodule", version)]
struct Cli {
    /// Path of the submodule to remove
    dir: String,

    /// Do not commit the result
    #[arg(long)]
    no_commit: bool,

    /// Echo each git invocation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli: Cli = output::parse_args();
    output::init_logging(cli.verbose);

    let opts = RemoveOptions {
        no_commit: cli.no_commit,
    };
    if let Err(err) = submodule::remove(&cli.dir, &opts) {
        output::fail(&err);
    }
}
