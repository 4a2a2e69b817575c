//! Shared reporting and startup plumbing for the binaries.
//!
//! All diagnostics go to stderr; stdout stays clean for shell composition.
//! Fatal errors use the fixed `**error**:` prefix and exit status 1.

use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use crate::checks::Violation;

/// Print a fatal error and terminate with exit status 1.
pub fn fail(err: &anyhow::Error) -> ! {
    eprintln!("**error**: {err:#}");
    process::exit(1);
}

/// Parse the command line, routing usage errors through [`fail`]-style
/// reporting (exit 1) rather than clap's default exit status.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            process::exit(0);
        }
        Err(err) => {
            let rendered = err.to_string();
            let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
            eprintln!("**error**: {}", message.trim_end());
            process::exit(1);
        }
    }
}

/// Initialize logging from `RUST_LOG`, with `--verbose` forcing debug output
/// for this crate (which echoes every git invocation).
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("git_tools", log::LevelFilter::Debug);
    }
    builder.init();
}

/// Print each violation on its own stderr line.
pub fn report(violations: &[Violation]) {
    for violation in violations {
        eprintln!("{violation}");
    }
}
