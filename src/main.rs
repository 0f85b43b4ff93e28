//! Binary entry point for `match-versions`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Errors have already been reported by the terminal reporter.
    if match_versions::run().is_err() {
        process::exit(1);
    }
}
